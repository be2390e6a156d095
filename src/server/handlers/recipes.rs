// src/server/handlers/recipes.rs
//! CRUD handlers for the recipe collection

use crate::server::store::{RecipeId, StoreError};
use crate::server::ServerState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Request body for recipe creation
///
/// Extra fields (including an `id`) are ignored; the server assigns ids.
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Request body for recipe replacement
///
/// Clients may echo the recipe id; when present it must match the path.
#[derive(Debug, Deserialize)]
pub struct UpdateRecipeRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub ingredients: Vec<String>,
}

/// List all recipes
///
/// GET /recipes
pub async fn list_recipes(State(state): State<Arc<RwLock<ServerState>>>) -> Response {
    let state = state.read().await;
    state.metrics.record_request();

    Json(state.store.list().to_vec()).into_response()
}

/// Create a recipe
///
/// POST /recipes
///
/// Responds 201 with the created recipe, including its server-assigned id.
pub async fn create_recipe(
    State(state): State<Arc<RwLock<ServerState>>>,
    Json(request): Json<CreateRecipeRequest>,
) -> Response {
    if let Some(response) = check_payload(&request.name, &request.ingredients) {
        return response;
    }

    let mut state = state.write().await;
    state.metrics.record_request();

    let recipe = state.store.insert(request.name, request.ingredients);
    state.metrics.record_created();
    info!("Created recipe '{}' ({})", recipe.name, recipe.id);

    (StatusCode::CREATED, Json(recipe)).into_response()
}

/// Replace a recipe
///
/// PUT /recipes/:id
///
/// Responds 204 on success. The stored recipe's name and ingredients are
/// replaced wholesale; the id never changes.
pub async fn update_recipe(
    State(state): State<Arc<RwLock<ServerState>>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateRecipeRequest>,
) -> Response {
    let id: RecipeId = match id.parse() {
        Ok(id) => id,
        Err(_) => return invalid_id(&id),
    };

    // A body id is redundant but accepted when it names the same recipe
    if let Some(body_id) = &request.id {
        let matches_path = body_id.parse::<RecipeId>().is_ok_and(|b| b == id);
        if !matches_path {
            let error = serde_json::json!({
                "error": "id_mismatch",
                "message": format!("Body id {} does not match path id {}", body_id, id),
            });
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    }

    if let Some(response) = check_payload(&request.name, &request.ingredients) {
        return response;
    }

    let mut state = state.write().await;
    state.metrics.record_request();

    match state.store.update(&id, request.name, request.ingredients) {
        Ok(()) => {
            state.metrics.record_updated();
            info!("Updated recipe {}", id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(StoreError::NotFound(_)) => {
            state.metrics.record_lookup_failure();
            not_found(&id)
        }
    }
}

/// Remove a recipe
///
/// DELETE /recipes/:id
///
/// Responds 204 on success.
pub async fn delete_recipe(
    State(state): State<Arc<RwLock<ServerState>>>,
    Path(id): Path<String>,
) -> Response {
    let id: RecipeId = match id.parse() {
        Ok(id) => id,
        Err(_) => return invalid_id(&id),
    };

    let mut state = state.write().await;
    state.metrics.record_request();

    match state.store.remove(&id) {
        Ok(recipe) => {
            state.metrics.record_deleted();
            info!("Deleted recipe '{}' ({})", recipe.name, id);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(StoreError::NotFound(_)) => {
            state.metrics.record_lookup_failure();
            not_found(&id)
        }
    }
}

/// Shape-of-payload checks shared by create and update
fn check_payload(name: &str, ingredients: &[String]) -> Option<Response> {
    if name.trim().is_empty() {
        let error = serde_json::json!({
            "error": "invalid_payload",
            "message": "Recipe name must not be empty",
        });
        return Some((StatusCode::BAD_REQUEST, Json(error)).into_response());
    }

    if ingredients.is_empty() {
        let error = serde_json::json!({
            "error": "invalid_payload",
            "message": "At least one ingredient is required",
        });
        return Some((StatusCode::BAD_REQUEST, Json(error)).into_response());
    }

    None
}

fn invalid_id(raw: &str) -> Response {
    let error = serde_json::json!({
        "error": "invalid_id",
        "message": format!("'{}' is not a valid recipe id", raw),
    });
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

fn not_found(id: &RecipeId) -> Response {
    let error = serde_json::json!({
        "error": "not_found",
        "message": format!("Recipe {} not found", id),
    });
    (StatusCode::NOT_FOUND, Json(error)).into_response()
}
