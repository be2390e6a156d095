// src/lib.rs

//! Pantry Recipe Catalog
//!
//! Small HTTP service exposing a "recipes" collection backed by an in-memory
//! store. Recipes carry a server-assigned id, a name, and an ordered list of
//! ingredient strings.
//!
//! # HTTP surface
//!
//! - `GET /recipes` - list the collection
//! - `POST /recipes` - create a recipe (the server assigns the id)
//! - `PUT /recipes/{id}` - replace a recipe's name and ingredients in place
//! - `DELETE /recipes/{id}` - remove a recipe
//! - `GET /health` - liveness check
//! - `GET /admin/stats` - request counters and collection size

pub mod server;

pub use server::{
    create_router, run_server, Recipe, RecipeId, RecipeStore, ServerConfig, ServerState,
    StoreError,
};
