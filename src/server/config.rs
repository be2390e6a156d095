// src/server/config.rs
//! Configuration file parsing for the Pantry server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address, stats endpoint toggle
//! - [[seed]] - Recipes loaded into the store at startup

use crate::server::ServerConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// TOML configuration file structure
#[derive(Debug, Deserialize)]
pub struct PantryConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Recipes loaded into the store at startup
    #[serde(default = "default_seed")]
    pub seed: Vec<SeedRecipe>,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            server: ServerSection::default(),
            seed: default_seed(),
        }
    }
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Bind address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Expose request counters on /admin/stats
    #[serde(default = "default_true")]
    pub stats: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            stats: true,
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_true() -> bool {
    true
}

/// A recipe loaded into the store at startup
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRecipe {
    /// Recipe name
    pub name: String,

    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Recipes a fresh server starts with when no [[seed]] section is configured
///
/// A new server must list a non-empty collection, so the defaults match the
/// two starters every deployment has shipped with.
pub fn default_seed() -> Vec<SeedRecipe> {
    vec![
        SeedRecipe {
            name: "boiled white rice".to_string(),
            ingredients: vec![
                "1 cup white rice".to_string(),
                "2 cups water".to_string(),
                "pinch of salt".to_string(),
            ],
        },
        SeedRecipe {
            name: "milkshake".to_string(),
            ingredients: vec![
                "2 tbsp cocoa".to_string(),
                "2 cups vanilla ice cream".to_string(),
                "1 cup milk".to_string(),
            ],
        },
    ]
}

impl PantryConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PantryConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate bind address
        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        // Validate seed recipes
        for seed in &self.seed {
            if seed.name.trim().is_empty() {
                anyhow::bail!("seed recipe with empty name");
            }
            if seed.ingredients.is_empty() {
                anyhow::bail!("seed recipe '{}' has no ingredients", seed.name);
            }
        }

        Ok(())
    }

    /// Convert to the internal ServerConfig structure
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let bind_addr = self.server.bind.parse()?;

        Ok(ServerConfig {
            bind_addr,
            seed: self.seed.clone(),
            request_stats: self.server.stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PantryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert!(config.server.stats);
        assert_eq!(config.seed.len(), 2);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[server]
bind = "127.0.0.1:9090"
stats = false

[[seed]]
name = "toast"
ingredients = ["bread", "butter"]
"#;
        let config: PantryConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.bind, "127.0.0.1:9090");
        assert!(!config.server.stats);
        assert_eq!(config.seed.len(), 1);
        assert_eq!(config.seed[0].name, "toast");

        let server_config = config.to_server_config().unwrap();
        assert_eq!(server_config.bind_addr.port(), 9090);
        assert!(!server_config.request_stats);
    }

    #[test]
    fn test_missing_seed_section_uses_defaults() {
        let toml_str = r#"
[server]
bind = "0.0.0.0:8080"
"#;
        let config: PantryConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.seed.len(), 2);
        assert_eq!(config.seed[0].name, "boiled white rice");
    }

    #[test]
    fn test_invalid_bind_address() {
        let toml_str = r#"
[server]
bind = "not-an-address"
"#;
        let config: PantryConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seed_with_empty_name_rejected() {
        let toml_str = r#"
[[seed]]
name = ""
ingredients = ["water"]
"#;
        let config: PantryConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seed_without_ingredients_rejected() {
        let toml_str = r#"
[[seed]]
name = "air sandwich"
"#;
        let config: PantryConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
bind = "127.0.0.1:0"

[[seed]]
name = "toast"
ingredients = ["bread"]
"#
        )
        .unwrap();

        let config = PantryConfig::load(file.path()).unwrap();
        assert_eq!(config.seed.len(), 1);
        assert_eq!(config.server.bind, "127.0.0.1:0");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml [[[").unwrap();

        assert!(PantryConfig::load(file.path()).is_err());
    }
}
