use std::env;
use std::path::PathBuf;

/// Startup seed loading settings
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

impl SeedConfig {
    /// Environment variables:
    /// - SEED_ENABLED: "false" or "0" disables seeding (default: enabled)
    /// - SEED_FILE: JSON array of products (default: "/data/products.json")
    pub fn from_env() -> Self {
        let enabled = env::var("SEED_ENABLED")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);
        let path = env::var("SEED_FILE").unwrap_or_else(|_| "/data/products.json".to_string());

        Self {
            enabled,
            path: PathBuf::from(path),
        }
    }
}
