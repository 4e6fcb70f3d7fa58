use super::{
    catalog_config::CatalogConfig, cors_config, error::ConfigError, seed_config::SeedConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub catalog: CatalogConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            catalog: CatalogConfig::from_env()?,
            seed: SeedConfig::from_env(),
        })
    }
}
