use serde::Deserialize;
use std::{error::Error, fs};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CommonConfig {
    pub project_name: String,
    /// Base of the REST API, e.g. `http://localhost:8080/api`.
    pub api_base_url: String,
    /// Base of the backend host itself, used for image paths.
    pub backend_base_url: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorefrontConfig {
    /// Where the session token is persisted between runs.
    pub token_path: String,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConsoleConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub common: CommonConfig,
    pub storefront: StorefrontConfig,
    pub console: ConsoleConfig,
}

impl Config {
    pub fn load(config_path: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let contents = fs::read_to_string(config_path)?;
        let config = serde_yml::from_str(&contents)?;

        Ok(config)
    }
}
