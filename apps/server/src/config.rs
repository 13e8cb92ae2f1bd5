use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Forward classification to the external model service.
    pub use_model_backend: bool,
    /// Base URL of the external model service.
    pub model_backend_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
            use_model_backend: env::var("USE_MODEL_BACKEND")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            model_backend_url: env::var("MODEL_BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(var) => write!(f, "Invalid value for: {}", var),
        }
    }
}

impl std::error::Error for ConfigError {}
