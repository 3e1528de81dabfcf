use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppSettings {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub api_keys: ApiKeysConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub environment: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiKeysConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
}

impl AppSettings {
    pub fn from_env() -> Result<Self, AppError> {
        // App config
        let app_name = env::var("APP_NAME").unwrap_or_else(|_| "oneclicktoknow".to_string());
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        // Server config
        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| AppError::Configuration("PORT must be a valid port number".to_string()))?;

        // API keys
        let openai_api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| AppError::Configuration("OPENAI_API_KEY must be set".to_string()))?;

        // Overridable so tests can point the client at a mock server
        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        Ok(Self {
            app: AppConfig {
                name: app_name,
                environment,
            },
            server: ServerConfig {
                host: server_host,
                port: server_port,
            },
            api_keys: ApiKeysConfig {
                openai_api_key,
                openai_base_url,
            },
        })
    }
}
