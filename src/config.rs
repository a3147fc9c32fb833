use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub gnews_api_key: String,
    pub newsapi_key: String,
    pub openai_api_key: String,
    /// Timeout applied to every outbound HTTP call (search, extraction, model).
    pub http_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let gnews_api_key = env::var("GNEWS_API_KEY")?;
        let newsapi_key = env::var("NEWSAPI_KEY")?;
        let openai_api_key = env::var("OPENAI_API_KEY")?;

        // Server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        let timeout_secs = env::var("HTTP_TIMEOUT_SECS").unwrap_or_else(|_| "10".to_string());
        let timeout_secs = timeout_secs
            .parse::<u64>()
            .map_err(|e| AppError::ConfigError(format!("Invalid HTTP_TIMEOUT_SECS: {}", e)))?;

        Ok(Config {
            server_addr,
            gnews_api_key,
            newsapi_key,
            openai_api_key,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
