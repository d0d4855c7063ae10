use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    /// Origin allowed by CORS; cross-origin requests are refused when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: bind_addr
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "BIND_ADDR".to_string(),
                    value: bind_addr.clone(),
                })?,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN").ok(),
        })
    }
}
