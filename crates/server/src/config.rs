//! Server configuration from environment variables

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MODEL_PATH: &str = "models/california_housing_rf.json";

/// Invalid configuration value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value '{value}' for {name}: {reason}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
    /// Maximum number of model calls running at once
    pub inference_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            inference_workers: default_workers(),
        }
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `MODEL_PATH` and `INFERENCE_WORKERS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError {
                name: "PORT",
                value: port.clone(),
                reason: "must be a number between 0 and 65535".to_string(),
            })?;
        }

        if let Some(path) = lookup("MODEL_PATH") {
            if path.trim().is_empty() {
                return Err(ConfigError {
                    name: "MODEL_PATH",
                    value: path,
                    reason: "must not be empty".to_string(),
                });
            }
            config.model_path = PathBuf::from(path);
        }

        if let Some(workers) = lookup("INFERENCE_WORKERS") {
            config.inference_workers = match workers.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError {
                        name: "INFERENCE_WORKERS",
                        value: workers,
                        reason: "must be a positive integer".to_string(),
                    })
                }
            };
        }

        Ok(config)
    }

    /// Address the listener binds to
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError {
                name: "HOST",
                value: self.host.clone(),
                reason: "must be an IP address".to_string(),
            })
    }
}
