//! Configuration management
//!
//! Loads server settings from config.toml with DOCSTORE_* environment
//! overrides on top of built-in defaults.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration, loaded once at startup
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the HTTP listener
    pub bind_address: String,

    /// Port for the HTTP listener
    pub port: u16,

    /// Root directory for document storage
    pub storage_root: String,
}

impl ServerConfig {
    /// Load configuration from config.toml (optional) with environment
    /// overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("bind_address", "127.0.0.1")?
            .set_default("port", 3000)?
            .set_default("storage_root", "./storage")?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("DOCSTORE"))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.port == 0 {
            return Err(config::ConfigError::Message("port cannot be 0".into()));
        }

        if self.storage_root.is_empty() {
            return Err(config::ConfigError::Message(
                "storage_root cannot be empty".into(),
            ));
        }

        Ok(())
    }

    /// Bind address and port as a socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Storage root as a PathBuf
    pub fn storage_root_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_root)
    }
}
