//! Configuration module
//!
//! This module provides the server and upload configuration. Values come from the
//! process environment (and a `.env` file when present); tests build `Config`
//! directly so the save directory can point at a temporary location.

use std::env;
use std::path::{Path, PathBuf};

use crate::destination_kind::DestinationKind;

// Common constants
const SERVER_PORT: u16 = 8080;
const MAX_UPLOAD_SIZE_MB: usize = 10;
const UPLOAD_DIR: &str = "uploads";

/// Server-level configuration
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
    /// Emit JSON log lines instead of the compact console format
    pub json_logs: bool,
}

/// Upload handling configuration
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub base: BaseConfig,
    pub destination: DestinationKind,
    pub upload_dir: PathBuf,
    pub max_upload_size_bytes: usize,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<UploadConfig>);

impl Config {
    fn as_upload(&self) -> &UploadConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.as_upload().base.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        let config = UploadConfig::from_vars(|key| env::var(key).ok())?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_upload().validate()
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.as_upload().base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.as_upload().base.environment
    }

    pub fn json_logs(&self) -> bool {
        self.as_upload().base.json_logs
    }

    pub fn destination(&self) -> DestinationKind {
        self.as_upload().destination
    }

    pub fn upload_dir(&self) -> &Path {
        &self.as_upload().upload_dir
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.as_upload().max_upload_size_bytes
    }
}

impl UploadConfig {
    /// Build the configuration from a variable lookup.
    ///
    /// `from_env` passes `std::env::var`; unset variables fall back to defaults.
    pub fn from_vars<F>(get: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = get("ENVIRONMENT")
            .or_else(|| get("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let server_port = match get("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => SERVER_PORT,
        };

        let json_logs = get("LOG_FORMAT")
            .map(|format| format.trim().eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let destination = match get("UPLOAD_DESTINATION") {
            Some(value) => value.parse()?,
            None => DestinationKind::default(),
        };

        let max_upload_size_mb = match get("MAX_UPLOAD_SIZE_MB") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be a valid number"))?,
            None => MAX_UPLOAD_SIZE_MB,
        };

        let max_upload_size_bytes = max_upload_size_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB is too large"))?;

        let upload_dir = get("UPLOAD_DIR")
            .map(|dir| dir.trim().to_string())
            .unwrap_or_else(|| UPLOAD_DIR.to_string());

        Ok(UploadConfig {
            base: BaseConfig {
                server_port,
                environment,
                json_logs,
            },
            destination,
            upload_dir: PathBuf::from(upload_dir),
            max_upload_size_bytes,
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!(
                "MAX_UPLOAD_SIZE_MB must be greater than zero"
            ));
        }

        if self.destination == DestinationKind::Directory
            && self.upload_dir.as_os_str().is_empty()
        {
            return Err(anyhow::anyhow!(
                "UPLOAD_DESTINATION=directory requires UPLOAD_DIR to be set"
            ));
        }

        Ok(())
    }
}
