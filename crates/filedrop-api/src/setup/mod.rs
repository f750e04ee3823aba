//! Application setup and initialization
//!
//! Startup is split out of main.rs so tests can build the same router against
//! their own state.

pub mod routes;
pub mod server;

use crate::state::AppState;
use crate::template::FormTemplate;
use anyhow::{Context, Result};
use filedrop_core::{Config, DestinationKind};
use filedrop_storage::create_destination;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: &Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    filedrop_infra::init_telemetry(config.json_logs(), config.environment())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    let form = FormTemplate::new().context("Failed to compile upload form template")?;

    let destination = create_destination(config)
        .await
        .context("Failed to set up upload destination")?;

    match destination.kind() {
        DestinationKind::Directory => {
            tracing::info!(dir = %config.upload_dir().display(), "Saving uploads to directory");
        }
        DestinationKind::Discard if config.is_production() => {
            tracing::warn!("Uploads are discarded; set UPLOAD_DESTINATION=directory to keep them");
        }
        DestinationKind::Discard => {
            tracing::info!("Uploads are discarded");
        }
    }

    let state = Arc::new(AppState::new(
        form,
        destination,
        config.max_upload_size_bytes(),
    ));

    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
