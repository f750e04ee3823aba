use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_FILTER: &str = "filedrop=debug,tower_http=debug";

/// Initialize tracing with an `EnvFilter` read from `RUST_LOG`.
///
/// Console output uses a compact format unless `json` is set, in which case each
/// event is one JSON object per line.
pub fn init_telemetry(json: bool, environment: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let console_fmt = (!json).then(|| {
        tracing_subscriber::fmt::layer().event_format(
            Format::default()
                .compact()
                .with_target(false)
                .without_time(),
        )
    });
    let json_fmt = json.then(|| tracing_subscriber::fmt::layer().json());

    tracing_subscriber::registry()
        .with(filter)
        .with(console_fmt)
        .with(json_fmt)
        .try_init()?;

    tracing::info!(environment = %environment, json, "Tracing initialized");
    Ok(())
}

pub async fn shutdown_telemetry() {
    tracing::debug!("Telemetry shutdown");
}
