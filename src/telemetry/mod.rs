use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::infrastructure::config::TelemetryConfig;

static TELEMETRY: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber once. `RUST_LOG` wins over the configured
/// filter.
pub fn init(config: &TelemetryConfig) {
    TELEMETRY.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.filter));
        let registry = tracing_subscriber::registry().with(env_filter);
        if config.json {
            registry.with(tracing_subscriber::fmt::layer().json()).init();
        } else {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    });
}
