use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingSettings;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Supported formats
/// are `json`, `pretty` and `compact`; anything else falls back to json.
pub fn init_logging(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_level(true);

    let registry = tracing_subscriber::registry().with(filter);

    match settings.format.as_str() {
        "pretty" => registry.with(fmt_layer.pretty()).init(),
        "compact" => registry.with(fmt_layer.compact()).init(),
        _ => registry.with(fmt_layer.json()).init(),
    }
}
