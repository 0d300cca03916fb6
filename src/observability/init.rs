//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with an env-filter and a plain-text
//! file sink under the data directory, so an embedding UI application
//! (which typically has no console) still gets inspectable logs.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Initializes the tracing subscriber with a file sink.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable (highest priority)
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Logs are appended to `<data dir>/tangocho.log` (see
/// [`crate::infrastructure::data_dir`]).
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory or file cannot be created
///   (observability is optional)
/// - Idempotent: safe to call multiple times, only the first call takes
///   effect
///
/// # Examples
///
/// ```no_run
/// use tangocho::observability::init_tracing;
/// use tangocho::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// };
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_path = data_dir.join("tangocho.log");
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Arc::new(file)),
    );

    let _ = subscriber.try_init();
}
