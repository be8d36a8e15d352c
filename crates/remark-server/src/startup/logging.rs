//! File-based logging initialization.
//!
//! Events go to stdout and to a daily-rolling `remark.log` file. The file
//! writer is non-blocking; the returned guard must stay alive for the
//! lifetime of the process or buffered events are lost.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Logging settings resolved from the configuration.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Directory for log files.
    pub dir: PathBuf,
    /// Default level filter, overridable via `RUST_LOG`.
    pub level: String,
}

/// Initialize the global tracing subscriber.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.dir, "remark.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let stdout_layer = fmt::layer().with_target(true);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
