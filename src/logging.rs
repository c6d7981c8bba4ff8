use anyhow::Result;
use std::path::Path;
use tracing::info;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// Initialize structured logging system
///
/// Returns the file appender guard when a log file is configured; keep it
/// alive for the lifetime of the process so buffered lines are flushed.
pub fn init_logging(log_level: Option<&str>, log_file: Option<&Path>, json_console: bool) -> Result<Option<WorkerGuard>> {
    // Set up environment filter
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            let level = log_level.unwrap_or("info");
            EnvFilter::try_new(level)
        })
        .map_err(|e| anyhow::anyhow!("Failed to create log filter: {}", e))?;

    let registry = Registry::default().with(env_filter);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!json_console)
        .with_target(true);
    let console_layer = if json_console {
        console_layer.json().boxed()
    } else {
        console_layer.boxed()
    };

    // Add file layer if log file is specified
    let guard = if let Some(log_path) = log_file {
        let directory = log_path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = log_path
            .file_name()
            .map_or_else(|| "contacts.log".into(), |name| name.to_string_lossy().into_owned());
        let file_appender = rolling::daily(directory, file_name);
        let (non_blocking_appender, guard) = non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_appender)
            .with_ansi(false)
            .with_target(true)
            .json();

        registry.with(console_layer).with(file_layer).try_init()?;
        Some(guard)
    } else {
        registry.with(console_layer).try_init()?;
        None
    };

    info!("Logging system initialized");
    Ok(guard)
}

/// Performance timing utilities
pub struct OperationTimer {
    operation: &'static str,
    start: std::time::Instant,
}

impl OperationTimer {
    /// Start timing `operation`
    #[must_use]
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            start: std::time::Instant::now(),
        }
    }

    /// Name of the timed operation
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// Log the elapsed time and return it
    pub fn finish(self) -> std::time::Duration {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = self.operation,
            duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            "Operation completed"
        );
        duration
    }
}
