use crate::Result;
use chrono::Local;
use mc_rcon_config::{AdminConfig, LogFileNameFormat};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn log_filename(format: &LogFileNameFormat) -> String {
    match format {
        LogFileNameFormat::Date => format!("mc-rcon-{}.log", Local::now().format("%Y-%m-%d")),
        LogFileNameFormat::Timestamp => format!("mc-rcon-{}.log", Local::now().timestamp()),
        LogFileNameFormat::DateTime => {
            format!("mc-rcon-{}.log", Local::now().format("%Y-%m-%d_%H-%M-%S"))
        }
        LogFileNameFormat::None => "mc-rcon.log".to_string(),
    }
}

/// Creates an environment-based filter for tracing output.
///
/// The filter respects the `RUST_LOG` environment variable and falls back
/// to `info` when the variable is unset or invalid.
fn tracing_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes the global tracing subscriber with configured layers and filters.
///
/// Sets up a non-blocking subscriber with:
/// - Environment-based filtering (respects `RUST_LOG`)
/// - Compact formatting with thread names and line numbers
/// - Span close event tracking
/// - A daily-rolling log file, plus stdout when configured
///
/// # Returns
///
/// Guard objects that must be kept alive for the duration of the program,
/// otherwise buffered log lines are lost.
///
/// # Errors
///
/// Returns an error if a tracing subscriber is already installed.
pub fn init(log_dir: &Path, config: &AdminConfig) -> Result<Vec<WorkerGuard>> {
    let file_appender = rolling::daily(log_dir, log_filename(&config.log_file));
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

    let mut guards = vec![file_guard];

    let file_layer = layer()
        .with_writer(file_writer)
        .with_file(true)
        .with_thread_names(true)
        .with_line_number(true)
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE)
        .compact();

    if config.log_to_stdout {
        let (stdout_writer, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(stdout_guard);

        tracing_subscriber::registry()
            .with(tracing_env_filter())
            .with(file_layer)
            .with(
                layer()
                    .with_writer(stdout_writer)
                    .with_file(false)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .with_level(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(tracing_env_filter())
            .with(file_layer)
            .try_init()?;
    }

    Ok(guards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_installs_subscriber_once() {
        let dir = TempDir::new().unwrap();
        let config = AdminConfig::default();

        let guards = init(dir.path(), &config).unwrap();
        assert_eq!(guards.len(), 1);

        // The global subscriber is already installed now.
        assert!(init(dir.path(), &config).is_err());
    }

    #[test]
    fn test_log_filename_formats() {
        assert_eq!(log_filename(&LogFileNameFormat::None), "mc-rcon.log");
        assert!(log_filename(&LogFileNameFormat::Date).starts_with("mc-rcon-"));
    }
}
