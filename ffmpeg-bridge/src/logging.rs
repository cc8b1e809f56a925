use std::path::PathBuf;

use color_eyre::Result;
use color_eyre::config::HookBuilder;
use color_eyre::config::Theme;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::InitError;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

/// Daily log files kept per binary
const MAX_LOG_FILES: usize = 7;

/// Directory the bridges write their logs to
#[must_use]
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("ffmpeg-bridge")
}

fn file_appender(directory: PathBuf, name: &str) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(directory)
}

/// Install a plain-text `color_eyre` report handler and, when a log directory
/// can be created, a file-only `tracing` subscriber for the binary `name`,
/// filtered by `RUST_LOG` (default `info`).
///
/// stdout and stderr belong to ffmpeg, so nothing is logged there and reports
/// carry no colour. The log file is optional: `None` means the bridge runs
/// without one. A returned guard must be held until the process is about to
/// exit.
pub fn setup(name: &str) -> Result<Option<WorkerGuard>> {
    HookBuilder::default()
        .theme(Theme::new())
        .display_env_section(false)
        .install()?;

    let appender = match file_appender(log_dir(), name) {
        Ok(appender) => appender,
        Err(_) => match file_appender(std::env::temp_dir().join("ffmpeg-bridge"), name) {
            Ok(appender) => appender,
            Err(_) => return Ok(None),
        },
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(non_blocking)
            .with_ansi(false)
            .finish(),
    );

    Ok(installed.is_ok().then_some(guard))
}
