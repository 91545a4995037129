//! 文件日志
//!
//! The terminal belongs to the UI, so every record goes to
//! `<dir>/console.log`. `log` records from the client and core crates are
//! bridged in by `try_init()`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// 日志级别环境变量
const LOG_ENV: &str = "AGENTCRAFT_LOG";
const LOG_FILE: &str = "console.log";

/// Install the file subscriber. Keep the guard alive until exit.
pub fn init_logging(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).or_else(|_| EnvFilter::try_new("info"))?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(guard)
}
