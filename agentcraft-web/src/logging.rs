//! tracing 初始化

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Install the global subscriber.
///
/// `log` records (actix `Logger`, the resource client) are bridged in by
/// `init()`. The returned guard must live until shutdown so file output is
/// flushed.
pub fn init(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let (file_writer, guard) = match &config.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, "agentcraft-web.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter);
    match (config.json, file_writer) {
        (true, Some(file)) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stdout.and(file)),
            )
            .try_init()?,
        (true, None) => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
        (false, Some(file)) => registry
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .try_init()?,
        (false, None) => registry
            .with(tracing_subscriber::fmt::layer())
            .try_init()?,
    }

    Ok(guard)
}
