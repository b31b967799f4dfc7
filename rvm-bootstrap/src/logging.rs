use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use rvm_infrastructure::AppConfig;

const LOG_FILE_PREFIX: &str = "rvm-admin.log";

/// Installs the global subscriber. `RUST_LOG` wins over the `info` default.
///
/// With `log_dir` set, output goes to a daily-rolling file and the returned
/// guard must live until shutdown so buffered lines are flushed.
pub fn init_tracing(config: &AppConfig) -> Result<Option<WorkerGuard>> {
    let json = config.log_format == "json";
    let Some(dir) = &config.log_dir else {
        let builder = tracing_subscriber::fmt().with_env_filter(env_filter());
        let result = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        result.map_err(|err| anyhow!("failed to init tracing: {}", err))?;
        return Ok(None);
    };

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(writer);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|err| anyhow!("failed to init tracing: {}", err))?;
    Ok(Some(guard))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
