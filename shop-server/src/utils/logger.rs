//! Logging Infrastructure
//!
//! Console output is pretty in development and JSON when asked for; with a
//! log directory, a daily rotating JSON file is written as well.

use std::fs;
use std::sync::Mutex;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Default filter (e.g. "info", "shop_server=debug"); `RUST_LOG` overrides it
/// * `json_format` - JSON console output instead of the pretty format
/// * `log_dir` - Optional directory for rotating log files
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if json_format {
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_thread_ids(true)
                .boxed(),
        );
    } else {
        layers.push(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .boxed(),
        );
    }

    if let Some(dir) = log_dir {
        fs::create_dir_all(dir)?;
        let app_log = RollingFileAppender::new(Rotation::DAILY, dir, "shop-server");
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_writer(Mutex::new(app_log))
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()?;

    Ok(())
}
