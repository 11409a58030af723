use std::{
    fs::{self, OpenOptions},
    path::Path,
    sync::Mutex,
};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub mod formatter;

pub use formatter::*;

use crate::configs::{Config, LoggingConfig};

/// Build the `EnvFilter` directive string; `log` crate noise is capped at error.
pub fn filter_directives(logging: Option<&LoggingConfig>) -> String {
    let level = logging
        .and_then(|l| l.level.as_deref())
        .unwrap_or("info");
    let filters = logging.and_then(|l| l.filters.as_deref()).unwrap_or("");

    if filters.is_empty() {
        format!("{},log=error", level)
    } else {
        format!("{},log=error,{}", level, filters)
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the config.
pub fn init(config: &Config) {
    let logging = config.logging.as_ref();
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(logging)));

    let stdout_layer = fmt::layer()
        .event_format(EngineFormatter::new(true))
        .with_ansi(true);

    let file_layer = logging.and_then(|l| l.file.as_ref()).and_then(|file| {
        if let Some(parent) = Path::new(&file.path).parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Failed to create log directory: {}", e);
            }
        }

        match OpenOptions::new().create(true).append(true).open(&file.path) {
            Ok(f) => Some(
                fmt::layer()
                    .with_writer(Mutex::new(f))
                    .event_format(EngineFormatter::new(false))
                    .with_ansi(false),
            ),
            Err(e) => {
                eprintln!("Failed to open log file {}: {}", file.path, e);
                None
            }
        }
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives() {
        assert_eq!(filter_directives(None), "info,log=error");
    }

    #[test]
    fn configured_directives() {
        let logging = LoggingConfig {
            level: Some("debug".into()),
            filters: Some("clinttools_engine::project=trace".into()),
            file: None,
        };
        assert_eq!(
            filter_directives(Some(&logging)),
            "debug,log=error,clinttools_engine::project=trace"
        );
    }
}
