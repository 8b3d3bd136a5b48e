use crate::core::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// sqlx logs every statement at info; keep it to slow-query warnings
const QUIET_DEPENDENCIES: &[&str] = &["sqlx=warn", "hyper=warn"];

/// Filter directives for the configured level, e.g. `info,sqlx=warn,hyper=warn`
pub fn default_directives(config: &LoggingConfig) -> String {
    std::iter::once(config.level.as_str())
        .chain(QUIET_DEPENDENCIES.iter().copied())
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directives(config))
            .context("Invalid log filter directives")?,
    };

    let console = config.console || config.format == "console";

    // Exactly one of the two layers is installed
    let console_layer = console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_ansi(true)
            .with_line_number(true)
    });
    let json_layer = (!console).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .context("Failed to install tracing subscriber")
}
