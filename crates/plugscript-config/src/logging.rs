//! Logging initialization with environment variable support

use crate::{AppConfig, LogFormat};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// Environment variables:
/// - `RUST_LOG`: standard filter directives, applied on top of the configured level
/// - `LOG_FORMAT`: override format (json, pretty)
///
/// # Examples
///
/// ```bash
/// # Debug output for the pipeline only
/// RUST_LOG=plugscript_pipeline=debug plugscript generate
///
/// # Structured logs for CI
/// LOG_FORMAT=json plugscript generate --compile
/// ```
pub fn initialize(config: &AppConfig) {
    let log_level = config.logging.level.parse().unwrap_or(tracing::Level::INFO);
    let env_filter = EnvFilter::from_default_env().add_directive(log_level.into());

    match resolve_format(std::env::var("LOG_FORMAT").ok().as_deref(), config) {
        LogFormat::Json => {
            let _ = tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init();
        }
        LogFormat::Pretty => {
            let _ = tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init();
        }
    }
}

/// Span grouping all logs of one task run
pub fn task_span(task: &str) -> tracing::Span {
    tracing::info_span!("task", task = %task)
}

fn resolve_format(env_override: Option<&str>, config: &AppConfig) -> LogFormat {
    env_override
        .and_then(|f| match f.to_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" | "human" => Some(LogFormat::Pretty),
            _ => None,
        })
        .unwrap_or_else(|| config.logging.format.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_format_overrides_config() {
        let config = AppConfig::default();
        assert_eq!(resolve_format(Some("JSON"), &config), LogFormat::Json);
        assert_eq!(resolve_format(Some("human"), &config), LogFormat::Pretty);
    }

    #[test]
    fn test_unknown_env_format_falls_back() {
        let mut config = AppConfig::default();
        config.logging.format = LogFormat::Json;
        assert_eq!(resolve_format(Some("xml"), &config), LogFormat::Json);
        assert_eq!(resolve_format(None, &config), LogFormat::Json);
    }
}
