use crate::core::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    // Logs go to stderr so command output on stdout stays machine readable
    if !json_output(config) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(true)
                    .with_line_number(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init();
    }
}

fn json_output(config: &LoggingConfig) -> bool {
    config.format == "json"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    #[test]
    fn test_format_alone_selects_output() {
        let json = Config::from_toml("[logging]\nformat = \"json\"\n").unwrap();
        assert!(json_output(&json.logging));

        let console = Config::from_toml("[logging]\nformat = \"console\"\n").unwrap();
        assert!(!json_output(&console.logging));

        assert!(!json_output(&LoggingConfig::default()));
    }
}
