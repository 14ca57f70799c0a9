use anyhow::Context;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber, writing to stderr.
///
/// An explicit `--log-level` wins over `RUST_LOG` and must be a valid filter.
pub fn setup_logging(level: Option<&str>) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level)?)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn build_filter(level: Option<&str>) -> anyhow::Result<EnvFilter> {
    match level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid --log-level filter '{level}'")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_is_used() {
        assert!(build_filter(Some("debug")).is_ok());
        assert!(build_filter(Some("hko_weather_core=trace,warn")).is_ok());
    }

    #[test]
    fn invalid_level_is_an_error() {
        let err = build_filter(Some("hko_weather_core=loud")).unwrap_err();
        assert!(err.to_string().contains("Invalid --log-level filter"));
    }
}
