use std::sync::Arc;
use tracing::debug;

use crate::{
    config::Config,
    extract,
    fetch::{HkoClient, HkoSource},
    locale::Lang,
    model::WeatherReport,
};

/// Assembles a [`WeatherReport`] from the three HKO datasets.
#[derive(Debug)]
pub struct WeatherService {
    source: Arc<dyn HkoSource>,
}

impl WeatherService {
    pub fn new(source: Arc<dyn HkoSource>) -> Self {
        Self { source }
    }

    /// Service backed by the live HKO API, using the configured URL and timeout.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = HkoClient::from_config(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Fetch and normalize everything for `lang`.
    ///
    /// Unsupported codes are served in the default language. The three
    /// requests run concurrently and fail independently; a failed one leaves
    /// its section empty.
    pub async fn get_all_weather_data(&self, lang: Option<&str>) -> WeatherReport {
        self.report(Lang::resolve(lang)).await
    }

    pub async fn report(&self, lang: Lang) -> WeatherReport {
        let source = &*self.source;

        let (current, warnings, forecast) = tokio::join!(
            extract::current_weather(source, lang),
            extract::warning_summary(source, lang),
            extract::forecast(source, lang),
        );

        debug!(
            %lang,
            districts = current.district_temperatures.len(),
            warnings = warnings.len(),
            "assembled weather report"
        );

        WeatherReport {
            current,
            warnings,
            forecast,
        }
    }
}
