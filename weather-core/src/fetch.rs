use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::{fmt::Debug, time::Duration};
use tracing::{debug, warn};

use crate::{config::Config, locale::Lang};

pub const BASE_URL: &str = "https://data.weather.gov.hk/weatherAPI/opendata/weather.php";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// The three HKO datasets this crate reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Hong Kong District Weather Report, updated hourly.
    CurrentWeather,
    /// Special weather warnings, updated every 10 minutes.
    WarningSummary,
    /// Local weather forecast, updated hourly.
    Forecast,
}

impl Endpoint {
    /// Value of the `dataType` query parameter.
    pub fn data_type(&self) -> &'static str {
        match self {
            Endpoint::CurrentWeather => "rhrread",
            Endpoint::WarningSummary => "warnsum",
            Endpoint::Forecast => "flw",
        }
    }

    pub const fn all() -> &'static [Endpoint] {
        &[
            Endpoint::CurrentWeather,
            Endpoint::WarningSummary,
            Endpoint::Forecast,
        ]
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.data_type())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to HKO failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HKO responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("HKO response was not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A source of raw HKO documents.
///
/// `fetch` never fails: any problem is reported as `None` so callers can
/// substitute their empty defaults.
#[async_trait]
pub trait HkoSource: Send + Sync + Debug {
    async fn fetch(&self, endpoint: Endpoint, lang: Lang) -> Option<Value>;
}

#[derive(Debug, Clone)]
pub struct HkoClient {
    base_url: String,
    http: Client,
}

impl HkoClient {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::with_base_url(&config.base_url, config.timeout())
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.to_string(),
            http,
        })
    }

    /// Fallible form of [`HkoSource::fetch`], with the reason for failure.
    pub async fn try_fetch(&self, endpoint: Endpoint, lang: Lang) -> Result<Value, FetchError> {
        debug!(%endpoint, %lang, "fetching HKO data");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("dataType", endpoint.data_type()), ("lang", lang.as_str())])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Transport)?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(FetchError::Decode)
    }
}

#[async_trait]
impl HkoSource for HkoClient {
    async fn fetch(&self, endpoint: Endpoint, lang: Lang) -> Option<Value> {
        match self.try_fetch(endpoint, lang).await {
            Ok(doc) => Some(doc),
            Err(err) => {
                warn!(%endpoint, %lang, error = %err, "failed to fetch HKO data");
                None
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
