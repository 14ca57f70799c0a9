//! Core library for the `hko-weather` viewer.
//!
//! This crate defines:
//! - Fetching the Hong Kong Observatory open-data documents
//! - Normalizing them into stable domain models (current weather, warnings, forecast)
//! - Language selection and the UI string bundles for each language
//! - Configuration handling
//!
//! It is used by `hko-weather`, but can also back other front ends.

pub mod config;
pub mod document;
pub mod extract;
pub mod fetch;
pub mod locale;
pub mod model;
pub mod service;
pub mod time;
pub mod view;

pub use config::Config;
pub use fetch::{Endpoint, FetchError, HkoClient, HkoSource};
pub use locale::{Lang, Locale, UiStrings, resolve_locale};
pub use model::{
    DistrictTemperature, ForecastSummary, RainfallReading, WarningEntry, WeatherReport,
    WeatherSnapshot,
};
pub use service::WeatherService;
pub use view::PageContext;
