use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Serialize;

use crate::{
    locale::{Lang, Locale, UiStrings},
    model::{ForecastSummary, WarningEntry, WeatherReport, WeatherSnapshot},
};

const HKT_OFFSET_SECS: i32 = 8 * 3600;

/// Everything a page renderer needs for one view.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub current: WeatherSnapshot,
    pub warnings: Vec<WarningEntry>,
    pub forecast: ForecastSummary,
    pub lang: Lang,
    pub ui: UiStrings,
    pub today_date: String,
    pub max_rainfall: f64,
}

impl PageContext {
    pub fn new(report: WeatherReport, locale: &Locale, now: DateTime<Utc>) -> Self {
        let max_rainfall = report.current.max_rainfall();

        Self {
            current: report.current,
            warnings: report.warnings,
            forecast: report.forecast,
            lang: locale.lang,
            ui: locale.ui,
            today_date: today_date(locale, now),
            max_rainfall,
        }
    }
}

/// `now` as a Hong Kong calendar date in the locale's format.
pub fn today_date(locale: &Locale, now: DateTime<Utc>) -> String {
    let hkt = FixedOffset::east_opt(HKT_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    now.with_timezone(&hkt).format(locale.date_format).to_string()
}
