use serde::{Deserialize, Serialize};

/// One temperature reading from the district list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictTemperature {
    pub place: String,
    pub value: Option<f64>,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainfallReading {
    pub place: String,
    pub max: f64,
    pub min: f64,
    pub unit: String,
    pub is_main: bool,
}

/// Current conditions from the district weather report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub update_time: String,
    pub record_time: String,
    pub hko_temperature: Option<f64>,
    pub hko_humidity: Option<f64>,
    pub district_temperatures: Vec<DistrictTemperature>,
    pub rainfall: Vec<RainfallReading>,
    pub icon_codes: Vec<i64>,
    pub warning_messages: Vec<String>,
}

impl WeatherSnapshot {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Largest `max` across rainfall readings, 0 when there are none.
    pub fn max_rainfall(&self) -> f64 {
        self.rainfall.iter().map(|r| r.max).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningEntry {
    pub name: String,
    pub code: String,
    pub action: String,
    pub issue_time: String,
    pub update_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub update_time: String,
    pub general_situation: String,
    pub forecast_period: String,
    pub forecast_desc: String,
    pub outlook: String,
    pub tc_info: String,
    pub fire_danger_warning: String,
}

impl ForecastSummary {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Everything fetched for one view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: WeatherSnapshot,
    pub warnings: Vec<WarningEntry>,
    pub forecast: ForecastSummary,
}
