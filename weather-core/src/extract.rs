//! Reshape raw HKO documents into the crate's model types.
//!
//! Each extractor has a pure form taking `Option<&Value>` (absent means the
//! fetch failed) and an async form that fetches through an [`HkoSource`].
//! Both always return a usable value.

use serde_json::Value;

use crate::{
    document::DocExt,
    fetch::{Endpoint, HkoSource},
    locale::{Lang, Locale},
    model::{DistrictTemperature, ForecastSummary, RainfallReading, WarningEntry, WeatherSnapshot},
    time::normalize,
};

/// Marker HKO puts in `rainfall.data[].main` for the main stations.
const MAIN_STATION_MARKER: &str = "TRUE";

pub fn extract_current(doc: Option<&Value>, locale: &Locale) -> WeatherSnapshot {
    let Some(doc) = doc else {
        return WeatherSnapshot::default();
    };

    let headline = locale.headline_station;

    let hko_humidity = doc
        .block_data("humidity")
        .iter()
        .find(|h| h.opt_str("place") == Some(headline))
        .and_then(|h| h.opt_f64("value"));

    let mut hko_temperature = None;
    let mut district_temperatures = Vec::new();
    for t in doc.block_data("temperature") {
        let value = t.opt_f64("value");
        if t.opt_str("place") == Some(headline) {
            hko_temperature = value;
        }
        district_temperatures.push(DistrictTemperature {
            place: t.str_or("place", ""),
            value,
            unit: t.str_or("unit", "C"),
        });
    }

    let rainfall = doc
        .block_data("rainfall")
        .iter()
        .map(|r| RainfallReading {
            place: r.str_or("place", ""),
            max: r.f64_or("max", 0.0),
            min: r.f64_or("min", 0.0),
            unit: r.str_or("unit", "mm"),
            // Only the literal string counts; a JSON `true` does not.
            is_main: r.opt_str("main") == Some(MAIN_STATION_MARKER),
        })
        .collect();

    let record_time = doc
        .get("temperature")
        .map(|block| normalize(block.opt_str("recordTime")))
        .unwrap_or_default();

    WeatherSnapshot {
        update_time: normalize(doc.opt_str("updateTime")),
        record_time,
        hko_temperature,
        hko_humidity,
        district_temperatures,
        rainfall,
        icon_codes: doc.items("icon").iter().filter_map(Value::as_i64).collect(),
        warning_messages: doc
            .items("warningMessage")
            .iter()
            .filter_map(|m| m.as_str().map(str::to_string))
            .collect(),
    }
}

pub fn extract_warnings(doc: Option<&Value>) -> Vec<WarningEntry> {
    let Some(entries) = doc.and_then(Value::as_object) else {
        return Vec::new();
    };

    entries
        .values()
        .filter(|info| info.is_object())
        .map(|info| WarningEntry {
            name: info.str_or("name", ""),
            code: info.str_or("code", ""),
            action: info.str_or("actionCode", ""),
            issue_time: normalize(info.opt_str("issueTime")),
            update_time: normalize(info.opt_str("updateTime")),
        })
        .collect()
}

pub fn extract_forecast(doc: Option<&Value>) -> ForecastSummary {
    let Some(doc) = doc else {
        return ForecastSummary::default();
    };

    ForecastSummary {
        update_time: normalize(doc.opt_str("updateTime")),
        general_situation: doc.str_or("generalSituation", ""),
        forecast_period: doc.str_or("forecastPeriod", ""),
        forecast_desc: doc.str_or("forecastDesc", ""),
        outlook: doc.str_or("outlook", ""),
        tc_info: doc.str_or("tcInfo", ""),
        fire_danger_warning: doc.str_or("fireDangerWarning", ""),
    }
}

pub async fn current_weather(source: &dyn HkoSource, lang: Lang) -> WeatherSnapshot {
    let doc = source.fetch(Endpoint::CurrentWeather, lang).await;
    extract_current(doc.as_ref(), lang.locale())
}

pub async fn warning_summary(source: &dyn HkoSource, lang: Lang) -> Vec<WarningEntry> {
    let doc = source.fetch(Endpoint::WarningSummary, lang).await;
    extract_warnings(doc.as_ref())
}

pub async fn forecast(source: &dyn HkoSource, lang: Lang) -> ForecastSummary {
    let doc = source.fetch(Endpoint::Forecast, lang).await;
    extract_forecast(doc.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::resolve_locale;
    use serde_json::json;

    fn en() -> &'static Locale {
        resolve_locale(Some("en"))
    }

    fn rhrread() -> Value {
        json!({
            "updateTime": "2024-01-15T14:02:00+08:00",
            "icon": [51, 60],
            "warningMessage": ["The Cold Weather Warning is in force."],
            "humidity": {
                "recordTime": "2024-01-15T14:00:00+08:00",
                "data": [{ "place": "Hong Kong Observatory", "value": 72, "unit": "percent" }]
            },
            "temperature": {
                "recordTime": "2024-01-15T14:00:00+08:00",
                "data": [
                    { "place": "Hong Kong Observatory", "value": 25, "unit": "C" },
                    { "place": "Tai Po", "value": 23 }
                ]
            },
            "rainfall": {
                "data": [
                    { "place": "Central & Western District", "max": 4, "min": 0, "unit": "mm", "main": "TRUE" },
                    { "place": "Eastern District", "max": 2, "main": "FALSE" },
                    { "place": "Kwai Tsing", "main": "true" },
                    { "place": "Islands District", "main": true },
                    { "place": "North District" }
                ]
            }
        })
    }

    #[test]
    fn extracts_headline_and_district_temperatures() {
        let snapshot = extract_current(Some(&rhrread()), en());

        assert_eq!(snapshot.hko_temperature, Some(25.0));
        assert_eq!(snapshot.hko_humidity, Some(72.0));
        assert_eq!(snapshot.update_time, "14:02 HKT 15/01/2024");
        assert_eq!(snapshot.record_time, "14:00 HKT 15/01/2024");

        let places: Vec<_> = snapshot
            .district_temperatures
            .iter()
            .map(|t| t.place.as_str())
            .collect();
        assert_eq!(places, ["Hong Kong Observatory", "Tai Po"]);
        assert_eq!(snapshot.district_temperatures[1].unit, "C");
        assert_eq!(snapshot.district_temperatures[1].value, Some(23.0));
    }

    #[test]
    fn main_station_requires_exact_marker() {
        let snapshot = extract_current(Some(&rhrread()), en());
        let flags: Vec<_> = snapshot.rainfall.iter().map(|r| r.is_main).collect();
        assert_eq!(flags, [true, false, false, false, false]);
    }

    #[test]
    fn rainfall_defaults() {
        let snapshot = extract_current(Some(&rhrread()), en());
        let north = &snapshot.rainfall[4];
        assert_eq!(north.max, 0.0);
        assert_eq!(north.min, 0.0);
        assert_eq!(north.unit, "mm");
        assert_eq!(snapshot.max_rainfall(), 4.0);
    }

    #[test]
    fn icons_and_messages_pass_through() {
        let snapshot = extract_current(Some(&rhrread()), en());
        assert_eq!(snapshot.icon_codes, [51, 60]);
        assert_eq!(snapshot.warning_messages, ["The Cold Weather Warning is in force."]);
    }

    #[test]
    fn empty_string_warning_message_is_empty_list() {
        let doc = json!({ "warningMessage": "", "icon": "" });
        let snapshot = extract_current(Some(&doc), en());
        assert!(snapshot.warning_messages.is_empty());
        assert!(snapshot.icon_codes.is_empty());
    }

    #[test]
    fn headline_lookup_uses_locale_place_name() {
        let doc = json!({
            "humidity": { "data": [{ "place": "香港天文台", "value": 80 }] },
            "temperature": { "data": [
                { "place": "京士柏", "value": 19 },
                { "place": "香港天文台", "value": 20 }
            ] }
        });

        let tc = extract_current(Some(&doc), resolve_locale(Some("tc")));
        assert_eq!(tc.hko_temperature, Some(20.0));
        assert_eq!(tc.hko_humidity, Some(80.0));

        let en = extract_current(Some(&doc), en());
        assert_eq!(en.hko_temperature, None);
        assert_eq!(en.hko_humidity, None);
        assert_eq!(en.district_temperatures.len(), 2);
    }

    #[test]
    fn absent_documents_give_defaults() {
        assert!(extract_current(None, en()).is_empty());
        assert!(extract_warnings(None).is_empty());
        assert!(extract_forecast(None).is_empty());
    }

    #[test]
    fn warnings_skip_non_object_entries() {
        let doc = json!({
            "WFIRE": { "name": "Fire", "code": "WFIRE" },
            "_meta": "ignore"
        });

        let warnings = extract_warnings(Some(&doc));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "WFIRE");
        assert_eq!(warnings[0].name, "Fire");
        assert_eq!(warnings[0].action, "");
        assert_eq!(warnings[0].issue_time, "");
    }

    #[test]
    fn warnings_keep_document_order() {
        let doc = json!({
            "WTS": {
                "name": "Thunderstorm Warning", "code": "WTS", "actionCode": "ISSUE",
                "issueTime": "2024-06-01T09:15:00+08:00", "updateTime": "2024-06-01T09:15:00+08:00"
            },
            "WCOLD": { "name": "Cold Weather Warning", "code": "WCOLD", "actionCode": "REISSUE" },
            "WFIRE": { "name": "Yellow Fire Danger Warning", "code": "WFIREY" }
        });

        let warnings = extract_warnings(Some(&doc));
        let codes: Vec<_> = warnings.iter().map(|w| w.code.as_str()).collect();
        assert_eq!(codes, ["WTS", "WCOLD", "WFIREY"]);
        assert_eq!(warnings[0].issue_time, "09:15 HKT 01/06/2024");
        assert_eq!(warnings[1].action, "REISSUE");
    }

    #[test]
    fn non_object_warning_document_is_empty() {
        assert!(extract_warnings(Some(&json!([1, 2]))).is_empty());
    }

    #[test]
    fn forecast_copies_fields() {
        let doc = json!({
            "updateTime": "2024-01-15T11:45:00+08:00",
            "generalSituation": "A dry northeast monsoon is affecting southern China.",
            "forecastPeriod": "Weather forecast for this afternoon and tonight",
            "forecastDesc": "Fine.",
            "outlook": "Dry in the next few days.",
            "fireDangerWarning": "Yellow"
        });

        let summary = extract_forecast(Some(&doc));
        assert_eq!(summary.update_time, "11:45 HKT 15/01/2024");
        assert_eq!(summary.forecast_desc, "Fine.");
        assert_eq!(summary.fire_danger_warning, "Yellow");
        assert_eq!(summary.tc_info, "");
    }
}
