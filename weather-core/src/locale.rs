use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Languages served by the HKO open-data API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Tc,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Tc => "tc",
        }
    }

    pub const fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Tc]
    }

    /// Lenient lookup: anything outside the supported set falls back to the default.
    pub fn resolve(requested: Option<&str>) -> Lang {
        requested
            .and_then(|code| code.parse().ok())
            .unwrap_or_default()
    }

    pub fn locale(&self) -> &'static Locale {
        match self {
            Lang::En => &EN,
            Lang::Tc => &TC,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "en" => Ok(Lang::En),
            "tc" => Ok(Lang::Tc),
            _ => Err(anyhow::anyhow!(
                "Unsupported language '{value}'. Supported languages: en, tc."
            )),
        }
    }
}

/// Display labels for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UiStrings {
    pub page_title: &'static str,
    pub subtitle: &'static str,
    pub location: &'static str,
    pub warnings_title: &'static str,
    pub issued_at: &'static str,
    pub current_title: &'static str,
    pub updated_at: &'static str,
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub rainfall: &'static str,
    pub at_hko: &'static str,
    pub district_temps_title: &'static str,
    pub forecast_title: &'static str,
    pub general_situation: &'static str,
    pub outlook: &'static str,
    pub show_all: &'static str,
    pub show_less: &'static str,
    pub switch_lang_label: &'static str,
    pub switch_lang_code: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Locale {
    pub lang: Lang,
    /// Place name the API uses for the observatory's own station.
    pub headline_station: &'static str,
    /// chrono strftime pattern for the page date.
    pub date_format: &'static str,
    pub ui: UiStrings,
}

pub fn resolve_locale(requested: Option<&str>) -> &'static Locale {
    Lang::resolve(requested).locale()
}

static EN: Locale = Locale {
    lang: Lang::En,
    headline_station: "Hong Kong Observatory",
    date_format: "%A, %d %B",
    ui: UiStrings {
        page_title: "Hong Kong Weather",
        subtitle: "Data from Hong Kong Observatory",
        location: "Hong Kong",
        warnings_title: "Weather Warnings",
        issued_at: "Issued at",
        current_title: "Current Weather",
        updated_at: "Updated at",
        temperature: "Temperature",
        humidity: "Humidity",
        rainfall: "Rainfall",
        at_hko: "at HK Observatory",
        district_temps_title: "Temperatures across Hong Kong",
        forecast_title: "Weather Forecast",
        general_situation: "General Situation",
        outlook: "Outlook",
        show_all: "Show all districts ▾",
        show_less: "Show less ▴",
        switch_lang_label: "繁",
        switch_lang_code: "tc",
    },
};

static TC: Locale = Locale {
    lang: Lang::Tc,
    headline_station: "香港天文台",
    date_format: "%Y年%m月%d日",
    ui: UiStrings {
        page_title: "香港天氣",
        subtitle: "資料來自香港天文台",
        location: "香港",
        warnings_title: "天氣警告",
        issued_at: "發出時間",
        current_title: "即時天氣",
        updated_at: "更新時間",
        temperature: "氣溫",
        humidity: "相對濕度",
        rainfall: "雨量",
        at_hko: "香港天文台",
        district_temps_title: "各區氣溫",
        forecast_title: "天氣預報",
        general_situation: "天氣概況",
        outlook: "展望",
        show_all: "顯示所有地區 ▾",
        show_less: "收起 ▴",
        switch_lang_label: "EN",
        switch_lang_code: "en",
    },
};
