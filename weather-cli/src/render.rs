use hko_weather_core::{PageContext, WeatherSnapshot};

const PLACEHOLDER: &str = "--";

/// Render the page as plain text. Empty sections are left out, so a total
/// upstream failure still prints the header and the language switch.
pub fn render_page(ctx: &PageContext) -> String {
    let ui = &ctx.ui;
    let mut out = Vec::new();

    out.push(format!("{} · {}", ui.page_title, ui.location));
    out.push(ctx.today_date.clone());
    out.push(ui.subtitle.to_string());

    if !ctx.warnings.is_empty() {
        out.push(String::new());
        out.push(heading(ui.warnings_title));
        for w in &ctx.warnings {
            let mut line = format!("  {} ({})", w.name, w.code);
            if !w.issue_time.is_empty() {
                line.push_str(&format!("  {} {}", ui.issued_at, w.issue_time));
            }
            out.push(line);
        }
    }

    if !ctx.current.is_empty() {
        out.push(String::new());
        out.extend(current_section(ctx));
    }

    let forecast = &ctx.forecast;
    if !forecast.is_empty() {
        out.push(String::new());
        out.push(heading(ui.forecast_title));
        if !forecast.update_time.is_empty() {
            out.push(format!("{} {}", ui.updated_at, forecast.update_time));
        }
        labelled(&mut out, ui.general_situation, &forecast.general_situation);
        labelled(&mut out, &forecast.forecast_period, &forecast.forecast_desc);
        labelled(&mut out, ui.outlook, &forecast.outlook);
        for extra in [&forecast.tc_info, &forecast.fire_danger_warning] {
            if !extra.is_empty() {
                out.push(format!("  {extra}"));
            }
        }
    }

    out.push(String::new());
    out.push(format!(
        "[{}] hko-weather show {}",
        ui.switch_lang_label, ui.switch_lang_code
    ));

    let mut page = out.join("\n");
    page.push('\n');
    page
}

fn current_section(ctx: &PageContext) -> Vec<String> {
    let ui = &ctx.ui;
    let current: &WeatherSnapshot = &ctx.current;
    let mut out = vec![heading(ui.current_title)];

    if !current.update_time.is_empty() {
        out.push(format!("{} {}", ui.updated_at, current.update_time));
    }
    out.push(format!(
        "{}: {} {}",
        ui.temperature,
        current
            .hko_temperature
            .map(|t| format!("{t}°C"))
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        ui.at_hko
    ));
    out.push(format!(
        "{}: {}",
        ui.humidity,
        current
            .hko_humidity
            .map(|h| format!("{h}%"))
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    ));
    if !current.rainfall.is_empty() {
        out.push(format!("{}: {} mm", ui.rainfall, ctx.max_rainfall));
    }
    for message in &current.warning_messages {
        out.push(format!("  ! {message}"));
    }

    if !current.district_temperatures.is_empty() {
        out.push(String::new());
        out.push(heading(ui.district_temps_title));
        let width = current
            .district_temperatures
            .iter()
            .map(|t| t.place.chars().count())
            .max()
            .unwrap_or(0);
        for t in &current.district_temperatures {
            let value = t
                .value
                .map(|v| format!("{v}°{}", t.unit))
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            let pad = width - t.place.chars().count();
            out.push(format!("  {}{}  {value}", t.place, " ".repeat(pad)));
        }
    }

    out
}

fn heading(title: &str) -> String {
    format!("== {title} ==")
}

fn labelled(out: &mut Vec<String>, label: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    if !label.is_empty() {
        out.push(label.to_string());
    }
    out.push(format!("  {text}"));
}
