use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use hko_weather_core::{Config, Lang, PageContext, WeatherService};
use inquire::Select;
use std::fmt;
use tracing::{debug, info};

use crate::render::render_page;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "hko-weather", version, about = "Hong Kong Observatory weather in your terminal")]
pub struct Cli {
    /// Log filter, e.g. "debug" or "hko_weather_core=trace" (overrides RUST_LOG).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Choose the default language interactively.
    Configure,

    /// Show current weather, warnings and the forecast.
    Show {
        /// Language code ("en" or "tc"); anything else uses the default.
        lang: Option<String>,

        /// Print the page context as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { lang, json } => show(lang.as_deref(), json).await,
        }
    }
}

struct LangChoice(Lang);

impl fmt::Display for LangChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.0.locale().ui.page_title)
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let options: Vec<LangChoice> = Lang::all().iter().copied().map(LangChoice).collect();
    let start = Lang::all()
        .iter()
        .position(|lang| *lang == config.default_lang())
        .unwrap_or(0);

    let choice = Select::new("Default language:", options)
        .with_starting_cursor(start)
        .prompt()
        .context("Language selection was cancelled")?;

    config.set_default_lang(choice.0);
    config.save()?;

    let path = Config::config_file_path()?;
    info!(lang = %choice.0, path = %path.display(), "saved configuration");
    println!("Default language set to {} in {}", choice.0, path.display());

    Ok(())
}

async fn show(requested: Option<&str>, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    debug!(?config, "loaded configuration");

    let lang = config.lang_for(requested);
    let service = WeatherService::from_config(&config)?;
    let report = service.report(lang).await;
    let ctx = PageContext::new(report, lang.locale(), Utc::now());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ctx).context("Failed to serialize page context")?
        );
    } else {
        print!("{}", render_page(&ctx));
    }

    Ok(())
}
