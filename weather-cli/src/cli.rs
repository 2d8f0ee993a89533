use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Select, Text};
use weather_core::{BackgroundSource, Config, lookup_from_config};

use crate::present;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively edit endpoints, timeout and background images.
    Configure,

    /// Print the location of the config file.
    ConfigPath,

    /// Show current weather for a city.
    Show {
        /// City name; several words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,

        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure()?;
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
            }
            Command::Show { city, json } => return show(&city.join(" "), json).await,
        }

        Ok(ExitCode::SUCCESS)
    }
}

async fn show(city: &str, json: bool) -> anyhow::Result<ExitCode> {
    let config = Config::load()?;
    let lookup = lookup_from_config(&config)?;

    eprintln!("{}", present::LOADING);

    match lookup.lookup(city).await {
        Ok(report) => {
            if json {
                let out = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize weather report")?;
                println!("{out}");
            } else {
                println!("{}", present::render_report(&report));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::error!(error = %err, city, "weather lookup failed");
            eprintln!("{}", present::user_message(&err));
            Ok(ExitCode::FAILURE)
        }
    }
}

const STATIC_CHOICE: &str = "static (self-hosted images)";
const UNSPLASH_CHOICE: &str = "unsplash (random stock photo)";

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    cfg.geocoding_url = Text::new("Geocoding endpoint:")
        .with_default(&cfg.geocoding_url)
        .prompt()?;

    cfg.forecast_url = Text::new("Forecast endpoint:")
        .with_default(&cfg.forecast_url)
        .prompt()?;

    cfg.timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(cfg.timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;

    let current_base = match &cfg.background {
        BackgroundSource::Static { base_url } => Some(base_url.clone()),
        BackgroundSource::Unsplash => None,
    };
    let starting = if current_base.is_some() { 0 } else { 1 };

    let choice = Select::new("Background images:", vec![STATIC_CHOICE, UNSPLASH_CHOICE])
        .with_starting_cursor(starting)
        .prompt()?;

    cfg.background = if choice == STATIC_CHOICE {
        let default_base = current_base.unwrap_or_else(|| {
            weather_core::config::DEFAULT_ASSET_BASE_URL.to_string()
        });
        let base_url = Text::new("Image base URL:").with_default(&default_base).prompt()?;
        BackgroundSource::Static { base_url }
    } else {
        BackgroundSource::Unsplash
    };

    cfg.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
