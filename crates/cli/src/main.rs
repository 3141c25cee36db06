//! covid-dashboard CLI
//!
//! Fetches COVID-19 statistics for one country selection and prints the
//! confirmed / recovered / deaths chart descriptors as JSON on stdout.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use covid_dashboard_core::models::chart::ChartSet;
use covid_dashboard_core::models::settings::{DashboardSettings, Theme};
use covid_dashboard_core::CovidDashboard;

#[derive(Parser)]
#[command(
    name = "covid-dashboard",
    version,
    about = "COVID-19 statistics as chart-ready JSON"
)]
struct Cli {
    /// Country identifier, or "global" for the summary endpoint
    #[arg(short, long)]
    country: Option<String>,

    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the statistics API base URL
    #[arg(long)]
    api_base_url: Option<String>,

    /// Print the configured country options and exit
    #[arg(long)]
    list_countries: bool,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,
}

/// What a host page needs to render one update.
#[derive(Serialize)]
struct DashboardView<'a> {
    title: &'a str,
    country: &'a str,
    label: Option<&'a str>,
    theme: &'a Theme,
    charts: ChartSet,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "covid_dashboard=info,covid_dashboard_core=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    if cli.list_countries {
        print_json(&settings.country_options, cli.compact)?;
        return Ok(());
    }

    let dashboard = CovidDashboard::new(settings).context("invalid dashboard settings")?;
    let country = cli
        .country
        .as_deref()
        .unwrap_or_else(|| dashboard.default_country());

    tracing::info!(
        provider = dashboard.provider_name(),
        "updating charts for {country}"
    );
    let charts = dashboard
        .update_charts(country)
        .await
        .with_context(|| format!("failed to update charts for '{country}'"))?;

    let settings = dashboard.settings();
    let view = DashboardView {
        title: &settings.title,
        country,
        label: settings.label_for(country),
        theme: &settings.theme,
        charts,
    };
    print_json(&view, cli.compact)
}

fn load_settings(cli: &Cli) -> anyhow::Result<DashboardSettings> {
    let mut settings = match &cli.config {
        Some(path) => DashboardSettings::load_from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => DashboardSettings::default(),
    };
    if let Some(url) = &cli.api_base_url {
        settings.api_base_url = url.clone();
    }
    tracing::debug!(options = settings.country_options.len(), "settings loaded");
    Ok(settings)
}

fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> anyhow::Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}

