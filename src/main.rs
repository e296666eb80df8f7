//! CLI entry point for the Metaculus-to-hub submission tool.
//!
//! One subcommand per disease hub; each fetches the community prediction,
//! extracts the hub quantile set, and writes the weekly submission CSV.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use metac_hub_forecasts::fetch::BasicClient;
use metac_hub_forecasts::submission::pipeline::{Hub, run};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "metac_hub_forecasts")]
#[command(about = "Convert Metaculus community predictions into forecast-hub submission CSVs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the weekly FluSight submission
    Flu {
        /// Submission due date, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Directory the submission tree is rooted at
        #[arg(short, long, default_value = ".")]
        output_dir: String,
    },
    /// Build the weekly RSV hub submission
    Rsv {
        /// Submission due date, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Directory the submission tree is rooted at
        #[arg(short, long, default_value = ".")]
        output_dir: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/metac_hub_forecasts.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("metac_hub_forecasts.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let (hub, date, output_dir) = match cli.command {
        Commands::Flu { date, output_dir } => (Hub::Flu, date, output_dir),
        Commands::Rsv { date, output_dir } => (Hub::Rsv, date, output_dir),
    };

    // the submission due date anchors every horizon; overridable for
    // reruns of past weeks
    let today = date.unwrap_or_else(|| Local::now().date_naive());

    let client = BasicClient::new();
    let path = run(&client, hub, today, &output_dir).await?;

    info!(path = %path, "done");
    Ok(())
}
