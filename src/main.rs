//! Demo entry point: resolves one route and prints the resulting context.
//!
//! Usage: `specialty-dashboard <route-path> [--admin] [--premium] [--yaml] [--config <file>]`

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use specialty_dashboard::adapters::InMemoryThemeSink;
use specialty_dashboard::application::DashboardShell;
use specialty_dashboard::config::{AppConfig, ConfigError, LogFormat};
use specialty_dashboard::domain::access::AccessContext;
use specialty_dashboard::ports::ThemeSinkError;

/// Resolve a dashboard route and print its specialty context.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Route path to enter, e.g. `/cardiology/patients/42`.
    path: String,

    /// Resolve as an administrator.
    #[arg(long)]
    admin: bool,

    /// Resolve as a premium subscriber.
    #[arg(long)]
    premium: bool,

    /// Print YAML instead of JSON.
    #[arg(long)]
    yaml: bool,

    /// Config file layered under the environment.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn access(&self) -> AccessContext {
        AccessContext::anonymous()
            .with_admin(self.admin)
            .with_premium(self.premium)
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to render output: {0}")]
    Render(String),

    #[error(transparent)]
    Theme(#[from] ThemeSinkError),
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.dashboard.log_level));

    // Logs go to stderr so stdout stays machine-readable.
    match config.dashboard.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(file) => AppConfig::load_from_file(file)?,
        None => AppConfig::load()?,
    };
    config.validate().map_err(ConfigError::from)?;
    init_tracing(&config);

    let sink = InMemoryThemeSink::new();
    let shell =
        DashboardShell::from_config(&config, Arc::new(sink.clone())).map_err(ConfigError::from)?;

    let context = shell.enter_route(&cli.path, cli.access(), Vec::new());
    info!(
        specialty = %context.specialty,
        fallback = context.is_fallback(),
        "Resolved route"
    );

    let rendered = if cli.yaml {
        serde_yaml::to_string(&context).map_err(|e| CliError::Render(e.to_string()))?
    } else {
        serde_json::to_string_pretty(&context).map_err(|e| CliError::Render(e.to_string()))?
    };

    println!("{}", rendered);
    println!("{}", sink.to_css()?);
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "specialty-dashboard failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
