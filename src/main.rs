use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vigil::commands::{check, ensure, status};
use vigil::config::WatchConfig;

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Liveness watchdog for the chatserver backend", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the host to probe
    #[arg(long, global = true)]
    host: Option<String>,

    /// Override the port to probe
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Override the probe timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the server port and report liveness
    Check,

    /// Probe the server port and launch the server if it is down
    Ensure,

    /// Show a detailed liveness report
    Status,
}

fn main() -> Result<()> {
    // stdout carries the probe status lines; diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vigil=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = WatchConfig::load_or_default(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    config.validate()?;

    match cli.command {
        Commands::Check => check::execute(&config),
        Commands::Ensure => ensure::execute(&config),
        Commands::Status => status::execute(&config),
    }
}
