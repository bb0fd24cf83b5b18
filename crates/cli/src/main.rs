//! # NetBox resolver
//!
//! Resolves inventory names (DNS names, virtual machines, devices) to IPv4
//! addresses through a TTL cache in front of the NetBox REST API.

mod bootstrap;
mod commands;
mod di;

use clap::{Parser, Subcommand};
use netbox_resolver_domain::CliOverrides;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "netbox-resolver")]
#[command(version)]
#[command(about = "Resolve NetBox inventory names to IPv4 addresses")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// NetBox base URL (overrides config)
    #[arg(long)]
    url: Option<String>,

    /// NetBox API token (overrides config)
    #[arg(long)]
    token: Option<String>,

    /// Cache entry lifetime, e.g. "90s" or "5m" (overrides config)
    #[arg(long)]
    cache_duration: Option<String>,

    /// Log level (overrides config)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the given names once and print the addresses
    Resolve {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Resolve names read line by line from stdin until EOF or Ctrl+C
    Watch {
        /// How often expired cache entries are swept
        #[arg(long, default_value = "60s", value_parser = humantime::parse_duration)]
        janitor_interval: Duration,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        url: cli.url,
        token: cli.token,
        cache_duration: cli.cache_duration,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let settings = config.resolver_settings()?;
    let services = di::ResolverServices::new(&settings)?;

    match cli.command {
        Command::Resolve { names } => commands::resolve_names(&services, &names).await,
        Command::Watch { janitor_interval } => {
            commands::watch_stdin(&services, janitor_interval).await
        }
    }
}
