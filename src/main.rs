//! newnan-ctl - Command-line client for the NewNanManager service.
//!
//! Every endpoint of the manager API is reachable as a subcommand, which
//! makes the tool handy to administrate the network by hand or to script
//! plugin behaviour (heartbeats, join/leave notifications) while testing.
//!
//! # Configuration
//!
//! Create a `newnan.yaml` file next to where the tool runs:
//!
//! ```yaml
//! base_url: "https://manager.newnan.city"
//! token: "nn_xxxxxxxxxxxx"
//! timeout_secs: 30
//! ```
//!
//! The file is optional. Any value can come from the environment with the
//! `NEWNAN_` prefix, and `--base-url` / `--token` take precedence over both:
//!
//! ```bash
//! export NEWNAN_BASE_URL="https://manager.newnan.city"
//! export NEWNAN_TOKEN="nn_xxxxxxxxxxxx"
//! ```
//!
//! # Usage
//!
//! ```bash
//! newnan-ctl players find Steve
//! newnan-ctl players ban 12 "griefing spawn" --duration 86400
//! newnan-ctl servers overview --active true
//! newnan-ctl --json monitor latency lobby --window 60
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//!   - Set to `debug` to see request URLs and response payloads
//!   - Set to `warn` or `error` for minimal logging

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use figment::providers::Serialized;
use log::{debug, error};
use newnan_manager::{ClientConfig, NewNanClient};

use crate::commands::Command;

mod commands;

/// Command-line arguments of newnan-ctl.
///
/// # Examples
///
/// ```bash
/// newnan-ctl --config prod.yaml tokens list
/// newnan-ctl --base-url http://localhost:8000 monitor health
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file, ignored when missing.
    ///
    /// Environment variables prefixed with `NEWNAN_` override its values.
    #[arg(short, long, default_value = "newnan.yaml")]
    config: String,

    /// Base URL of the manager, overrides the configuration.
    #[arg(long)]
    base_url: Option<String>,

    /// API token, overrides the configuration.
    #[arg(long)]
    token: Option<String>,

    /// Print raw JSON instead of one line per record.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Configuration file, then environment, then command-line flags.
fn load_config(args: &Args) -> newnan_manager::Result<ClientConfig> {
    let mut figment = ClientConfig::figment(&args.config);
    if let Some(base_url) = &args.base_url {
        figment = figment.merge(Serialized::default("base_url", base_url));
    }
    if let Some(token) = &args.token {
        figment = figment.merge(Serialized::default("token", token));
    }

    ClientConfig::from_figment(figment)
}

async fn run(args: Args) -> anyhow::Result<String> {
    let config = load_config(&args).context("Failed to load configuration")?;
    let client = NewNanClient::new(config).context("Failed to create client")?;

    debug!("running {:?}", args.command);
    let output = commands::execute(&client, args.command, args.json).await?;

    Ok(output)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    let args = Args::parse();

    match run(args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
