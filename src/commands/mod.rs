//! Command-line commands of `newnan-ctl`.
//!
//! # Architecture
//!
//! ```text
//! argv
//!   │
//!   ▼
//! ┌──────────────┐
//! │ Args (clap)  │  ← main.rs
//! └──────────────┘
//!   │ Command
//!   ▼
//! ┌──────────────┐      ┌────────────────────┐
//! │   execute    │ ───► │ Action Handlers    │
//! └──────────────┘      │  - handle_players  │
//!                       │  - handle_towns    │
//!                       │  - handle_servers  │
//!                       │  - handle_tokens   │
//!                       │  - handle_ips      │
//!                       │  - handle_monitor  │
//!                       └────────────────────┘
//!                                 │
//!                                 ▼
//!                       ┌────────────────────┐
//!                       │ output (Display or │
//!                       │ pretty JSON)       │
//!                       └────────────────────┘
//! ```
//!
//! # Available Commands
//!
//! | Command | Actions |
//! |---------|---------|
//! | `players` | `list`, `get`, `find`, `create`, `update`, `delete`, `ban`, `unban`, `validate`, `servers` |
//! | `towns` | `list`, `get`, `create`, `update`, `delete`, `members` |
//! | `servers` | `list`, `get`, `create`, `update`, `delete`, `online`, `offline`, `players`, `overview` |
//! | `tokens` | `list`, `create`, `current`, `revoke` |
//! | `ips` | `list`, `get`, `ban`, `unban` |
//! | `monitor` | `health`, `heartbeat`, `status`, `latency` |

use clap::Subcommand;
use newnan_manager::{NewNanClient, Result, http::Requester};

use crate::commands::actions::{
    IpsCommand, MonitorCommand, PlayersCommand, ServersCommand, TokensCommand, TownsCommand,
    handle_ips, handle_monitor, handle_players, handle_servers, handle_tokens, handle_towns,
};

mod actions;
mod output;

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Manage players, bans and login validation
    #[command(subcommand)]
    Players(PlayersCommand),
    /// Manage towns
    #[command(subcommand)]
    Towns(TownsCommand),
    /// Manage game servers and player sessions
    #[command(subcommand)]
    Servers(ServersCommand),
    /// Manage API tokens
    #[command(subcommand)]
    Tokens(TokensCommand),
    /// Inspect and ban IP addresses
    #[command(subcommand)]
    Ips(IpsCommand),
    /// Health, heartbeats and server monitoring
    #[command(subcommand)]
    Monitor(MonitorCommand),
}

/// Runs a command and returns the text to print.
pub async fn execute<R: Requester>(
    client: &NewNanClient<R>,
    command: Command,
    json: bool,
) -> Result<String> {
    match command {
        Command::Players(command) => handle_players(client, command, json).await,
        Command::Towns(command) => handle_towns(client, command, json).await,
        Command::Servers(command) => handle_servers(client, command, json).await,
        Command::Tokens(command) => handle_tokens(client, command, json).await,
        Command::Ips(command) => handle_ips(client, command, json).await,
        Command::Monitor(command) => handle_monitor(client, command, json).await,
    }
}
