//! Subcommand definitions and their handlers.
//!
//! Each resource has a clap [`Subcommand`](clap::Subcommand) enum with one
//! variant per service method, and a `handle_*` function running the call
//! and rendering its result.
//!
//! # Handler Pattern
//!
//! Handlers follow a consistent pattern:
//! 1. Build the request payload or query from the parsed arguments
//! 2. Call the matching service method of the [`NewNanClient`](newnan_manager::NewNanClient)
//! 3. Render the result with the [`output`](crate::commands::output) helpers
//!
//! Handlers are generic over the [`Requester`](newnan_manager::http::Requester)
//! so they are tested against a mock.

mod ips;
mod monitor;
mod players;
mod servers;
mod tokens;
mod towns;

pub use crate::commands::actions::{
    ips::{IpsCommand, handle_ips},
    monitor::{MonitorCommand, handle_monitor},
    players::{PlayersCommand, handle_players},
    servers::{ServersCommand, handle_servers},
    tokens::{TokensCommand, handle_tokens},
    towns::{TownsCommand, handle_towns},
};
