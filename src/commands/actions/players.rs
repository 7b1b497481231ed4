//! `players` subcommand.

use clap::Subcommand;
use log::debug;
use newnan_manager::{
    NewNanClient, Result,
    http::Requester,
    models::{
        BanRequest, CreatePlayerRequest, PlayerLogin, PlayerQuery, UpdatePlayerRequest,
        ValidatePlayersRequest,
    },
};

use crate::commands::output::{render, render_done, render_list, render_page};

#[derive(Subcommand, Debug, PartialEq)]
pub enum PlayersCommand {
    /// List players
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        town_id: Option<i64>,
        #[arg(long)]
        banned: Option<bool>,
    },
    /// Show a player by id
    Get { id: i64 },
    /// Show a player by in-game name
    Find { name: String },
    /// Register a player
    Create {
        name: String,
        #[arg(long)]
        qq: Option<String>,
        #[arg(long)]
        town_id: Option<i64>,
    },
    /// Change fields of a player
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        qq: Option<String>,
        #[arg(long)]
        town_id: Option<i64>,
    },
    /// Delete a player
    Delete { id: i64 },
    /// Ban a player, permanently unless a duration is given
    Ban {
        id: i64,
        reason: String,
        /// Ban duration in seconds
        #[arg(long)]
        duration: Option<u64>,
    },
    /// Lift the ban of a player
    Unban { id: i64 },
    /// Check whether players may join, `name` or `name@ip`
    Validate {
        #[arg(required = true)]
        logins: Vec<String>,
        #[arg(long)]
        server_id: Option<String>,
    },
    /// List the servers a player was seen on
    Servers { id: i64 },
}

/// Parses `name` or `name@ip`.
fn parse_login(login: &str) -> PlayerLogin {
    match login.split_once('@') {
        Some((name, ip)) if !ip.is_empty() => PlayerLogin::new(name).with_ip(ip),
        _ => PlayerLogin::new(login.trim_end_matches('@')),
    }
}

pub async fn handle_players<R: Requester>(
    client: &NewNanClient<R>,
    command: PlayersCommand,
    json: bool,
) -> Result<String> {
    debug!("handling players command {:?}", command);

    let players = client.players();
    match command {
        PlayersCommand::List {
            page,
            page_size,
            search,
            town_id,
            banned,
        } => {
            let query = PlayerQuery {
                page,
                page_size,
                search,
                town_id,
                is_banned: banned,
            };
            render_page(&players.list(&query).await?, json)
        }
        PlayersCommand::Get { id } => render(&players.get(id).await?, json),
        PlayersCommand::Find { name } => render(&players.get_by_name(&name).await?, json),
        PlayersCommand::Create { name, qq, town_id } => {
            let request = CreatePlayerRequest {
                name,
                qq,
                town_id,
            };
            render(&players.create(&request).await?, json)
        }
        PlayersCommand::Update {
            id,
            name,
            qq,
            town_id,
        } => {
            let changes = UpdatePlayerRequest { name, qq, town_id };
            render(&players.update(id, &changes).await?, json)
        }
        PlayersCommand::Delete { id } => {
            players.delete(id).await?;
            render_done(&format!("Player {} deleted.", id), json)
        }
        PlayersCommand::Ban {
            id,
            reason,
            duration,
        } => {
            let ban = match duration {
                Some(seconds) => BanRequest::temporary(reason, seconds),
                None => BanRequest::permanent(reason),
            };
            render(&players.ban(id, &ban).await?, json)
        }
        PlayersCommand::Unban { id } => render(&players.unban(id).await?, json),
        PlayersCommand::Validate { logins, server_id } => {
            let batch = ValidatePlayersRequest {
                players: logins.iter().map(|l| parse_login(l)).collect(),
                server_id,
            };
            let report = players.validate(&batch).await?;
            render_list(&report.results, json)
        }
        PlayersCommand::Servers { id } => render_list(&players.servers(id).await?, json),
    }
}
