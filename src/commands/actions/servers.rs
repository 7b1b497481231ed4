//! `servers` subcommand.

use clap::Subcommand;
use log::debug;
use newnan_manager::{
    NewNanClient, Result,
    http::Requester,
    models::{
        CreateServerRequest, PlayerSessionRequest, ServerQuery, ServerType, UpdateServerRequest,
    },
};

use crate::commands::output::{render, render_done, render_list, render_page};

const SERVER_TYPES: [ServerType; 4] = [
    ServerType::MinecraftJava,
    ServerType::MinecraftBedrock,
    ServerType::Proxy,
    ServerType::Other,
];

fn parse_server_type(value: &str) -> std::result::Result<ServerType, String> {
    SERVER_TYPES
        .into_iter()
        .find(|t| t.as_str() == value)
        .ok_or_else(|| {
            let names: Vec<&str> = SERVER_TYPES.iter().map(|t| t.as_str()).collect();
            format!("expected one of {}", names.join(", "))
        })
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ServersCommand {
    /// List servers
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        active: Option<bool>,
        #[arg(long = "type", value_parser = parse_server_type)]
        server_type: Option<ServerType>,
    },
    /// Show a server
    Get { id: String },
    /// Register a server
    Create {
        id: String,
        name: String,
        /// Address players connect to, `host:port`
        address: String,
        #[arg(long = "type", value_parser = parse_server_type)]
        server_type: Option<ServerType>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Change fields of a server
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long = "type", value_parser = parse_server_type)]
        server_type: Option<ServerType>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a server
    Delete { id: String },
    /// Report a player joining a server
    Online {
        server_id: String,
        player_name: String,
        #[arg(long)]
        ip: Option<String>,
    },
    /// Report a player leaving a server
    Offline {
        server_id: String,
        player_name: String,
        #[arg(long)]
        ip: Option<String>,
    },
    /// List players currently online on a server
    Players { id: String },
    /// List servers with their live status
    Overview {
        #[arg(long)]
        active: Option<bool>,
        #[arg(long = "type", value_parser = parse_server_type)]
        server_type: Option<ServerType>,
    },
}

fn session(player_name: String, ip: Option<String>) -> PlayerSessionRequest {
    PlayerSessionRequest { player_name, ip }
}

pub async fn handle_servers<R: Requester>(
    client: &NewNanClient<R>,
    command: ServersCommand,
    json: bool,
) -> Result<String> {
    debug!("handling servers command {:?}", command);

    let servers = client.servers();
    match command {
        ServersCommand::List {
            page,
            page_size,
            active,
            server_type,
        } => {
            let query = ServerQuery {
                page,
                page_size,
                is_active: active,
                server_type,
            };
            render_page(&servers.list(&query).await?, json)
        }
        ServersCommand::Get { id } => render(&servers.get(&id).await?, json),
        ServersCommand::Create {
            id,
            name,
            address,
            server_type,
            description,
        } => {
            let request = CreateServerRequest {
                id,
                name,
                address,
                server_type: server_type.unwrap_or_default(),
                description,
            };
            render(&servers.create(&request).await?, json)
        }
        ServersCommand::Update {
            id,
            name,
            address,
            server_type,
            description,
            active,
        } => {
            let changes = UpdateServerRequest {
                name,
                address,
                server_type,
                description,
                is_active: active,
            };
            render(&servers.update(&id, &changes).await?, json)
        }
        ServersCommand::Delete { id } => {
            servers.delete(&id).await?;
            render_done(&format!("Server {} deleted.", id), json)
        }
        ServersCommand::Online {
            server_id,
            player_name,
            ip,
        } => render(
            &servers
                .player_online(&server_id, &session(player_name, ip))
                .await?,
            json,
        ),
        ServersCommand::Offline {
            server_id,
            player_name,
            ip,
        } => render(
            &servers
                .player_offline(&server_id, &session(player_name, ip))
                .await?,
            json,
        ),
        ServersCommand::Players { id } => render_list(&servers.online_players(&id).await?, json),
        ServersCommand::Overview {
            active,
            server_type,
        } => {
            let query = ServerQuery {
                is_active: active,
                server_type,
                ..ServerQuery::default()
            };
            render_list(&client.server_overview(&query).await?, json)
        }
    }
}
