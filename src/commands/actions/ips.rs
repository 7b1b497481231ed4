//! `ips` subcommand.

use clap::Subcommand;
use log::debug;
use newnan_manager::{
    NewNanClient, Result,
    http::Requester,
    models::{BanRequest, IpQuery},
};

use crate::commands::output::{render, render_page};

#[derive(Subcommand, Debug, PartialEq)]
pub enum IpsCommand {
    /// List known addresses
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        banned: Option<bool>,
        /// Minimum risk score, 0 to 100
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        min_risk: Option<u8>,
    },
    /// Show an address
    Get { ip: String },
    /// Ban an address, permanently unless a duration is given
    Ban {
        ip: String,
        reason: String,
        /// Ban duration in seconds
        #[arg(long)]
        duration: Option<u64>,
    },
    /// Lift the ban of an address
    Unban { ip: String },
}

pub async fn handle_ips<R: Requester>(
    client: &NewNanClient<R>,
    command: IpsCommand,
    json: bool,
) -> Result<String> {
    debug!("handling ips command {:?}", command);

    let ips = client.ips();
    match command {
        IpsCommand::List {
            page,
            page_size,
            banned,
            min_risk,
        } => {
            let query = IpQuery {
                page,
                page_size,
                is_banned: banned,
                min_risk,
            };
            render_page(&ips.list(&query).await?, json)
        }
        IpsCommand::Get { ip } => render(&ips.get(&ip).await?, json),
        IpsCommand::Ban {
            ip,
            reason,
            duration,
        } => {
            let ban = match duration {
                Some(seconds) => BanRequest::temporary(reason, seconds),
                None => BanRequest::permanent(reason),
            };
            render(&ips.ban(&ip, &ban).await?, json)
        }
        IpsCommand::Unban { ip } => render(&ips.unban(&ip).await?, json),
    }
}
