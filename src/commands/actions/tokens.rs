//! `tokens` subcommand.

use clap::Subcommand;
use log::debug;
use newnan_manager::{NewNanClient, Result, http::Requester, models::CreateTokenRequest};

use crate::commands::output::{render, render_done, render_list};

#[derive(Subcommand, Debug, PartialEq)]
pub enum TokensCommand {
    /// List API tokens
    List,
    /// Create an API token and print its secret
    Create {
        name: String,
        /// Granted permission, e.g. `players:read` or `servers:*`
        #[arg(short, long = "permission")]
        permissions: Vec<String>,
        /// Restrict the token to one server
        #[arg(long)]
        server_id: Option<String>,
        #[arg(long)]
        expires_in_days: Option<u32>,
    },
    /// Show the token this client uses
    Current,
    /// Revoke an API token
    Revoke { id: i64 },
}

pub async fn handle_tokens<R: Requester>(
    client: &NewNanClient<R>,
    command: TokensCommand,
    json: bool,
) -> Result<String> {
    debug!("handling tokens command {:?}", command);

    let tokens = client.tokens();
    match command {
        TokensCommand::List => render_list(&tokens.list().await?, json),
        TokensCommand::Create {
            name,
            permissions,
            server_id,
            expires_in_days,
        } => {
            let request = CreateTokenRequest {
                name,
                permissions,
                server_id,
                expires_in_days,
            };
            let token = tokens.create(&request).await?;
            let rendered = render(&token, json)?;
            // The server never sends the secret again
            match (&token.token, json) {
                (Some(secret), false) => Ok(format!("{}\nsecret={}", rendered, secret)),
                _ => Ok(rendered),
            }
        }
        TokensCommand::Current => render(&tokens.current().await?, json),
        TokensCommand::Revoke { id } => {
            tokens.revoke(id).await?;
            render_done(&format!("Token {} revoked.", id), json)
        }
    }
}
