//! `towns` subcommand.

use clap::Subcommand;
use log::debug;
use newnan_manager::{
    NewNanClient, Result,
    http::Requester,
    models::{CreateTownRequest, TownQuery, UpdateTownRequest},
};

use crate::commands::output::{render, render_done, render_list, render_page};

#[derive(Subcommand, Debug, PartialEq)]
pub enum TownsCommand {
    /// List towns
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a town
    Get { id: i64 },
    /// Found a town
    Create {
        name: String,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Player id of the mayor
        #[arg(long)]
        leader_id: Option<i64>,
    },
    /// Change fields of a town
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        level: Option<i32>,
        #[arg(long)]
        leader_id: Option<i64>,
    },
    /// Delete a town
    Delete { id: i64 },
    /// List the members of a town
    Members { id: i64 },
}

pub async fn handle_towns<R: Requester>(
    client: &NewNanClient<R>,
    command: TownsCommand,
    json: bool,
) -> Result<String> {
    debug!("handling towns command {:?}", command);

    let towns = client.towns();
    match command {
        TownsCommand::List {
            page,
            page_size,
            search,
        } => {
            let query = TownQuery {
                page,
                page_size,
                search,
            };
            render_page(&towns.list(&query).await?, json)
        }
        TownsCommand::Get { id } => render(&towns.get(id).await?, json),
        TownsCommand::Create {
            name,
            tag,
            description,
            leader_id,
        } => {
            let request = CreateTownRequest {
                name,
                tag,
                description,
                leader_id,
            };
            render(&towns.create(&request).await?, json)
        }
        TownsCommand::Update {
            id,
            name,
            tag,
            description,
            level,
            leader_id,
        } => {
            let changes = UpdateTownRequest {
                name,
                tag,
                description,
                level,
                leader_id,
            };
            render(&towns.update(id, &changes).await?, json)
        }
        TownsCommand::Delete { id } => {
            towns.delete(id).await?;
            render_done(&format!("Town {} deleted.", id), json)
        }
        TownsCommand::Members { id } => render_list(&towns.members(id).await?, json),
    }
}

#[cfg(test)]
mod tests {
    use newnan_manager::http::MockRequester;
    use reqwest::Method;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_handle_create() {
        let mut requester = MockRequester::new();
        requester
            .expect_execute()
            .withf(|r| {
                r.method == Method::POST
                    && r.path() == "/api/v1/towns"
                    && r.body == Some(json!({"name": "Newnan", "tag": "NN"}))
            })
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "id": 4,
                    "name": "Newnan",
                    "tag": "NN",
                    "level": 1,
                    "member_count": 0,
                    "created_at": "2024-05-01T12:00:00Z"
                }))
            });

        let client = NewNanClient::with_requester(requester);
        let command = TownsCommand::Create {
            name: "Newnan".to_string(),
            tag: Some("NN".to_string()),
            description: None,
            leader_id: None,
        };
        let output = handle_towns(&client, command, false).await.unwrap();
        assert_eq!(output, "id=4, name=Newnan [NN], level=1, members=0");
    }

    #[tokio::test]
    async fn test_handle_update_sends_only_set_fields() {
        let mut requester = MockRequester::new();
        requester
            .expect_execute()
            .withf(|r| {
                r.method == Method::PUT
                    && r.path() == "/api/v1/towns/4"
                    && r.body == Some(json!({"level": 2}))
            })
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "id": 4,
                    "name": "Newnan",
                    "level": 2,
                    "member_count": 27,
                    "created_at": "2024-05-01T12:00:00Z"
                }))
            });

        let client = NewNanClient::with_requester(requester);
        let command = TownsCommand::Update {
            id: 4,
            name: None,
            tag: None,
            description: None,
            level: Some(2),
            leader_id: None,
        };
        let output = handle_towns(&client, command, false).await.unwrap();
        assert_eq!(output, "id=4, name=Newnan, level=2, members=27");
    }

    #[tokio::test]
    async fn test_handle_members_empty() {
        let mut requester = MockRequester::new();
        requester
            .expect_execute()
            .withf(|r| r.path() == "/api/v1/towns/4/members")
            .times(1)
            .returning(|_| Ok(json!([])));

        let client = NewNanClient::with_requester(requester);
        let output = handle_towns(&client, TownsCommand::Members { id: 4 }, false)
            .await
            .unwrap();
        assert_eq!(output, crate::commands::output::NO_RESULTS);
    }
}
