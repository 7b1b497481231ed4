//! Player endpoints.

use std::sync::Arc;

use log::{debug, info};

use crate::{
    error::Result,
    http::{ApiRequest, Requester},
    models::{
        BanRequest, CreatePlayerRequest, Page, Player, PlayerQuery, PlayerServer,
        UpdatePlayerRequest, ValidatePlayersRequest, ValidationReport,
    },
    services::decode,
};

const PLAYERS: &str = "players";

/// Access to `/api/v1/players`.
///
/// # Examples
///
/// ```no_run
/// use newnan_manager::{ClientConfig, NewNanClient};
/// use newnan_manager::models::{BanRequest, PlayerQuery};
///
/// # async fn example() -> newnan_manager::Result<()> {
/// let client = NewNanClient::new(ClientConfig::new("http://localhost:8000").with_token("t"))?;
/// let page = client.players().list(&PlayerQuery::new().with_search("steve")).await?;
/// for player in &page.items {
///     client.players().ban(player.id, &BanRequest::permanent("griefing")).await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct PlayerService<R: Requester> {
    requester: Arc<R>,
}

impl<R: Requester> PlayerService<R> {
    pub fn new(requester: Arc<R>) -> Self {
        PlayerService { requester }
    }

    /// `GET /players`: one page of players matching the filters.
    pub async fn list(&self, query: &PlayerQuery) -> Result<Page<Player>> {
        info!("list players");
        debug!("player query {:?}", query);

        let request = ApiRequest::get([PLAYERS])
            .optional_query("page", query.page)
            .optional_query("page_size", query.page_size)
            .optional_query("search", query.search.as_deref())
            .optional_query("town_id", query.town_id)
            .optional_query("is_banned", query.is_banned);

        decode(self.requester.execute(request).await?)
    }

    /// `GET /players/{id}`.
    pub async fn get(&self, id: i64) -> Result<Player> {
        info!("get player {}", id);
        let request = ApiRequest::get([PLAYERS]).segment(id);
        decode(self.requester.execute(request).await?)
    }

    /// `GET /players/by-name/{name}`.
    pub async fn get_by_name(&self, name: &str) -> Result<Player> {
        info!("get player named {}", name);
        let request = ApiRequest::get([PLAYERS, "by-name"]).segment(name);
        decode(self.requester.execute(request).await?)
    }

    /// `POST /players`.
    pub async fn create(&self, player: &CreatePlayerRequest) -> Result<Player> {
        info!("create player {}", player.name);
        let request = ApiRequest::post([PLAYERS]).json(player)?;
        decode(self.requester.execute(request).await?)
    }

    /// `PUT /players/{id}`.
    pub async fn update(&self, id: i64, changes: &UpdatePlayerRequest) -> Result<Player> {
        info!("update player {}", id);
        let request = ApiRequest::put([PLAYERS]).segment(id).json(changes)?;
        decode(self.requester.execute(request).await?)
    }

    /// `DELETE /players/{id}`.
    pub async fn delete(&self, id: i64) -> Result<()> {
        info!("delete player {}", id);
        let request = ApiRequest::delete([PLAYERS]).segment(id);
        self.requester.execute(request).await?;
        Ok(())
    }

    /// `POST /players/{id}/ban`, returns the updated player.
    pub async fn ban(&self, id: i64, ban: &BanRequest) -> Result<Player> {
        info!("ban player {}: {}", id, ban.reason);
        let request = ApiRequest::post([PLAYERS])
            .segment(id)
            .segment("ban")
            .json(ban)?;
        decode(self.requester.execute(request).await?)
    }

    /// `POST /players/{id}/unban`, returns the updated player.
    pub async fn unban(&self, id: i64) -> Result<Player> {
        info!("unban player {}", id);
        let request = ApiRequest::post([PLAYERS]).segment(id).segment("unban");
        decode(self.requester.execute(request).await?)
    }

    /// `POST /players/validate`: check a batch of logins at once.
    ///
    /// Per-player verdicts are returned as sent by the server, refused
    /// players are not turned into errors.
    pub async fn validate(&self, batch: &ValidatePlayersRequest) -> Result<ValidationReport> {
        info!("validate {} players", batch.players.len());
        let request = ApiRequest::post([PLAYERS, "validate"]).json(batch)?;
        let report: ValidationReport = decode(self.requester.execute(request).await?)?;

        debug!("{} players refused", report.refused().count());

        Ok(report)
    }

    /// `GET /players/{id}/servers`: servers the player was seen on.
    pub async fn servers(&self, id: i64) -> Result<Vec<PlayerServer>> {
        info!("list servers of player {}", id);
        let request = ApiRequest::get([PLAYERS]).segment(id).segment("servers");
        decode(self.requester.execute(request).await?)
    }
}
