//! Town endpoints.

use std::sync::Arc;

use log::info;

use crate::{
    error::Result,
    http::{ApiRequest, Requester},
    models::{CreateTownRequest, Page, Player, Town, TownQuery, UpdateTownRequest},
    services::decode,
};

const TOWNS: &str = "towns";

/// Access to `/api/v1/towns`.
pub struct TownService<R: Requester> {
    requester: Arc<R>,
}

impl<R: Requester> TownService<R> {
    pub fn new(requester: Arc<R>) -> Self {
        TownService { requester }
    }

    /// `GET /towns`.
    pub async fn list(&self, query: &TownQuery) -> Result<Page<Town>> {
        info!("list towns");
        let request = ApiRequest::get([TOWNS])
            .optional_query("page", query.page)
            .optional_query("page_size", query.page_size)
            .optional_query("search", query.search.as_deref());
        decode(self.requester.execute(request).await?)
    }

    /// `GET /towns/{id}`.
    pub async fn get(&self, id: i64) -> Result<Town> {
        info!("get town {}", id);
        let request = ApiRequest::get([TOWNS]).segment(id);
        decode(self.requester.execute(request).await?)
    }

    /// `POST /towns`.
    pub async fn create(&self, town: &CreateTownRequest) -> Result<Town> {
        info!("create town {}", town.name);
        let request = ApiRequest::post([TOWNS]).json(town)?;
        decode(self.requester.execute(request).await?)
    }

    /// `PUT /towns/{id}`.
    pub async fn update(&self, id: i64, changes: &UpdateTownRequest) -> Result<Town> {
        info!("update town {}", id);
        let request = ApiRequest::put([TOWNS]).segment(id).json(changes)?;
        decode(self.requester.execute(request).await?)
    }

    /// `DELETE /towns/{id}`.
    pub async fn delete(&self, id: i64) -> Result<()> {
        info!("delete town {}", id);
        let request = ApiRequest::delete([TOWNS]).segment(id);
        self.requester.execute(request).await?;
        Ok(())
    }

    /// `GET /towns/{id}/members`.
    pub async fn members(&self, id: i64) -> Result<Vec<Player>> {
        info!("list members of town {}", id);
        let request = ApiRequest::get([TOWNS]).segment(id).segment("members");
        decode(self.requester.execute(request).await?)
    }
}
