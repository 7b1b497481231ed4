//! Data transfer objects of the NewNanManager API.
//!
//! Every structure mirrors a JSON payload. Wire fields are snake_case like
//! the Rust fields, optional fields default when missing, and request
//! payloads skip unset fields.
//!
//! # Modules
//!
//! - `common` - pagination and ban payloads shared by several resources
//! - `player` - players, their validation and the player requests
//! - `town` - towns and the town requests
//! - `server` - game servers and player/server online relations
//! - `token` - API tokens
//! - `ip` - IP reputation records
//! - `monitor` - heartbeats, live status, latency and health

mod common;
mod ip;
mod monitor;
mod player;
mod server;
mod token;
mod town;

pub use crate::models::common::{BanRequest, Page};
pub use crate::models::ip::{IpInfo, IpQuery};
pub use crate::models::monitor::{
    HealthStatus, HeartbeatRequest, LatencyStats, ServerOverview, ServerStatus,
};
pub use crate::models::player::{
    CreatePlayerRequest, Player, PlayerLogin, PlayerQuery, PlayerValidation, UpdatePlayerRequest,
    ValidatePlayersRequest, ValidationReport,
};
pub use crate::models::server::{
    CreateServerRequest, PlayerServer, PlayerSessionRequest, ServerInfo, ServerQuery, ServerType,
    UpdateServerRequest,
};
pub use crate::models::token::{ApiToken, CreateTokenRequest};
pub use crate::models::town::{CreateTownRequest, Town, TownQuery, UpdateTownRequest};
