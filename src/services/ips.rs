//! IP reputation endpoints.

use std::sync::Arc;

use log::info;

use crate::{
    error::Result,
    http::{ApiRequest, Requester},
    models::{BanRequest, IpInfo, IpQuery, Page},
    services::decode,
};

const IPS: &str = "ips";

/// Access to `/api/v1/ips`.
pub struct IpService<R: Requester> {
    requester: Arc<R>,
}

impl<R: Requester> IpService<R> {
    pub fn new(requester: Arc<R>) -> Self {
        IpService { requester }
    }

    /// `GET /ips/{ip}`. IPv6 addresses are passed as-is.
    pub async fn get(&self, ip: &str) -> Result<IpInfo> {
        info!("get ip {}", ip);
        let request = ApiRequest::get([IPS]).segment(ip);
        decode(self.requester.execute(request).await?)
    }

    /// `GET /ips`.
    pub async fn list(&self, query: &IpQuery) -> Result<Page<IpInfo>> {
        info!("list ips");
        let request = ApiRequest::get([IPS])
            .optional_query("page", query.page)
            .optional_query("page_size", query.page_size)
            .optional_query("is_banned", query.is_banned)
            .optional_query("min_risk", query.min_risk);
        decode(self.requester.execute(request).await?)
    }

    /// `POST /ips/{ip}/ban`, returns the updated record.
    pub async fn ban(&self, ip: &str, ban: &BanRequest) -> Result<IpInfo> {
        info!("ban ip {}: {}", ip, ban.reason);
        let request = ApiRequest::post([IPS]).segment(ip).segment("ban").json(ban)?;
        decode(self.requester.execute(request).await?)
    }

    /// `POST /ips/{ip}/unban`, returns the updated record.
    pub async fn unban(&self, ip: &str) -> Result<IpInfo> {
        info!("unban ip {}", ip);
        let request = ApiRequest::post([IPS]).segment(ip).segment("unban");
        decode(self.requester.execute(request).await?)
    }
}
