//! User interaction calls.

use crate::api::client::GatewayClient;
use crate::api::types::{Interaction, Preferences};
use crate::error::ApiResult;
use crate::http::request::RequestDescriptor;
use crate::http::response::Envelope;

pub struct InteractionsApi<'a> {
    client: &'a GatewayClient,
}

impl<'a> InteractionsApi<'a> {
    pub(crate) fn new(client: &'a GatewayClient) -> Self {
        Self { client }
    }

    /// `POST /v1/user-interactions/record`
    pub async fn record(&self, interaction: &Interaction) -> ApiResult<Envelope> {
        let req = RequestDescriptor::post(&["v1", "user-interactions", "record"]).json(interaction)?;
        self.client.send(req).await
    }

    /// `GET /v1/user-interactions/user/{id}`
    pub async fn for_user(&self, user_id: u64) -> ApiResult<Envelope> {
        let id = user_id.to_string();
        self.client
            .send(RequestDescriptor::get(&["v1", "user-interactions", "user", &id]))
            .await
    }

    /// `GET /v1/user-interactions/user/{id}/preferences`
    pub async fn preferences(&self, user_id: u64) -> ApiResult<Envelope> {
        let id = user_id.to_string();
        self.client
            .send(RequestDescriptor::get(&["v1", "user-interactions", "user", &id, "preferences"]))
            .await
    }

    /// `PUT /v1/user-interactions/user/{id}/preferences`
    pub async fn update_preferences(
        &self,
        user_id: u64,
        preferences: &Preferences,
    ) -> ApiResult<Envelope> {
        let id = user_id.to_string();
        let req = RequestDescriptor::put(&["v1", "user-interactions", "user", &id, "preferences"])
            .json(preferences)?;
        self.client.send(req).await
    }

    /// `GET /v1/user-interactions/recent`
    pub async fn recent(&self, limit: Option<u32>) -> ApiResult<Envelope> {
        let mut req = RequestDescriptor::get(&["v1", "user-interactions", "recent"]);
        if let Some(limit) = limit {
            req = req.query("limit", limit);
        }
        self.client.send(req).await
    }
}
