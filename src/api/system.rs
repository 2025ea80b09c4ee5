//! Backend liveness calls.

use crate::api::client::GatewayClient;
use crate::error::ApiResult;
use crate::http::request::RequestDescriptor;
use crate::http::response::Envelope;

pub struct SystemApi<'a> {
    client: &'a GatewayClient,
}

impl<'a> SystemApi<'a> {
    pub(crate) fn new(client: &'a GatewayClient) -> Self {
        Self { client }
    }

    /// `GET /health`
    pub async fn health(&self) -> ApiResult<Envelope> {
        self.client.send(RequestDescriptor::get(&["health"])).await
    }

    /// `GET /status`
    pub async fn status(&self) -> ApiResult<Envelope> {
        self.client.send(RequestDescriptor::get(&["status"])).await
    }
}
