//! Product catalogue calls.

use crate::api::client::GatewayClient;
use crate::api::types::{ProductQuery, SearchQuery};
use crate::error::ApiResult;
use crate::http::request::RequestDescriptor;
use crate::http::response::Envelope;

pub struct ProductsApi<'a> {
    client: &'a GatewayClient,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a GatewayClient) -> Self {
        Self { client }
    }

    /// `GET /products`
    pub async fn list_products(&self, query: &ProductQuery) -> ApiResult<Envelope> {
        let req = RequestDescriptor::get(&["products"]).params(query)?;
        self.client.send(req).await
    }

    /// `GET /products/{id}`
    pub async fn get_product(&self, id: u64) -> ApiResult<Envelope> {
        let id = id.to_string();
        self.client
            .send(RequestDescriptor::get(&["products", &id]))
            .await
    }

    /// `GET /search`
    pub async fn search_products(&self, query: &SearchQuery) -> ApiResult<Envelope> {
        let req = RequestDescriptor::get(&["search"]).params(query)?;
        self.client.send(req).await
    }

    /// `GET /categories`
    pub async fn categories(&self) -> ApiResult<Envelope> {
        self.client.send(RequestDescriptor::get(&["categories"])).await
    }

    /// `GET /v1/search/suggestions`
    pub async fn search_suggestions(&self, q: &str) -> ApiResult<Envelope> {
        let req = RequestDescriptor::get(&["v1", "search", "suggestions"]).query("q", q);
        self.client.send(req).await
    }
}
