//! Recommendation calls.
//!
//! Personalized endpoints hand non-success envelopes back to the caller
//! instead of failing: "no profile yet" and similar states are normal there.
//! They also carry cache-busting query fields so every call reaches the
//! recommendation engine.

use crate::api::client::GatewayClient;
use crate::api::types::{RecommendationQuery, RecommendationVersion};
use crate::error::ApiResult;
use crate::http::request::RequestDescriptor;
use crate::http::response::Envelope;

pub struct RecommendationsApi<'a> {
    client: &'a GatewayClient,
}

impl<'a> RecommendationsApi<'a> {
    pub(crate) fn new(client: &'a GatewayClient) -> Self {
        Self { client }
    }

    /// `GET /recommendations`
    pub async fn recommendations(&self, query: &RecommendationQuery) -> ApiResult<Envelope> {
        let req = RequestDescriptor::get(&["recommendations"]).params(query)?;
        self.client.send(req).await
    }

    pub async fn similar_products(&self, product_id: u64, limit: u32) -> ApiResult<Envelope> {
        self.recommendations(&RecommendationQuery {
            product_id: Some(product_id),
            user_id: None,
            limit: Some(limit),
        })
        .await
    }

    pub async fn user_recommendations(&self, user_id: u64, limit: u32) -> ApiResult<Envelope> {
        self.recommendations(&RecommendationQuery {
            product_id: None,
            user_id: Some(user_id),
            limit: Some(limit),
        })
        .await
    }

    /// `GET /{version}/personalized-recommendations/user/{id}`
    pub async fn personalized(
        &self,
        version: RecommendationVersion,
        user_id: u64,
        limit: Option<u32>,
    ) -> ApiResult<Envelope> {
        let id = user_id.to_string();
        let mut req = RequestDescriptor::get(&[
            version.as_segment(),
            "personalized-recommendations",
            "user",
            &id,
        ]);
        if let Some(limit) = limit {
            req = req.query("limit", limit);
        }
        self.client.send(req.cache_busted()).await
    }

    /// `POST /{version}/personalized-recommendations/user/{id}/update-profile`
    pub async fn update_profile(
        &self,
        version: RecommendationVersion,
        user_id: u64,
    ) -> ApiResult<Envelope> {
        let id = user_id.to_string();
        let req = RequestDescriptor::post(&[
            version.as_segment(),
            "personalized-recommendations",
            "user",
            &id,
            "update-profile",
        ])
        .cache_busted();
        self.client.send(req).await
    }
}
