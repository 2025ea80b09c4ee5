//! User account calls.
//!
//! A 404 under `/users/` is returned as `ApiError::UserNotFound` without any
//! notification, so callers can fall through to registration.

use crate::api::client::GatewayClient;
use crate::api::types::{LoginRequest, RegisterUser};
use crate::error::{ApiError, ApiResult};
use crate::http::request::RequestDescriptor;
use crate::http::response::Envelope;

pub struct UsersApi<'a> {
    client: &'a GatewayClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a GatewayClient) -> Self {
        Self { client }
    }

    /// `GET /v1/users/{username}`
    pub async fn get_user(&self, username: &str) -> ApiResult<Envelope> {
        self.client
            .send(RequestDescriptor::get(&["v1", "users", username]))
            .await
    }

    /// `GET /v1/users/id/{id}`
    pub async fn get_user_by_id(&self, id: u64) -> ApiResult<Envelope> {
        let id = id.to_string();
        self.client
            .send(RequestDescriptor::get(&["v1", "users", "id", &id]))
            .await
    }

    /// `POST /v1/users/register`
    pub async fn register(&self, user: &RegisterUser) -> ApiResult<Envelope> {
        let req = RequestDescriptor::post(&["v1", "users", "register"]).json(user)?;
        self.client.send(req).await
    }

    /// `POST /v1/users/login`
    pub async fn login(&self, username: &str) -> ApiResult<Envelope> {
        let req = RequestDescriptor::post(&["v1", "users", "login"]).json(&LoginRequest { username })?;
        self.client.send(req).await
    }

    /// `GET /v1/users/{id}/dashboard`
    pub async fn dashboard(&self, id: u64) -> ApiResult<Envelope> {
        let id = id.to_string();
        self.client
            .send(RequestDescriptor::get(&["v1", "users", &id, "dashboard"]))
            .await
    }

    /// Look the user up, registering them when the backend does not know them.
    ///
    /// A registration conflict (someone registered the name in between) is
    /// resolved by looking the user up again. An empty username fails with
    /// `ApiError::InvalidRequest` before anything is sent.
    pub async fn login_or_register(&self, user: &RegisterUser) -> ApiResult<Envelope> {
        match self.get_user(&user.username).await {
            Err(ApiError::UserNotFound { .. }) => {
                tracing::info!(username = %user.username, "User not found, registering");
            }
            other => return other,
        }

        match self.register(user).await {
            Err(e) if e.is_conflict() => {
                tracing::info!(username = %user.username, "User registered concurrently, looking up again");
                self.get_user(&user.username).await
            }
            other => other,
        }
    }
}
