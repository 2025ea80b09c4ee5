//! Grouped backend calls.
//!
//! ```text
//! GatewayClient
//!     .products()         → /products, /search, /categories
//!     .recommendations()  → /recommendations, /{v1,v2}/personalized-recommendations/...
//!     .users()            → /v1/users/...
//!     .interactions()     → /v1/user-interactions/...
//!     .system()           → /health, /status
//! ```

pub mod client;
pub mod interactions;
pub mod products;
pub mod recommendations;
pub mod system;
pub mod types;
pub mod users;

pub use client::GatewayClient;
pub use interactions::InteractionsApi;
pub use products::ProductsApi;
pub use recommendations::RecommendationsApi;
pub use system::SystemApi;
pub use types::*;
pub use users::UsersApi;
