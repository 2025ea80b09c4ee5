//! HTTP plumbing shared by every call group.
//!
//! # Data Flow
//! ```text
//! EndpointConfig
//!     → endpoint.rs (resolve base URL from the calling origin)
//! grouped call (api/)
//!     → request.rs (RequestDescriptor: method, segments, query, body)
//!     → transport.rs (default headers, timeout, send)
//!     → response.rs (envelope parsing, success/failure classification)
//!     → ApiResult<Envelope> back to the caller
//! ```

pub mod endpoint;
pub mod request;
pub mod response;
pub mod transport;

pub use endpoint::{resolve_base_url, EndpointError};
pub use request::RequestDescriptor;
pub use response::{classify, Envelope};
pub use transport::{RawResponse, Transport};
