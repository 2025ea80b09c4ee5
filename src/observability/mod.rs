//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every gateway call produces:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stderr (pretty or JSON)
//!     → whatever metrics recorder the host application installs
//! ```

pub mod logging;
pub mod metrics;
