//! Career-readiness assessment for forecasting & demand planning roles.
//!
//! The crate is split into a static questionnaire catalog, an answer-collection
//! session, a pure scoring engine, and a readiness report derived from the
//! scores. The binary in `main.rs` wraps these in a CLI and an HTTP service.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
