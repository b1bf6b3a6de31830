//! The Vouch service boundary.
//!
//! External collaborators (form handlers, admin panels, directory pages)
//! call `ReviewService`; it is the only mutation entry point for review
//! chains and verification state. The service wires the chain, proof,
//! identity, badge, and aggregate engines over a single store generic and
//! owns the cross-cutting concerns: config, telemetry, conflict retry
//! policy, and the best-effort aggregate refresh.

pub mod config;
pub mod error;
pub mod service;
pub mod telemetry;

pub use config::{ConfigError, ServiceConfig};
pub use error::ServiceError;
pub use service::ReviewService;
