//! # API Shared
//!
//! Shared definitions for the imprex API surfaces.
//!
//! Contains:
//! - Request and response bodies (`dto` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `imprex-run` binary.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
