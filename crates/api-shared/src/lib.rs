//! # API Shared
//!
//! Shared definitions for the DocSage lookup proxy and its clients.
//!
//! Contains:
//! - Wire DTOs (`dto` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` on the server side and by `docsage-form` on the client side, so both ends
//! agree on field names such as `regNo`.

pub mod dto;
pub mod health;

/// Path of the lookup endpoint, relative to the proxy base URL.
pub const LOOKUP_PATH: &str = "/api/getDoctorDetails";

pub use dto::*;
pub use health::HealthService;
