//! # API REST
//!
//! REST API implementation of the DocSage lookup proxy.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, error status mapping, CORS, request tracing)
//!
//! Uses `api-shared` for wire types and `docsage-core` for the lookup itself.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;

use api_shared::{ErrorRes, HealthRes, LookupReq, LOOKUP_PATH};
use axum::{
    routing::{get, post},
    Router,
};
use docsage_core::{DoctorDetail, DoctorSummary, LookupService, Qualification};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Application state shared across REST API handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub lookup_service: LookupService,
}

impl AppState {
    pub fn new(lookup_service: LookupService) -> Self {
        Self { lookup_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(handlers::health, handlers::get_doctor_details),
    components(schemas(
        HealthRes,
        LookupReq,
        ErrorRes,
        DoctorSummary,
        DoctorDetail,
        Qualification,
    ))
)]
pub struct ApiDoc;

/// Build the proxy router with Swagger UI, request tracing and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(LOOKUP_PATH, post(handlers::get_doctor_details))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
