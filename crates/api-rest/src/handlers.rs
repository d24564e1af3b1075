use crate::error::ApiError;
use crate::AppState;
use api_shared::{ErrorRes, HealthRes, HealthService, LookupReq};
use axum::{body::Bytes, extract::State, response::Json};
use docsage_core::{DoctorDetail, DoctorRecord, LookupError};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used by monitoring and load balancer health checks. Does not contact the registry.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/api/getDoctorDetails",
    request_body = LookupReq,
    responses(
        (status = 200, description = "Doctor record for the registration number", body = DoctorDetail),
        (status = 400, description = "Registration number missing or blank", body = ErrorRes),
        (status = 404, description = "Registry reported no match", body = ErrorRes),
        (status = 500, description = "Registry unreachable or returned an unexpected payload", body = ErrorRes)
    )
)]
/// Look up a doctor by registration number
///
/// Forwards the number to the medical council registry and returns the first matching record
/// exactly as the registry sent it. The body is read as JSON whatever its declared content type.
///
/// # Errors
/// - `400` if `regNo` is absent, blank, or the body is not a JSON object with a string `regNo`.
/// - `404` if the registry reports no match.
/// - `500` for transport failures and unexpected registry payloads.
#[axum::debug_handler]
pub async fn get_doctor_details(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DoctorRecord>, ApiError> {
    let req: LookupReq = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Rejected lookup body: {}", e);
        ApiError(LookupError::MissingRegistrationNumber)
    })?;

    let record = state.lookup_service.lookup(req.reg_no.as_deref()).await?;
    Ok(Json(record))
}
