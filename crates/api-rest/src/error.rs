//! Lookup error to HTTP response mapping.

use api_shared::ErrorRes;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docsage_core::{LookupError, LookupErrorKind};

/// Error type returned by REST handlers.
///
/// The body is always `{ "error": <fixed message> }`; the underlying cause is logged, never sent.
#[derive(Debug)]
pub struct ApiError(pub LookupError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            LookupErrorKind::Validation => StatusCode::BAD_REQUEST,
            LookupErrorKind::NotFound => StatusCode::NOT_FOUND,
            LookupErrorKind::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.0.kind() {
            LookupErrorKind::Upstream => {
                tracing::error!("Error fetching doctor details: {:?}", self.0);
            }
            LookupErrorKind::NotFound => tracing::info!("{}", self.0),
            LookupErrorKind::Validation => tracing::debug!("{}", self.0),
        }

        (status, Json(ErrorRes::new(self.0.public_message()))).into_response()
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        ApiError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_error_kind() {
        assert_eq!(
            ApiError(LookupError::MissingRegistrationNumber).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(LookupError::NotFound {
                registration_number: "1".into()
            })
            .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(LookupError::EmptyMatch).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
