use crate::constants::{MSG_DOCTOR_NOT_FOUND, MSG_REGISTRATION_REQUIRED, MSG_UPSTREAM_FAILED};

/// Coarse classification of a failed lookup.
///
/// Every `LookupError` belongs to exactly one kind, and the kind alone decides the HTTP status
/// and the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    /// The caller supplied no registration number.
    Validation,
    /// The registry found zero matches.
    NotFound,
    /// Transport failure, timeout, or an upstream payload we could not interpret.
    Upstream,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("registration number is missing or blank")]
    MissingRegistrationNumber,
    #[error("registry reported no match for {registration_number}")]
    NotFound { registration_number: String },

    #[error("registry request failed: {0}")]
    UpstreamTransport(#[source] reqwest::Error),
    #[error("registry request timed out: {0}")]
    UpstreamTimeout(#[source] reqwest::Error),
    #[error("registry responded with HTTP {status}")]
    UpstreamStatus { status: u16 },
    #[error("registry payload is not a valid envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),
    #[error("registry reported a match but returned no records")]
    EmptyMatch,
    #[error("registry record is not a JSON object")]
    MalformedRecord,

    #[error("failed to build registry HTTP client: {0}")]
    HttpClientBuild(#[source] reqwest::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LookupError {
    /// Classify this error into the three-way taxonomy exposed to callers.
    ///
    /// Configuration and client-build failures only occur at startup; if one ever surfaces from
    /// a request it is reported as an upstream failure.
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::MissingRegistrationNumber => LookupErrorKind::Validation,
            LookupError::NotFound { .. } => LookupErrorKind::NotFound,
            LookupError::UpstreamTransport(_)
            | LookupError::UpstreamTimeout(_)
            | LookupError::UpstreamStatus { .. }
            | LookupError::MalformedEnvelope(_)
            | LookupError::EmptyMatch
            | LookupError::MalformedRecord
            | LookupError::HttpClientBuild(_)
            | LookupError::InvalidConfig(_) => LookupErrorKind::Upstream,
        }
    }

    /// The fixed message shown to end users. Never includes the underlying cause.
    pub fn public_message(&self) -> &'static str {
        match self.kind() {
            LookupErrorKind::Validation => MSG_REGISTRATION_REQUIRED,
            LookupErrorKind::NotFound => MSG_DOCTOR_NOT_FOUND,
            LookupErrorKind::Upstream => MSG_UPSTREAM_FAILED,
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::UpstreamTimeout(err)
        } else {
            LookupError::UpstreamTransport(err)
        }
    }
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;
