use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body of a lookup request.
///
/// `reg_no` is optional on the wire so that a missing field reaches the handler and is rejected
/// with the same message as an empty one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LookupReq {
    #[serde(rename = "regNo", default)]
    pub reg_no: Option<String>,
}

impl LookupReq {
    pub fn new(reg_no: impl Into<String>) -> Self {
        Self {
            reg_no: Some(reg_no.into()),
        }
    }
}

/// Error body returned for every non-2xx lookup response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
