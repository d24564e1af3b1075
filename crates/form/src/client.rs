//! HTTP client for the lookup proxy.
//!
//! [`LookupTransport`] is the seam the form controller depends on; [`ProxyClient`] implements it
//! against a running `api-rest` proxy.

use crate::error::{FormError, FormResult};
use api_shared::{ErrorRes, LookupReq, LOOKUP_PATH};
use async_trait::async_trait;
use docsage_core::DoctorDetail;

/// Message shown when the proxy could not be reached or answered with something unreadable.
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching data.";

/// Why a lookup did not produce a doctor record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The proxy answered with a non-2xx status and an `{ "error": ... }` body.
    #[error("proxy rejected lookup with HTTP {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("proxy unreachable: {0}")]
    Unreachable(String),
    #[error("proxy response could not be decoded: {0}")]
    Decode(String),
}

impl ClientError {
    /// The text the form shows in its Error state.
    pub fn user_message(&self) -> &str {
        match self {
            ClientError::Rejected { message, .. } => message,
            ClientError::Unreachable(_) | ClientError::Decode(_) => FETCH_FAILED_MESSAGE,
        }
    }
}

/// Anything that can turn a registration number into a doctor record.
#[async_trait]
pub trait LookupTransport: Send + Sync {
    async fn lookup(&self, registration_number: &str) -> Result<DoctorDetail, ClientError>;
}

/// `reqwest` client for the proxy's lookup endpoint.
#[derive(Clone, Debug)]
pub struct ProxyClient {
    endpoint: String,
    client: reqwest::Client,
}

impl ProxyClient {
    /// Create a client for the proxy at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> FormResult<Self> {
        let base = base_url.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(FormError::InvalidProxyUrl(base_url.to_owned()));
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(FormError::HttpClientBuild)?;

        Ok(Self {
            endpoint: format!("{base}{LOOKUP_PATH}"),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LookupTransport for ProxyClient {
    async fn lookup(&self, registration_number: &str) -> Result<DoctorDetail, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&LookupReq::new(registration_number))
            .send()
            .await
            .map_err(|e| ClientError::Unreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Unreachable(e.to_string()))?;

        if status.is_success() {
            return serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()));
        }

        let err: ErrorRes =
            serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message: err.error,
        })
    }
}
