//! Doctor lookup service.
//!
//! Validates the incoming registration number, runs exactly one registry search and interprets
//! the envelope. The service holds no per-request state, so one instance is shared by all
//! handlers.

use crate::config::CoreConfig;
use crate::doctor::DoctorRecord;
use crate::registry::{HttpRegistryClient, RegistryClient, RegistrySearch};
use crate::{LookupError, LookupResult};
use docsage_types::RegistrationNumber;
use std::sync::Arc;

/// A validated lookup request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupQuery {
    registration_number: RegistrationNumber,
}

impl LookupQuery {
    /// Build a query from raw user input.
    ///
    /// Input is trimmed; `None`, empty and whitespace-only values are rejected.
    pub fn parse(raw: Option<&str>) -> LookupResult<Self> {
        let raw = raw.ok_or(LookupError::MissingRegistrationNumber)?;
        let registration_number =
            RegistrationNumber::parse(raw).map_err(|_| LookupError::MissingRegistrationNumber)?;
        Ok(Self {
            registration_number,
        })
    }

    pub fn registration_number(&self) -> &RegistrationNumber {
        &self.registration_number
    }
}

/// Pure lookup operations - no HTTP server concerns
#[derive(Clone)]
pub struct LookupService {
    registry: Arc<dyn RegistryClient>,
}

impl LookupService {
    pub fn new(registry: Arc<dyn RegistryClient>) -> Self {
        Self { registry }
    }

    /// Build a service that talks to the registry configured in `cfg`.
    pub fn from_config(cfg: &CoreConfig) -> LookupResult<Self> {
        let client = HttpRegistryClient::new(cfg)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Look up a doctor by raw registration number.
    ///
    /// # Errors
    /// - [`LookupError::MissingRegistrationNumber`] if `raw` is absent or blank; no upstream call
    ///   is made in that case.
    /// - [`LookupError::NotFound`] if the registry reports no match.
    /// - any upstream-kind error for transport failures or unexpected payloads.
    pub async fn lookup(&self, raw: Option<&str>) -> LookupResult<DoctorRecord> {
        let query = LookupQuery::parse(raw)?;
        self.lookup_query(&query).await
    }

    pub async fn lookup_query(&self, query: &LookupQuery) -> LookupResult<DoctorRecord> {
        let search = RegistrySearch::by_registration_number(query.registration_number());
        let envelope = self.registry.search(&search).await?;
        envelope.into_first_record(query.registration_number())
    }
}

impl std::fmt::Debug for LookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupService").finish_non_exhaustive()
    }
}
