//! # DocSage Core
//!
//! Core business logic for the DocSage doctor-license lookup.
//!
//! This crate contains the domain types and the lookup flow:
//! - Doctor summary/detail records as published by the medical council registry
//! - The registry collaborator (form-encoded search, envelope interpretation)
//! - The lookup service and its three-way error taxonomy
//!
//! **No API concerns**: HTTP servers, routing and response encoding belong in `api-rest`;
//! wire DTOs shared with clients belong in `api-shared`.

pub mod config;
pub mod constants;
pub mod doctor;
pub mod error;
pub mod lookup;
pub mod registry;

pub use config::CoreConfig;
pub use doctor::{DoctorDetail, DoctorRecord, DoctorSummary, Qualification};
pub use error::{LookupError, LookupErrorKind, LookupResult};
pub use lookup::{LookupQuery, LookupService};
pub use registry::{HttpRegistryClient, RegistryClient, RegistryEnvelope, RegistrySearch};

pub use docsage_types::{NonEmptyText, RegistrationNumber, TextError};
