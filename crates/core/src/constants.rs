//! Constants used throughout the DocSage core crate.
//!
//! User-facing error strings live here so the proxy and its clients agree on them
//! byte-for-byte.

/// Registry search endpoint used when no override is configured.
pub const DEFAULT_REGISTRY_URL: &str = "https://pmc.gov.pk/api/DRC/GetData";

/// Message returned when the lookup request carries no registration number.
pub const MSG_REGISTRATION_REQUIRED: &str = "Registration number is required";

/// Message returned when the registry reports no match.
pub const MSG_DOCTOR_NOT_FOUND: &str = "Doctor not found";

/// Message returned for any transport or upstream-shape failure.
pub const MSG_UPSTREAM_FAILED: &str = "Failed to fetch doctor details";
