//! # DocSage Form
//!
//! Headless implementation of the doctor lookup form.
//!
//! Contains:
//! - [`LookupForm`]: the Idle / Loading / Results / Error state machine with a detail overlay
//! - [`ProxyClient`]: the HTTP client for the `api-rest` lookup proxy
//! - [`LookupController`]: runs submits through a transport and applies only the latest response
//! - [`ThemeSetting`]: the injected light/dark preference
//!
//! Rendering is left to the front end; `view` only turns records into labelled text.

pub mod client;
pub mod controller;
pub mod error;
pub mod state;
pub mod theme;
pub mod view;

pub use client::{ClientError, LookupTransport, ProxyClient, FETCH_FAILED_MESSAGE};
pub use controller::LookupController;
pub use error::{FormError, FormResult};
pub use state::{LookupForm, PendingLookup, Phase, RequestTicket, Resolution};
pub use theme::{FileThemeStore, Theme, ThemeSetting, ThemeStore};
pub use view::{DetailView, FieldValue, NOT_AVAILABLE, SUMMARY_HEADERS};
