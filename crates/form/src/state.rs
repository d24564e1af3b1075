//! The lookup form state machine.
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok──▶ Results ──open_detail──▶ Results + Detail
//!                    │                ▲                         │
//!                    └──err──▶ Error  └───────close_detail──────┘
//! ```
//!
//! Any state goes back to Loading on submit, clearing results and errors first. Each submit is
//! issued a [`RequestTicket`]; only the response carrying the most recent ticket may change
//! state. Responses to superseded submits are discarded.

use crate::client::ClientError;
use crate::error::{FormError, FormResult};
use crate::view::DetailView;
use docsage_core::{DoctorDetail, DoctorSummary};

/// Identifies one submit. Tickets increase monotonically per form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A submit that is waiting for its response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingLookup {
    pub ticket: RequestTicket,
    /// The query exactly as typed; the form does not validate it.
    pub registration_number: String,
}

/// What happened to a response handed to [`LookupForm::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer submit was issued (or this one was already resolved); state is unchanged.
    Stale,
}

/// Coarse, copyable view of where the form is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Results,
    Error,
}

#[derive(Clone, Debug)]
enum FormState {
    Idle,
    Loading(RequestTicket),
    Results {
        doctors: Vec<DoctorDetail>,
        open_detail: Option<usize>,
    },
    Error(String),
}

#[derive(Clone, Debug)]
pub struct LookupForm {
    query: String,
    state: FormState,
    last_issued: u64,
}

impl Default for LookupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupForm {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            state: FormState::Idle,
            last_issued: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            FormState::Idle => Phase::Idle,
            FormState::Loading(_) => Phase::Loading,
            FormState::Results { .. } => Phase::Results,
            FormState::Error(_) => Phase::Error,
        }
    }

    /// Start a lookup for the current query.
    ///
    /// Clears previous results, errors and any open detail overlay, and moves to Loading. Empty
    /// queries are not rejected here; the proxy rejects them.
    pub fn submit(&mut self) -> PendingLookup {
        self.last_issued += 1;
        let ticket = RequestTicket(self.last_issued);
        self.state = FormState::Loading(ticket);

        PendingLookup {
            ticket,
            registration_number: self.query.clone(),
        }
    }

    /// Apply the outcome of the lookup identified by `ticket`.
    ///
    /// Returns [`Resolution::Stale`] and leaves state untouched unless `ticket` belongs to the
    /// submit the form is currently waiting on.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<DoctorDetail, ClientError>,
    ) -> Resolution {
        if !matches!(self.state, FormState::Loading(pending) if pending == ticket) {
            tracing::debug!(
                ticket = ticket.value(),
                latest = self.last_issued,
                "discarding stale lookup response"
            );
            return Resolution::Stale;
        }

        self.state = match outcome {
            Ok(detail) => FormState::Results {
                doctors: vec![detail],
                open_detail: None,
            },
            Err(err) => FormState::Error(err.user_message().to_owned()),
        };
        Resolution::Applied
    }

    /// Current results; empty outside the Results phase.
    pub fn results(&self) -> &[DoctorDetail] {
        match &self.state {
            FormState::Results { doctors, .. } => doctors,
            _ => &[],
        }
    }

    pub fn summaries(&self) -> impl Iterator<Item = &DoctorSummary> {
        self.results().iter().map(DoctorDetail::summary)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FormState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Open the detail overlay for result `index`.
    pub fn open_detail(&mut self, index: usize) -> FormResult<()> {
        let FormState::Results {
            doctors,
            open_detail,
        } = &mut self.state
        else {
            return Err(FormError::NoResults);
        };
        if index >= doctors.len() {
            return Err(FormError::NoSuchResult {
                index,
                len: doctors.len(),
            });
        }

        *open_detail = Some(index);
        Ok(())
    }

    /// Close the detail overlay. The result set is left as it was.
    pub fn close_detail(&mut self) {
        if let FormState::Results { open_detail, .. } = &mut self.state {
            *open_detail = None;
        }
    }

    pub fn detail_view(&self) -> Option<DetailView<'_>> {
        match &self.state {
            FormState::Results {
                doctors,
                open_detail: Some(index),
            } => doctors.get(*index).map(DetailView::new),
            _ => None,
        }
    }
}
