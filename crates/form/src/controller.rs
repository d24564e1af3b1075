//! Drives a [`LookupForm`] through a [`LookupTransport`].
//!
//! The form lock is held only while issuing or resolving a ticket, never across the network
//! call, so overlapping submits are possible and are ordered by their tickets.

use crate::client::LookupTransport;
use crate::error::FormResult;
use crate::state::{LookupForm, Resolution};
use parking_lot::Mutex;

pub struct LookupController<T> {
    form: Mutex<LookupForm>,
    transport: T,
}

impl<T: LookupTransport> LookupController<T> {
    pub fn new(transport: T) -> Self {
        Self::from_form(LookupForm::new(), transport)
    }

    pub fn from_form(form: LookupForm, transport: T) -> Self {
        Self {
            form: Mutex::new(form),
            transport,
        }
    }

    /// Set the query to `registration_number`, submit it, and apply the response.
    ///
    /// Exactly one transport call is made. Returns [`Resolution::Stale`] if another submit was
    /// issued while this one was in flight.
    pub async fn submit(&self, registration_number: impl Into<String>) -> Resolution {
        let pending = {
            let mut form = self.form.lock();
            form.set_query(registration_number);
            form.submit()
        };

        let outcome = self.transport.lookup(&pending.registration_number).await;

        self.form.lock().resolve(pending.ticket, outcome)
    }

    pub fn open_detail(&self, index: usize) -> FormResult<()> {
        self.form.lock().open_detail(index)
    }

    pub fn close_detail(&self) {
        self.form.lock().close_detail();
    }

    /// Run `f` against the current form state.
    pub fn inspect<R>(&self, f: impl FnOnce(&LookupForm) -> R) -> R {
        f(&self.form.lock())
    }

    pub fn snapshot(&self) -> LookupForm {
        self.form.lock().clone()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use crate::state::Phase;
    use async_trait::async_trait;
    use docsage_core::{DoctorDetail, DoctorSummary};
    use futures::channel::oneshot;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type Reply = Result<DoctorDetail, ClientError>;

    /// Transport whose replies are released by the test, one channel per registration number.
    #[derive(Default)]
    struct GatedTransport {
        gates: Mutex<HashMap<String, oneshot::Receiver<Reply>>>,
        calls: AtomicUsize,
    }

    impl GatedTransport {
        fn gate(&self, registration_number: &str) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().insert(registration_number.to_owned(), rx);
            tx
        }
    }

    #[async_trait]
    impl LookupTransport for GatedTransport {
        async fn lookup(&self, registration_number: &str) -> Reply {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let rx = self
                .gates
                .lock()
                .remove(registration_number)
                .expect("test registered a gate for this number");
            rx.await.expect("test released the gate")
        }
    }

    fn doctor(reg: &str, name: &str) -> DoctorDetail {
        DoctorDetail::from(DoctorSummary {
            registration_no: reg.into(),
            name: name.into(),
            father_name: "John Doe".into(),
            status: "Active".into(),
        })
    }

    #[tokio::test]
    async fn submit_applies_response() {
        let controller = LookupController::new(GatedTransport::default());
        let tx = controller.transport().gate("12345-A");
        tx.send(Ok(doctor("12345-A", "Jane Doe"))).unwrap();

        let res = controller.submit("12345-A").await;

        assert_eq!(res, Resolution::Applied);
        assert_eq!(controller.inspect(|f| f.phase()), Phase::Results);
        assert_eq!(controller.transport().calls.load(Ordering::SeqCst), 1);

        controller.open_detail(0).unwrap();
        assert!(controller.inspect(|f| f.detail_view().is_some()));
        controller.close_detail();
        assert!(controller.inspect(|f| f.detail_view().is_none()));
    }

    #[tokio::test]
    async fn late_response_from_superseded_submit_is_discarded() {
        let controller = LookupController::new(GatedTransport::default());
        let slow = controller.transport().gate("old");
        let fast = controller.transport().gate("new");

        let first = controller.submit("old");
        futures::pin_mut!(first);
        assert!(futures::poll!(&mut first).is_pending());
        assert_eq!(controller.inspect(|f| f.phase()), Phase::Loading);

        fast.send(Ok(doctor("new", "Newer"))).unwrap();
        assert_eq!(controller.submit("new").await, Resolution::Applied);

        slow.send(Err(ClientError::Rejected {
            status: 404,
            message: "Doctor not found".into(),
        }))
        .unwrap();
        assert_eq!(first.await, Resolution::Stale);

        let form = controller.snapshot();
        assert_eq!(form.phase(), Phase::Results);
        assert_eq!(form.results()[0].summary.name, "Newer");
        assert_eq!(form.query(), "new");
        assert_eq!(controller.transport().calls.load(Ordering::SeqCst), 2);
    }
}
