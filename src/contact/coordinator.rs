// SPDX-License-Identifier: MPL-2.0
//! Submission coordinator for the contact form.

use crate::application::port::{ContactApi, ContactError, ContactReceipt};
use crate::diagnostics::sanitize_message;
use crate::domain::contact::{ContactFields, Field, SubmissionPhase};
use crate::notifications::NotificationHandle;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Why `submit` did not produce a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Another submission is still in flight; no request was sent.
    #[error("a submission is already in progress")]
    Busy,

    /// The request was sent and failed. The visitor has been shown a toast.
    #[error(transparent)]
    Failed(#[from] ContactError),
}

#[derive(Debug, Default)]
struct SubmissionState {
    phase: SubmissionPhase,
    fields: ContactFields,
    last_error: Option<String>,
}

/// Contact form state plus the submission protocol.
///
/// The lock around the state is never held across the network call, so
/// concurrent `submit` calls see `Submitting` and are turned away.
pub struct ContactForm {
    api: Arc<dyn ContactApi>,
    toasts: NotificationHandle,
    state: Mutex<SubmissionState>,
}

impl ContactForm {
    pub fn new(api: Arc<dyn ContactApi>, toasts: NotificationHandle) -> Self {
        Self {
            api,
            toasts,
            state: Mutex::new(SubmissionState::default()),
        }
    }

    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        self.state().phase
    }

    /// Whether inputs should be locked.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase() == SubmissionPhase::Submitting
    }

    /// A copy of the current field values.
    #[must_use]
    pub fn fields(&self) -> ContactFields {
        self.state().fields.clone()
    }

    /// Message shown for the last failed submission, cleared on the next one.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.state().last_error.clone()
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.state().fields.set(field, value);
    }

    /// Submits whatever the fields currently hold.
    pub async fn submit_current(&self) -> Result<ContactReceipt, SubmitError> {
        let fields = self.fields();
        self.submit(fields).await
    }

    /// Sends `fields` to the contact collaborator.
    ///
    /// Rejected with [`SubmitError::Busy`] while a previous submission is in
    /// flight. Otherwise the phase is `Succeeded` or `Failed` by the time
    /// this resolves, and exactly one toast has been requested. Dropping the
    /// future mid-flight settles the phase to `Failed` without a toast.
    ///
    /// Fields are forwarded as given: emptiness checks belong to the caller
    /// (see [`ContactFields::missing`]).
    pub async fn submit(&self, fields: ContactFields) -> Result<ContactReceipt, SubmitError> {
        {
            let mut state = self.state();
            if !state.phase.accepts_submit() {
                tracing::debug!("contact submission rejected, one is already in flight");
                return Err(SubmitError::Busy);
            }
            state.phase = SubmissionPhase::Submitting;
            state.fields = fields.clone();
            state.last_error = None;
        }

        let in_flight = InFlight::new(&self.state);
        let outcome = self.api.submit_contact_message(&fields).await;
        in_flight.disarm();

        let mut state = self.state();
        match outcome {
            Ok(receipt) => {
                state.phase = SubmissionPhase::Succeeded;
                state.fields.clear();
                drop(state);

                tracing::info!(id = receipt.id.as_deref(), "contact message sent");
                self.toasts.success(receipt.message.clone());
                Ok(receipt)
            }
            Err(err) => {
                let message = err.user_message();
                state.phase = SubmissionPhase::Failed;
                state.last_error = Some(message.clone());
                drop(state);

                tracing::warn!(
                    kind = err.kind().as_str(),
                    error = %sanitize_message(&err.to_string()),
                    "contact submission failed"
                );
                self.toasts.error(message);
                Err(SubmitError::Failed(err))
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, SubmissionState> {
        lock(&self.state)
    }
}

fn lock(state: &Mutex<SubmissionState>) -> MutexGuard<'_, SubmissionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Settles an abandoned submission.
///
/// If the `submit` future is dropped while the request is in flight, or the
/// collaborator panics, the form moves to `Failed` with its fields intact so
/// the visitor can retry.
struct InFlight<'a> {
    state: &'a Mutex<SubmissionState>,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a Mutex<SubmissionState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = lock(self.state);
        if state.phase == SubmissionPhase::Submitting {
            state.phase = SubmissionPhase::Failed;
            tracing::warn!("contact submission abandoned before a response arrived");
        }
    }
}

impl std::fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactForm")
            .field("state", &*self.state())
            .finish_non_exhaustive()
    }
}
