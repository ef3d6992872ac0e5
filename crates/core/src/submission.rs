//! Contact submission state machine.
//!
//! ```text
//! idle ──submit──▶ submitting ──relay ok──▶ success ──3 s──▶ idle
//!                      │
//!                      └──relay err──▶ error ──4 s──▶ idle
//! ```
//!
//! A submit while `submitting` is a no-op. The relay call runs in its own
//! task, so a caller that goes away mid-flight does not leave the form stuck
//! in `submitting`; the outcome is still recorded, nobody just hears about it.
//! A relay that panics counts as a failed submission.
//!
//! The auto-revert to idle is a cancellable scheduled callback. Each schedule
//! replaces the previous one, a new submission cancels it, and the callback
//! only holds a weak reference so it never touches a form that is gone.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use validator::Validate;

use crate::contact::{
    ContactDraft, ContactSnapshot, DraftUpdate, SubmissionStatus, SubmitOutcome, ERROR_DISPLAY,
    SUCCESS_DISPLAY,
};
use crate::error::CoreError;
use crate::relay::{EmailRelay, RelayMessage};
use crate::types::Timestamp;

/// How long each terminal status is displayed before reverting to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWindows {
    pub success: Duration,
    pub error: Duration,
}

impl Default for DisplayWindows {
    fn default() -> Self {
        Self {
            success: SUCCESS_DISPLAY,
            error: ERROR_DISPLAY,
        }
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

struct FormState {
    draft: ContactDraft,
    status: SubmissionStatus,
    submitting: bool,
    status_changed_at: Timestamp,
    revert: Option<CancellationToken>,
}

impl FormState {
    fn new() -> Self {
        Self {
            draft: ContactDraft::default(),
            status: SubmissionStatus::Idle,
            submitting: false,
            status_changed_at: Utc::now(),
            revert: None,
        }
    }

    fn set_status(&mut self, status: SubmissionStatus) {
        self.status = status;
        self.status_changed_at = Utc::now();
    }

    fn cancel_revert(&mut self) {
        if let Some(token) = self.revert.take() {
            token.cancel();
        }
    }

    fn snapshot(&self) -> ContactSnapshot {
        ContactSnapshot {
            draft: self.draft.clone(),
            status: self.status,
            submitting: self.submitting,
            status_changed_at: self.status_changed_at,
        }
    }
}

struct Inner {
    state: Mutex<FormState>,
    relay: Arc<dyn EmailRelay>,
    windows: DisplayWindows,
    /// Parent of every revert token; cancelled when the form goes away.
    lifetime: CancellationToken,
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}

impl Inner {
    /// Run the relay call and record its result.
    ///
    /// The relay runs in its own task so a panicking relay still settles the
    /// form: `submitting` is cleared on every path, whether or not anyone is
    /// awaiting the outcome.
    async fn dispatch(self: Arc<Self>, message: RelayMessage) -> Result<SubmitOutcome, CoreError> {
        tracing::info!(subject = %message.subject, "Dispatching contact submission");
        let relay = Arc::clone(&self.relay);
        let result = tokio::spawn(async move { relay.send(&message).await }).await;

        let mut state = self.state.lock().await;
        state.submitting = false;

        match result {
            Ok(Ok(())) => {
                state.draft = ContactDraft::default();
                state.set_status(SubmissionStatus::Success);
                self.schedule_revert(&mut state, self.windows.success);
                tracing::info!("Contact submission sent");
                Ok(SubmitOutcome::Sent)
            }
            Ok(Err(e)) => {
                state.set_status(SubmissionStatus::Error);
                self.schedule_revert(&mut state, self.windows.error);
                tracing::error!(error = %e, "Contact submission failed");
                Ok(SubmitOutcome::Failed)
            }
            Err(e) => {
                state.set_status(SubmissionStatus::Error);
                self.schedule_revert(&mut state, self.windows.error);
                tracing::error!(error = %e, "Contact relay task failed");
                Err(CoreError::Internal(format!("contact relay task failed: {e}")))
            }
        }
    }

    /// Revert `state` to idle after `after`, replacing any pending revert.
    fn schedule_revert(self: &Arc<Self>, state: &mut FormState, after: Duration) {
        state.cancel_revert();

        let token = self.lifetime.child_token();
        state.revert = Some(token.clone());
        let weak = Arc::downgrade(self);

        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep(after) => {
                    let Some(inner) = weak.upgrade() else {
                        return;
                    };
                    let mut state = inner.state.lock().await;
                    // Superseded while waiting for the lock.
                    if token.is_cancelled() {
                        return;
                    }
                    state.revert = None;
                    state.set_status(SubmissionStatus::Idle);
                    tracing::debug!("Contact status reverted to idle");
                }
            }
        });
    }
}

// ---------------------------------------------------------------------------
// ContactForm
// ---------------------------------------------------------------------------

/// The contact form: owns the draft, the status, and the in-flight guard.
///
/// Cheaply cloneable; clones share the same form.
#[derive(Clone)]
pub struct ContactForm {
    inner: Arc<Inner>,
}

impl ContactForm {
    pub fn new(relay: Arc<dyn EmailRelay>) -> Self {
        Self::with_windows(relay, DisplayWindows::default())
    }

    pub fn with_windows(relay: Arc<dyn EmailRelay>, windows: DisplayWindows) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(FormState::new()),
                relay,
                windows,
                lifetime: CancellationToken::new(),
            }),
        }
    }

    pub async fn snapshot(&self) -> ContactSnapshot {
        self.inner.state.lock().await.snapshot()
    }

    pub async fn replace_draft(&self, draft: ContactDraft) -> ContactSnapshot {
        let mut state = self.inner.state.lock().await;
        state.draft = draft;
        state.snapshot()
    }

    pub async fn apply(&self, update: DraftUpdate) -> ContactSnapshot {
        let mut state = self.inner.state.lock().await;
        state.draft.apply(update);
        state.snapshot()
    }

    /// Submit the current draft.
    ///
    /// Returns [`SubmitOutcome::Ignored`] without contacting the relay when a
    /// submission is already in flight. An invalid draft is a
    /// [`CoreError::Validation`] and leaves the form untouched.
    pub async fn submit(&self) -> Result<SubmitOutcome, CoreError> {
        let message = {
            let mut state = self.inner.state.lock().await;
            if state.submitting {
                tracing::debug!("Contact submission already in flight, ignoring");
                return Ok(SubmitOutcome::Ignored);
            }
            state.draft.validate()?;

            state.cancel_revert();
            state.submitting = true;
            state.set_status(SubmissionStatus::Idle);
            RelayMessage::from(&state.draft)
        };

        tokio::spawn(Arc::clone(&self.inner).dispatch(message))
            .await
            .map_err(|e| CoreError::Internal(format!("contact dispatch task failed: {e}")))?
    }

    /// Cancel any pending auto-revert. Call on shutdown.
    pub fn close(&self) {
        self.inner.lifetime.cancel();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
