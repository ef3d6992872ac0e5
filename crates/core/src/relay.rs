//! Outbound email relay seam.
//!
//! The submission flow talks to a third-party relay through [`EmailRelay`].
//! The production implementation lives in the `folio-mailer` crate; tests
//! plug in their own.

use async_trait::async_trait;
use serde::Serialize;

use crate::contact::ContactDraft;

/// Template parameters carried by one relay call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayMessage {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

impl From<&ContactDraft> for RelayMessage {
    fn from(draft: &ContactDraft) -> Self {
        Self {
            from_name: draft.name.clone(),
            from_email: draft.email.clone(),
            subject: draft.subject.clone(),
            message: draft.message.clone(),
        }
    }
}

/// Why a relay call did not go through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// No relay credentials were configured.
    #[error("Email relay is not configured")]
    NotConfigured,

    /// The request never got a response (network, DNS, TLS, timeout).
    #[error("Relay transport error: {0}")]
    Transport(String),

    /// The relay answered with a non-2xx status.
    #[error("Relay rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Sends a contact message on the caller's behalf. Success or failure is
/// binary; there are no partial outcomes.
#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, message: &RelayMessage) -> Result<(), RelayError>;
}

/// Relay used when no credentials are configured. Every send fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRelay;

#[async_trait]
impl EmailRelay for DisabledRelay {
    async fn send(&self, _message: &RelayMessage) -> Result<(), RelayError> {
        tracing::warn!("Contact submission dropped: email relay is not configured");
        Err(RelayError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_maps_draft_fields() {
        let draft = ContactDraft {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Body".into(),
        };
        let message = RelayMessage::from(&draft);
        assert_eq!(message.from_name, "Ada");
        assert_eq!(message.from_email, "ada@example.com");
        assert_eq!(message.subject, "Hi");
        assert_eq!(message.message, "Body");
    }

    #[test]
    fn rejected_error_display() {
        let err = RelayError::Rejected {
            status: 400,
            body: "The Public Key is invalid".into(),
        };
        assert_eq!(
            err.to_string(),
            "Relay rejected message (400): The Public Key is invalid"
        );
    }

    #[tokio::test]
    async fn disabled_relay_always_fails() {
        let message = RelayMessage::from(&ContactDraft::default());
        assert_eq!(
            DisabledRelay.send(&message).await,
            Err(RelayError::NotConfigured)
        );
    }
}
