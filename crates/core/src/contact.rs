//! Contact form draft and submission status types.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Timestamp;

/// How long the success indicator stays up before reverting to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);

/// How long the error indicator stays up before reverting to idle.
pub const ERROR_DISPLAY: Duration = Duration::from_secs(4);

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// In-progress contents of the contact form.
///
/// All four fields are required. `email` must also look like an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactDraft {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "email is required"),
        email(message = "email must be a valid address")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

impl ContactDraft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }

    /// Overwrite the fields present in `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: DraftUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(subject) = update.subject {
            self.subject = subject;
        }
        if let Some(message) = update.message {
            self.message = message;
        }
    }
}

/// Partial draft edit; `None` fields are left as they are.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Feedback state shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Result of a single submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// The relay accepted the message; the draft was cleared.
    Sent,
    /// The relay call failed; the draft was kept.
    Failed,
    /// Another submission was in flight; nothing was sent.
    Ignored,
}

/// Point-in-time view of the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSnapshot {
    pub draft: ContactDraft,
    pub status: SubmissionStatus,
    pub submitting: bool,
    pub status_changed_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Nice portfolio".into(),
        }
    }

    #[test]
    fn filled_draft_is_valid() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn each_field_is_required() {
        let mut draft = filled();
        draft.name.clear();
        draft.message.clear();
        let errors = draft.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("message"));
        assert!(!fields.contains_key("subject"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut draft = filled();
        draft.email = "not-an-email".into();
        assert!(draft.validate().unwrap_err().field_errors().contains_key("email"));
    }

    #[test]
    fn apply_only_touches_given_fields() {
        let mut draft = filled();
        draft.apply(DraftUpdate {
            subject: Some("Job offer".into()),
            ..Default::default()
        });
        assert_eq!(draft.subject, "Job offer");
        assert_eq!(draft.name, "Ada");
    }

    #[test]
    fn default_draft_is_empty() {
        assert!(ContactDraft::default().is_empty());
        assert!(!filled().is_empty());
    }

    #[test]
    fn error_window_outlasts_success_window() {
        assert!(ERROR_DISPLAY > SUCCESS_DISPLAY);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(serde_json::to_string(&SubmitOutcome::Ignored).unwrap(), "\"ignored\"");
    }
}
