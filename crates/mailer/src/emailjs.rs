//! EmailJS REST client.
//!
//! One `POST` per submission carrying the service/template identifiers, the
//! public key, and the four template parameters. Any 2xx answer counts as
//! delivered; everything else is a failure. No retries.

use std::time::Duration;

use async_trait::async_trait;
use folio_core::relay::{EmailRelay, RelayError, RelayMessage};
use serde::Serialize;

/// Default EmailJS send endpoint.
pub const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// HTTP request timeout for a single send.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for EmailJS delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailJsError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// EmailJS returned a non-2xx status code.
    #[error("EmailJS returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

impl From<EmailJsError> for RelayError {
    fn from(err: EmailJsError) -> Self {
        match err {
            EmailJsError::Request(e) => RelayError::Transport(e.to_string()),
            EmailJsError::HttpStatus { status, body } => RelayError::Rejected { status, body },
        }
    }
}

// ---------------------------------------------------------------------------
// EmailJsConfig
// ---------------------------------------------------------------------------

/// Credentials and endpoint for the EmailJS relay.
#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    /// Public client key, sent as `user_id`.
    pub public_key: String,
    /// Optional private key, sent as `accessToken` when set.
    pub private_key: Option<String>,
    pub api_url: String,
}

impl EmailJsConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if any required variable is missing, signalling that
    /// the relay is not configured.
    ///
    /// | Variable              | Required | Default                                        |
    /// |-----------------------|----------|------------------------------------------------|
    /// | `EMAILJS_SERVICE_ID`  | yes      | —                                              |
    /// | `EMAILJS_TEMPLATE_ID` | yes      | —                                              |
    /// | `EMAILJS_PUBLIC_KEY`  | yes      | —                                              |
    /// | `EMAILJS_PRIVATE_KEY` | no       | —                                              |
    /// | `EMAILJS_API_URL`     | no       | `https://api.emailjs.com/api/v1.0/email/send`  |
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Some(Self {
            service_id: non_empty("EMAILJS_SERVICE_ID")?,
            template_id: non_empty("EMAILJS_TEMPLATE_ID")?,
            public_key: non_empty("EMAILJS_PUBLIC_KEY")?,
            private_key: non_empty("EMAILJS_PRIVATE_KEY"),
            api_url: non_empty("EMAILJS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a RelayMessage,
}

// ---------------------------------------------------------------------------
// EmailJsRelay
// ---------------------------------------------------------------------------

/// Delivers contact messages through EmailJS.
pub struct EmailJsRelay {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsRelay {
    /// Create a relay with a pre-configured HTTP client.
    pub fn new(config: EmailJsConfig) -> Result<Self, EmailJsError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    /// Execute a single send and check the response status.
    pub async fn deliver(&self, message: &RelayMessage) -> Result<(), EmailJsError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: message,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailJsError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(
            service_id = %self.config.service_id,
            template_id = %self.config.template_id,
            "Contact email relayed"
        );
        Ok(())
    }
}

#[async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, message: &RelayMessage) -> Result<(), RelayError> {
        self.deliver(message).await.map_err(|e| {
            tracing::warn!(error = %e, "EmailJS delivery failed");
            RelayError::from(e)
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
