//! Handlers for the contact form.
//!
//! The form lives in [`AppState::contact`]; these handlers edit its draft,
//! read its status, and trigger submissions. A relay failure is not an HTTP
//! error: it is reported as outcome `failed` with status `error`, and the
//! draft is kept so the visitor can retry.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::contact::{ContactDraft, ContactSnapshot, DraftUpdate, SubmitOutcome};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of `POST /contact/submit`.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub outcome: SubmitOutcome,
    pub contact: ContactSnapshot,
}

/// GET /api/v1/contact
pub async fn get_contact(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.contact.snapshot().await,
    }))
}

/// PUT /api/v1/contact/draft
///
/// Replace the whole draft. Missing fields become empty.
pub async fn replace_draft(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<ContactDraft>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.contact.replace_draft(draft).await,
    }))
}

/// PATCH /api/v1/contact/draft
///
/// Overwrite only the fields present in the body.
pub async fn update_draft(
    State(state): State<AppState>,
    ApiJson(update): ApiJson<DraftUpdate>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.contact.apply(update).await,
    }))
}

/// POST /api/v1/contact/submit
///
/// Send the current draft through the email relay. A submit while another
/// is in flight returns outcome `ignored` and sends nothing.
pub async fn submit(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let outcome = state.contact.submit().await?;
    let contact = state.contact.snapshot().await;

    tracing::info!(?outcome, status = ?contact.status, "Contact submit handled");

    Ok(Json(DataResponse {
        data: SubmitResponse { outcome, contact },
    }))
}
