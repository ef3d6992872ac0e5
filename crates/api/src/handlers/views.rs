//! Handlers for composite page views.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::catalog::PREVIEW_COUNT;
use folio_core::contact::ContactSnapshot;
use folio_core::project::Project;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload of the landing view.
#[derive(Debug, Serialize)]
pub struct LandingView<'a> {
    /// The first projects of the catalog, in catalog order.
    pub projects: &'a [Project],
    /// Size of the full catalog, for the "view all" link.
    pub total_count: usize,
    pub contact: ContactSnapshot,
}

/// GET /api/v1/views/landing
///
/// Everything the landing page needs in one round trip.
pub async fn landing(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let contact = state.contact.snapshot().await;

    let view = LandingView {
        projects: state.catalog.preview(PREVIEW_COUNT),
        total_count: state.catalog.len(),
        contact,
    };

    Ok(Json(DataResponse { data: view }).into_response())
}
