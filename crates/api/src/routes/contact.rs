//! Route definitions for the contact form.
//!
//! Mounted at `/contact` in the API route tree.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact routes mounted at `/contact`.
///
/// ```text
/// GET    /          -> get_contact
/// PUT    /draft     -> replace_draft
/// PATCH  /draft     -> update_draft
/// POST   /submit    -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::get_contact))
        .route(
            "/draft",
            put(contact::replace_draft).patch(contact::update_draft),
        )
        .route("/submit", post(contact::submit))
}
