//! Route definitions for composite page views.
//!
//! Mounted at `/views` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::views;
use crate::state::AppState;

/// View routes mounted at `/views`.
///
/// ```text
/// GET    /landing    -> landing
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/landing", get(views::landing))
}
