//! Route definitions for the project catalog.
//!
//! Mounted at `/projects` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Catalog routes mounted at `/projects`.
///
/// ```text
/// GET    /               -> list_projects
/// GET    /categories     -> list_categories
/// GET    /{id}           -> get_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_projects))
        .route("/categories", get(projects::list_categories))
        .route("/{id}", get(projects::get_project))
}
