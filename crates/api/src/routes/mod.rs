pub mod contact;
pub mod health;
pub mod projects;
pub mod views;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /views/landing                 landing view (project preview + contact)
///
/// /projects                      catalog view (?category=&search=)
/// /projects/categories           category summaries
/// /projects/{id}                 project detail
///
/// /contact                       contact snapshot
/// /contact/draft                 replace (PUT), partial update (PATCH)
/// /contact/submit                submit the draft (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Composite landing view.
        .nest("/views", views::router())
        // Full catalog with search and category filter.
        .nest("/projects", projects::router())
        // Contact form.
        .nest("/contact", contact::router())
}
