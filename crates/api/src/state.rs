use std::sync::Arc;

use folio_core::catalog::Catalog;
use folio_core::submission::ContactForm;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Read-only project catalog.
    pub catalog: Arc<Catalog>,
    /// The contact form (single visitor session).
    pub contact: ContactForm,
    /// Whether a real email relay is wired in.
    pub relay_configured: bool,
}
