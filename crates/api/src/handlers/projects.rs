//! Handlers for the project catalog.
//!
//! The catalog is read-only and filtered in memory on every request.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::catalog::{CategorySummary, FilterCriteria};
use folio_core::project::Project;
use folio_core::types::ProjectId;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{ApiPath, ApiQuery};
use crate::query::CatalogParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload of the full catalog view.
#[derive(Debug, Serialize)]
pub struct CatalogView<'a> {
    /// The criteria actually applied, after defaulting.
    pub criteria: FilterCriteria,
    pub projects: Vec<&'a Project>,
    /// Number of matching projects.
    pub total_count: usize,
    /// Set when nothing matched; clients show their "no results" state.
    pub no_results: bool,
    pub categories: Vec<CategorySummary>,
}

/// GET /api/v1/projects
///
/// Filter the catalog by `category` (`all` or one category id) and a
/// case-insensitive `search` over title, description, technologies and tags.
pub async fn list_projects(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CatalogParams>,
) -> AppResult<impl IntoResponse> {
    let criteria =
        FilterCriteria::from_raw(params.category.as_deref(), params.search.as_deref())?;

    let projects = state.catalog.filter(&criteria);
    let total_count = projects.len();

    tracing::debug!(
        category = %criteria.category,
        search = %criteria.search,
        results = total_count,
        "Catalog filtered",
    );

    let view = CatalogView {
        projects,
        total_count,
        no_results: total_count == 0,
        categories: state.catalog.category_summaries(),
        criteria,
    };

    Ok(Json(DataResponse { data: view }).into_response())
}

/// GET /api/v1/projects/categories
///
/// Category filter entries with per-category project counts.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.catalog.category_summaries(),
    }))
}

/// GET /api/v1/projects/{id}
///
/// Full record of a single project.
pub async fn get_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProjectId>,
) -> AppResult<impl IntoResponse> {
    let project = state.catalog.get(id)?;

    Ok(Json(DataResponse { data: project }).into_response())
}
