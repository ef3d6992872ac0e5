//! Request handlers.
//!
//! Each submodule provides the async handler functions for one route group.
//! Handlers delegate to `folio_core` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod contact;
pub mod projects;
pub mod views;
