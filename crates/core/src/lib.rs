//! Folio domain core.
//!
//! Zero internal dependencies, so the API server, the mailer, and any future
//! tooling can share the same building blocks:
//!
//! - [`project`] — project record and its closed enumerations.
//! - [`fixture`] — the compiled-in project list.
//! - [`catalog`] — category/search filtering over a project list.
//! - [`contact`] — the contact draft and its status types.
//! - [`relay`] — the outbound email-relay seam.
//! - [`submission`] — the contact submission state machine.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod fixture;
pub mod project;
pub mod relay;
pub mod submission;
pub mod types;
