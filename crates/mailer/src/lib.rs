//! Folio contact mail delivery.
//!
//! [`EmailJsRelay`] forwards contact submissions to the EmailJS REST API,
//! implementing [`folio_core::relay::EmailRelay`]. Configuration is loaded
//! from environment variables; if the credentials are not all set,
//! [`EmailJsConfig::from_env`] returns `None` and the caller should fall back
//! to [`folio_core::relay::DisabledRelay`].

pub mod emailjs;

pub use emailjs::{EmailJsConfig, EmailJsError, EmailJsRelay};
