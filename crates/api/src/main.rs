use std::net::SocketAddr;
use std::sync::Arc;

use folio_core::catalog::Catalog;
use folio_core::relay::{DisabledRelay, EmailRelay};
use folio_core::submission::ContactForm;
use folio_mailer::{EmailJsConfig, EmailJsRelay};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "folio_api=debug,folio_core=debug,folio_mailer=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Email relay ---
    let emailjs = EmailJsConfig::from_env();
    let relay_configured = emailjs.is_some();
    let relay: Arc<dyn EmailRelay> = match emailjs {
        Some(emailjs) => {
            tracing::info!(service_id = %emailjs.service_id, "EmailJS relay configured");
            Arc::new(EmailJsRelay::new(emailjs).expect("Failed to build EmailJS HTTP client"))
        }
        None => {
            tracing::warn!("EMAILJS_* not set; contact submissions will fail");
            Arc::new(DisabledRelay)
        }
    };

    // --- Catalog ---
    let catalog = Arc::new(Catalog::fixture());
    tracing::info!(projects = catalog.len(), "Project catalog loaded");

    // --- App state ---
    let contact = ContactForm::new(relay);
    let state = AppState {
        catalog,
        contact: contact.clone(),
        relay_configured,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    contact.close();
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
