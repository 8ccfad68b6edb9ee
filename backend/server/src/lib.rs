//! Signup backend for the scroll-driven landing page.
//!
//! # General Infrastructure
//! - Page is static, the only dynamic piece is the waitlist form at the end of the story
//! - Form posts JSON to `/api/subscribers`, backend validates and stores the email
//! - Backend picks its store once at startup, Redis if `DATABASE_URL` is set, memory otherwise
//!
//!
//!
//! # Notes
//!
//! ## Memory vs Redis
//! Memory storage is for local runs and previews. Nothing survives a restart
//! and nothing stops the same email signing up twice, every submission is a new record.
//!
//! Redis enforces one record per email. A repeat comes back as 409 so the form
//! can say so instead of showing a generic failure. Whether the product wants
//! duplicates rejected everywhere is still open, memory storage keeps the old behavior.
//!
//!
//!
//! # Setup
//!
//! Run with memory storage.
//! ```sh
//! cargo run -p scrolly
//! ```
//!
//! Run against Redis.
//! ```sh
//! DATABASE_URL=redis://127.0.0.1:6379 RUST_LOG=info cargo run -p scrolly
//! ```
//!
//! Sign up from the command line.
//! ```sh
//! cargo run -p tester -- test@example.com
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod memory;
pub mod routes;
pub mod state;
pub mod storage;
pub mod utils;

use config::Config;
use routes::{create_subscriber_handler, health_handler};
use shared::{HEALTH, SUBSCRIBERS};
use state::AppState;

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config).await?;

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

pub fn app(state: Arc<AppState>) -> Router {
    let cors = cors(&state.config);

    Router::new()
        .route(SUBSCRIBERS.path, post(create_subscriber_handler))
        .route(HEALTH.path, get(health_handler))
        .layer(cors)
        .with_state(state)
}

fn cors(config: &Config) -> CorsLayer {
    let origin = match &config.allowed_origin {
        Some(origin) => AllowOrigin::exact(origin.clone()),
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
