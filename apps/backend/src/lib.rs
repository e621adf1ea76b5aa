pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::Trainer;

use crate::config::Config;
use crate::error::{ApiError, Result};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub trainer: Arc<Mutex<Trainer>>,
}

impl AppState {
    pub fn new(trainer: Trainer) -> Self {
        Self {
            trainer: Arc::new(Mutex::new(trainer)),
        }
    }

    /// Lock the trainer for the duration of one request.
    pub fn trainer(&self) -> Result<MutexGuard<'_, Trainer>> {
        self.trainer
            .lock()
            .map_err(|_| ApiError::Internal("trainer lock poisoned".to_string()))
    }
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Vocabulary routes
        .route(
            "/api/vocabulary",
            get(routes::vocabulary::list).post(routes::vocabulary::upload),
        )
        .route("/api/vocabulary/search", get(routes::vocabulary::search))
        // Session routes
        .route("/api/session", get(routes::session::current))
        .route("/api/session/start", post(routes::session::start))
        .route(
            "/api/session/review-mistakes",
            post(routes::session::review_mistakes),
        )
        .route("/api/session/reveal", post(routes::session::reveal))
        .route("/api/session/next", post(routes::session::next))
        .route("/api/session/difficulty", post(routes::session::difficulty))
        .route("/api/session/answer", post(routes::session::answer))
        .route("/api/session/mistakes", get(routes::session::mistakes))
        .route("/api/speech", get(routes::session::speech))
        // Settings routes
        .route(
            "/api/settings/direction",
            get(routes::settings::get_direction).put(routes::settings::set_direction),
        )
        // Stats routes
        .route("/api/stats", get(routes::stats::get))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let mut trainer = Trainer::new()
        .with_direction(config.direction)
        .with_match_options(config.match_options);

    if let Some(path) = &config.vocab_file {
        tracing::info!("Loading word list from {}...", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        let report = trainer.load(&content);
        tracing::info!(
            "Loaded {} words ({} lines skipped)",
            report.loaded,
            report.skipped
        );
    }

    let app = build_router(AppState::new(trainer)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
