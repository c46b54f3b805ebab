// Web server: Axum-based JSON API for the monitoring dashboard.
//
// The dashboard front end polls these routes; there are no sessions and
// nothing is persisted. With --simulate, the synthetic alert timer runs for
// exactly as long as the server does.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analysis::emergency::EmergencyDetector;
use crate::config::Config;
use crate::feed::simulation::{start_simulation, SyntheticAlertSource};
use crate::feed::{MonitoringFeed, SharedFeed};
use crate::pipeline::monitor::MonitoringPipeline;
use crate::support::progress::ProgressAdvisor;
use crate::support::therapists::SupportMatcher;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub feed: SharedFeed,
    pub pipeline: Arc<MonitoringPipeline>,
    pub support: Arc<SupportMatcher>,
    pub emergency: Arc<EmergencyDetector>,
    pub progress: Arc<ProgressAdvisor>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let generator = config.generator();
        Self {
            feed: MonitoringFeed::shared(),
            pipeline: Arc::new(MonitoringPipeline::new(generator.clone(), &config.model)),
            support: Arc::new(SupportMatcher::new(generator.clone(), &config.model)),
            emergency: Arc::new(EmergencyDetector::new(generator.clone(), &config.model)),
            progress: Arc::new(ProgressAdvisor::new(generator, &config.model)),
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, port: u16, bind: &str, simulate: bool) -> Result<()> {
    let state = AppState::new(&config);

    // Held until the server returns; dropping it stops the timer.
    let _simulation = simulate.then(|| {
        start_simulation(
            state.feed.clone(),
            config.alert_interval,
            SyntheticAlertSource::from_entropy(),
        )
    });

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("MindfulAI monitor listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(handlers::analyze::analyze_content))
        .route("/api/alerts", get(handlers::alerts::list_alerts))
        .route("/api/patterns", get(handlers::patterns::get_patterns))
        .route("/api/therapists", post(handlers::therapists::find_therapists))
        .route("/api/emergency", post(handlers::emergency::check_emergency))
        .route("/api/insights", post(handlers::insights::progress_insights))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check: always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
