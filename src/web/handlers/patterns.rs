// GET /api/patterns: current pattern summary plus the chart series.
//
// `patterns` is null until the feed has held three alerts.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::patterns::local::severity_series;
use crate::web::AppState;

pub async fn get_patterns(State(state): State<AppState>) -> impl IntoResponse {
    let feed = state.feed.read().await;

    Json(serde_json::json!({
        "patterns": feed.patterns(),
        "series": severity_series(&feed.alerts()),
    }))
}
