// GET /api/alerts: recent alerts (newest first) with origins and stats.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::web::AppState;

pub async fn list_alerts(State(state): State<AppState>) -> impl IntoResponse {
    let feed = state.feed.read().await;
    let alerts: Vec<_> = feed.recent().cloned().collect();

    Json(serde_json::json!({
        "alerts": alerts,
        "stats": feed.stats(),
    }))
}
