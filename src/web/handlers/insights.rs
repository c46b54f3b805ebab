// POST /api/insights: insights for the posted weekly progress scores.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::support::progress::ProgressData;
use crate::web::AppState;

pub async fn progress_insights(
    State(state): State<AppState>,
    Json(data): Json<ProgressData>,
) -> impl IntoResponse {
    let insights = state.progress.insights(&data).await;
    Json(serde_json::json!({ "insights": insights }))
}
