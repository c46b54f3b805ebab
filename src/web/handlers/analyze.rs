// POST /api/analyze: run one submission through the monitoring pipeline.
//
// Always 200. `alert` is null when the content was empty or analysis
// failed; otherwise the alert has already been recorded in the feed.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::pipeline::monitor::DEFAULT_CONTEXT;
use crate::web::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
    pub context: Option<String>,
}

pub async fn analyze_content(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let context = request.context.as_deref().unwrap_or(DEFAULT_CONTEXT);
    let alert = state
        .pipeline
        .submit(&state.feed, &request.content, context)
        .await;

    Json(serde_json::json!({ "alert": alert }))
}
