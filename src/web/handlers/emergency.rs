// POST /api/emergency: yes/no emergency verdict for one chat message.
//
// Always 200. Blank messages and failed checks both read as false.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::web::AppState;

#[derive(Deserialize)]
pub struct EmergencyRequest {
    pub message: String,
}

pub async fn check_emergency(
    State(state): State<AppState>,
    Json(request): Json<EmergencyRequest>,
) -> impl IntoResponse {
    let emergency = state.emergency.is_emergency(&request.message).await;
    Json(serde_json::json!({ "emergency": emergency }))
}
