// POST /api/therapists: support suggestions for the described needs.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct TherapistsRequest {
    pub needs: String,
}

pub async fn find_therapists(
    State(state): State<AppState>,
    Json(request): Json<TherapistsRequest>,
) -> Response {
    if request.needs.trim().is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "needs must not be empty");
    }

    let therapists = state.support.recommend(&request.needs).await;
    Json(serde_json::json!({ "therapists": therapists })).into_response()
}
