use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct ResetResponse {
    pub message: &'static str,
}

pub async fn reset(State(state): State<AppState>) -> Json<ResetResponse> {
    let engine = state.engine();
    let session = state.session();
    let mut session = session.lock();
    engine.reset(&mut session);

    Json(ResetResponse {
        message: "Session reset successfully",
    })
}
