use axum::extract::State;
use axum::Json;

use crate::bkt::Exercise;
use crate::state::AppState;

/// Full pool dump, kept as a debugging aid.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Exercise>> {
    Json(state.engine().pool().to_vec())
}
