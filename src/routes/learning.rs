use std::collections::HashSet;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::bkt::{Exercise, MasterySnapshot};
use crate::response::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub exercise_id: String,
    pub correct: bool,
    pub latency_ms: i64,
}

#[derive(Serialize)]
pub struct AnswerResponse {
    pub updated_mastery: MasterySnapshot,
}

#[derive(Debug, Default, Deserialize)]
pub struct NextExerciseRequest {
    #[serde(default)]
    pub exclude_ids: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct NextExerciseResponse {
    pub exercise: Exercise,
    pub reason: String,
    pub mastery: MasterySnapshot,
}

/// Submit an answer; the session lock covers the whole update.
pub async fn answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Response {
    let engine = state.engine();
    let session = state.session();
    let mut session = session.lock();

    match engine.record_answer(
        &mut session,
        &request.exercise_id,
        request.correct,
        request.latency_ms,
    ) {
        Ok(updated_mastery) => Json(AnswerResponse { updated_mastery }).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

/// Pick the next exercise for the current mastery table.
pub async fn next(
    State(state): State<AppState>,
    Json(request): Json<NextExerciseRequest>,
) -> Response {
    let exclude_ids: HashSet<String> = request
        .exclude_ids
        .unwrap_or_default()
        .into_iter()
        .collect();

    let engine = state.engine();
    let session = state.session();
    let mut session = session.lock();

    match engine.next_exercise(&mut session, &exclude_ids) {
        Ok(selection) => Json(NextExerciseResponse {
            exercise: selection.exercise,
            reason: selection.reason,
            mastery: selection.mastery,
        })
        .into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
