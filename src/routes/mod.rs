mod exercises;
mod health;
mod learning;
mod session;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/session/reset", post(session::reset))
        .route("/exercises", get(exercises::list))
        .route("/answer", post(learning::answer))
        .route("/next", post(learning::next))
        .with_state(state)
}
