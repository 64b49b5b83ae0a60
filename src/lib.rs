//! BirdBrain backend: a Duolingo-style exercise picker.
//!
//! The `bkt` module is the core (latency adjustment, mastery updates,
//! selection, explanations); everything else is the HTTP host around it.

pub mod bkt;
pub mod config;
pub mod logging;
pub mod response;
pub mod routes;
pub mod seed;
pub mod state;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::bkt::{BktConfig, BktEngine};
use crate::state::AppState;

pub fn create_app() -> axum::Router {
    let engine = BktEngine::new(BktConfig::from_env(), seed::load_pool());
    let state = AppState::new(engine);

    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
