use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use crate::bkt::{BktEngine, SessionState};

/// Shared application state.
///
/// The session mutex is the serialization point the core requires: every
/// handler locks it for the full read-then-write of a logical request, so two
/// interleaved answer submissions can never lose an update.
#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    engine: Arc<BktEngine>,
    session: Arc<Mutex<SessionState>>,
}

impl AppState {
    pub fn new(engine: BktEngine) -> Self {
        let session = engine.new_session();
        Self {
            started_at: Instant::now(),
            engine: Arc::new(engine),
            session: Arc::new(Mutex::new(session)),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn engine(&self) -> Arc<BktEngine> {
        Arc::clone(&self.engine)
    }

    pub fn session(&self) -> Arc<Mutex<SessionState>> {
        Arc::clone(&self.session)
    }
}
