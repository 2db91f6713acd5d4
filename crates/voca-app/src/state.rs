use std::sync::Arc;

use tokio::sync::RwLock;
use voca_config::Config;
use voca_core::session::{DeleteConfirmations, SessionState};

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Pending analysis staging for this session
    pub session: RwLock<SessionState>,
    /// Per-row delete confirmation flags, positional at render time
    pub deletes: RwLock<DeleteConfirmations>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            session: RwLock::new(SessionState::default()),
            deletes: RwLock::new(DeleteConfirmations::default()),
        }
    }
}
