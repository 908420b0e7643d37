use crate::config::ServerConfig;
use chrono::{DateTime, Utc};
use notable_storage::NoteStore;
use std::sync::Arc;

/// Shared handles injected into every request handler. The store is the only
/// shared mutable resource; the database enforces all invariants atomically.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<NoteStore>,
    pub start_time: DateTime<Utc>,
    pub config: Arc<ServerConfig>,
}
