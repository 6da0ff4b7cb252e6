pub mod auth;
pub mod error;
pub mod generation;
pub mod properties;
pub mod routes;
pub mod session;

use std::sync::Arc;

use hearth_llm::GenerationService;
use hearth_store::MemStore;
use hearth_store::sessions::SessionStore;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: MemStore,
    pub sessions: Arc<SessionStore>,
    pub generation: GenerationService,
}
