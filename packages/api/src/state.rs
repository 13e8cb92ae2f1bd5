use std::sync::Arc;

use crate::backend::DynModelBackend;

pub type AppState = Arc<State>;

/// Shared request-handling state: the configured model backend.
pub struct State {
    pub backend: DynModelBackend,
}

impl State {
    pub fn new(backend: DynModelBackend) -> Self {
        Self { backend }
    }
}
