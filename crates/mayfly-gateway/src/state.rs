use mayfly_generator::RandomGenerator;
use mayfly_shortener::LinkStore;
use mayfly_storage::InMemoryBackend;
use std::sync::Arc;

/// The concrete store wiring used by the gateway.
pub type GatewayStore = LinkStore<InMemoryBackend, RandomGenerator>;

#[derive(Clone)]
pub struct AppState {
    store: Arc<GatewayStore>,
    base_url: String,
}

impl AppState {
    pub fn new(store: Arc<GatewayStore>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: public_base_url.into(),
        }
    }

    pub fn store(&self) -> &GatewayStore {
        &self.store
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
