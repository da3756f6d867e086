use crate::infrastructure::model::ModelProvider;
use std::sync::Arc;

pub(crate) struct ServerState<P: ModelProvider> {
    provider: Arc<P>,
}

impl<P: ModelProvider> ServerState<P> {
    pub(crate) fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub(crate) fn provider(&self) -> Arc<P> {
        Arc::clone(&self.provider)
    }
}
