use std::sync::Arc;

use roster_states::State;

use crate::{EhttpFetcher, FetchService};

/// The fetch backend commands use for network IO.
#[derive(Debug, Clone)]
pub struct FetchState {
    inner: Arc<dyn FetchService>,
}

impl FetchState {
    pub fn new(service: impl FetchService + 'static) -> Self {
        Self {
            inner: Arc::new(service),
        }
    }

    pub fn from_arc(service: Arc<dyn FetchService>) -> Self {
        Self { inner: service }
    }

    pub fn service(&self) -> Arc<dyn FetchService> {
        Arc::clone(&self.inner)
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new(EhttpFetcher)
    }
}

impl State for FetchState {}
