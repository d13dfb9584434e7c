use std::sync::Arc;

use tokio::sync::Mutex;

use crate::clock::Clock;
use crate::store::PageStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<PageStore>>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: PageStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            clock,
        }
    }
}
