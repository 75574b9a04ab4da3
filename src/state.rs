//! Shared application state for all routes.

use crate::store::RecordStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: RecordStore,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}
