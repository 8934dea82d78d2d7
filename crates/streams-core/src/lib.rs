pub mod auth;
pub mod channel;
pub mod channels;
pub mod dm;
pub mod error;
pub mod message;
pub mod models;
pub mod store;

#[cfg(test)]
mod testing;

use std::sync::Mutex;

pub use error::{StreamsError, StreamsResult};
pub use store::Store;

/// Process-wide handle to the store. Every request runs under the one lock,
/// so an operation always sees and leaves a consistent store.
pub struct DataStore {
    store: Mutex<Store>,
}

impl DataStore {
    pub fn new(store: Store) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    pub fn with_store<F, T>(&self, f: F) -> StreamsResult<T>
    where
        F: FnOnce(&Store) -> StreamsResult<T>,
    {
        let store = self
            .store
            .lock()
            .map_err(|e| anyhow::anyhow!("Store lock poisoned: {}", e))?;
        f(&store)
    }

    pub fn with_store_mut<F, T>(&self, f: F) -> StreamsResult<T>
    where
        F: FnOnce(&mut Store) -> StreamsResult<T>,
    {
        let mut store = self
            .store
            .lock()
            .map_err(|e| anyhow::anyhow!("Store lock poisoned: {}", e))?;
        f(&mut store)
    }
}
