mod dir;
mod memory;

pub use dir::DirStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;

pub const ORDERS_KEY: &str = "orders";
pub const SUPPLIERS_KEY: &str = "suppliers";
pub const ARTICLES_KEY: &str = "articles";
pub const COUNTER_KEY: &str = "order_counter";

/// String-keyed storage holding one JSON document per key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read and decode a key. Read and decode failures are logged and reported
/// as absent.
pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "storage read failed, treating as absent");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "stored data has unexpected shape, treating as absent");
            None
        }
    }
}

pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let content = serde_json::to_string_pretty(value)?;
    store.set(key, &content)
}
