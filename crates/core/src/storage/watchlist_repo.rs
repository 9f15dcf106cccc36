use crate::errors::CoreError;
use crate::models::watchlist::Watchlist;

use super::kv::KeyValueStore;

/// Storage key of the persisted watchlist.
pub const WATCHLIST_KEY: &str = "watchlist";

/// Load/save the watchlist as one JSON array under [`WATCHLIST_KEY`].
pub struct WatchlistRepository;

impl WatchlistRepository {
    /// Read the watchlist once at startup.
    ///
    /// A missing key means an empty watchlist. So does an unreadable blob:
    /// the error is logged and the next toggle overwrites the bad value.
    pub fn load(store: &dyn KeyValueStore) -> Watchlist {
        match Self::try_load(store) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(kind = %e.kind(), error = %e, "discarding unreadable watchlist");
                Watchlist::new()
            }
        }
    }

    /// Strict variant of [`load`](Self::load) that reports unreadable data.
    pub fn try_load(store: &dyn KeyValueStore) -> Result<Watchlist, CoreError> {
        match store.get(WATCHLIST_KEY)? {
            None => Ok(Watchlist::new()),
            Some(blob) => serde_json::from_str(&blob).map_err(|e| {
                CoreError::Deserialization(format!("Failed to deserialize watchlist: {e}"))
            }),
        }
    }

    /// Overwrite the stored watchlist with `list`.
    pub fn save(store: &dyn KeyValueStore, list: &Watchlist) -> Result<(), CoreError> {
        let blob = serde_json::to_string(list)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize watchlist: {e}")))?;
        store.set(WATCHLIST_KEY, &blob)
    }
}
