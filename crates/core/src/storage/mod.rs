pub mod kv;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_store;
pub mod watchlist_repo;
