//! Shared repository constructor for all platforms.
//!
//! Returns a [`store::ProductRepository`] backed by the appropriate [`store::ProductStorage`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): a JSON file via [`store::FileStore`]
//! - **WASM without `web`**: one [`store::MemoryStore`] shared for the session, nothing survives a reload

use store::InventoryConfig;

/// Configuration for this platform.
///
/// Desktop reads `inventory.toml` from the data directory; the web build has
/// no file to read and uses the defaults.
pub fn load_config() -> InventoryConfig {
    #[cfg(target_arch = "wasm32")]
    {
        InventoryConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        InventoryConfig::load_from_dir(&data_dir())
    }
}

/// Create a platform-appropriate repository.
pub fn make_repo() -> store::ProductRepository<impl store::ProductStorage> {
    let config = load_config();
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::ProductRepository::new(store::LocalStorageStore::with_key(&config.storage.key))
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let _ = config;
        store::ProductRepository::new(session_store())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::ProductRepository::new(store::FileStore::new(&data_dir(), &config.storage.key))
    }
}

/// `<data_dir>/inventory`, or `./inventory` when the platform has none.
#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("inventory")
}

#[cfg(any(test, all(target_arch = "wasm32", not(feature = "web"))))]
thread_local! {
    static SESSION_STORE: store::MemoryStore = store::MemoryStore::new();
}

/// Handle to the in-memory list kept for the lifetime of the page.
#[cfg(any(test, all(target_arch = "wasm32", not(feature = "web"))))]
fn session_store() -> store::MemoryStore {
    SESSION_STORE.with(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use store::{Product, ProductRepository, Unit};

    #[test]
    fn test_session_store_is_shared_between_repositories() {
        let product = Product {
            id: "s-1".to_string(),
            name: "Rice".to_string(),
            unit: Unit::Kilograms,
            price: "7,50".to_string(),
            quantity: "5".to_string(),
            manufacturing_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            perishable: false,
            expiration_date: None,
        };
        ProductRepository::new(session_store()).add(product.clone()).unwrap();

        let other = ProductRepository::new(session_store());
        assert_eq!(other.get_by_id("s-1"), Some(product));
    }
}
