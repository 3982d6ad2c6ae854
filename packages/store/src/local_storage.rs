//! # localStorage product store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`ProductStorage`] implementation used on the
//! **web platform**. The whole product list lives under a single
//! `window.localStorage` key as a JSON array; the key comes from
//! `[storage] key` in [`crate::InventoryConfig`].
//!
//! ## Error handling
//!
//! Reads never fail: no window, no storage, an absent key or a value that does
//! not parse all load as an empty list, so a corrupted store degrades to "no
//! products" rather than crashing. Writes surface the browser's refusal
//! (usually a quota error) as [`StoreError::Unavailable`].

use tracing::warn;
use web_sys::Storage;

use crate::error::StoreError;
use crate::models::Product;
use crate::repo::{decode_products, encode_products, ProductStorage};

/// localStorage-backed ProductStorage for web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl ProductStorage for LocalStorageStore {
    fn load(&self) -> Vec<Product> {
        let Some(storage) = Self::storage() else {
            warn!("localStorage is not available");
            return Vec::new();
        };
        let raw = storage.get_item(&self.key).ok().flatten();
        decode_products(raw.as_deref())
    }

    fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        let storage = Self::storage()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_string()))?;
        let encoded = encode_products(products)?;
        storage
            .set_item(&self.key, &encoded)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
