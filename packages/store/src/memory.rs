use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StoreError;
use crate::models::Product;
use crate::repo::{decode_products, encode_products, ProductStorage};

/// In-memory ProductStorage for testing and as a fallback backend.
///
/// Keeps the serialized list exactly as a real key/value store would, so the
/// stored representation can be compared byte for byte.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    raw: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already serialized value, as if read from storage.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// The stored string, `None` if nothing was ever written.
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl ProductStorage for MemoryStore {
    fn load(&self) -> Vec<Product> {
        decode_products(self.raw().as_deref())
    }

    fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        let encoded = encode_products(products)?;
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = Some(encoded);
        Ok(())
    }
}
