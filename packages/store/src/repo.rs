//! # Repository: product CRUD over an abstract key/value store
//!
//! [`ProductRepository`] is the storage layer of the inventory. It keeps every
//! product in a single serialized list behind one storage key and provides
//! list/get/add/update/delete on top of it. All reads and writes go through the
//! [`ProductStorage`] trait, so the same logic works against browser
//! `localStorage` ([`crate::LocalStorageStore`]), a JSON file on desktop
//! ([`crate::FileStore`]) or memory ([`crate::MemoryStore`]).
//!
//! ## [`ProductStorage`] trait
//!
//! Two methods: `load` returns the whole list (empty when the key is absent or
//! unreadable) and `save` overwrites it. There is no partial write.
//!
//! ## Operations
//!
//! Every operation loads the full list, scans or mutates it in memory and, for
//! writes, saves the full list back.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`list_all`](ProductRepository::list_all) | All products in insertion order. |
//! | [`get_by_id`](ProductRepository::get_by_id) | First product with the given id. |
//! | [`add`](ProductRepository::add) | Appends a product; rejects an id that is already stored. |
//! | [`update`](ProductRepository::update) | Replaces every product with the given id. Returns `false` without writing when none matches. |
//! | [`delete`](ProductRepository::delete) | Removes every product with the given id. Returns `false` without writing when none matches. |
//!
//! ## Concurrency
//!
//! None. Read-modify-write is not atomic; two writers on the same key race and
//! the last save wins. This is acceptable for a single browser tab holding a
//! handful of records.

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::models::Product;

/// Load/save boundary to the key/value store holding the product list.
pub trait ProductStorage {
    /// Read the stored list. Absent or unparseable data yields an empty list.
    fn load(&self) -> Vec<Product>;

    /// Overwrite the stored list.
    fn save(&self, products: &[Product]) -> Result<(), StoreError>;
}

impl<S: ProductStorage + ?Sized> ProductStorage for &S {
    fn load(&self) -> Vec<Product> {
        (**self).load()
    }

    fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        (**self).save(products)
    }
}

/// Decode a stored list. Missing or corrupt data degrades to an empty list.
pub(crate) fn decode_products(raw: Option<&str>) -> Vec<Product> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(products) => products,
        Err(e) => {
            warn!("stored product list is unreadable, starting empty: {e}");
            Vec::new()
        }
    }
}

pub(crate) fn encode_products(products: &[Product]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(products)?)
}

/// Product list backed by a ProductStorage.
pub struct ProductRepository<S: ProductStorage> {
    store: S,
}

impl<S: ProductStorage> ProductRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_all(&self) -> Vec<Product> {
        self.store.load()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Product> {
        self.store.load().into_iter().find(|p| p.id == id)
    }

    /// Append a new product.
    pub fn add(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self.store.load();
        if products.iter().any(|p| p.id == product.id) {
            return Err(StoreError::DuplicateId(product.id));
        }
        debug!(id = %product.id, name = %product.name, "adding product");
        products.push(product);
        self.store.save(&products)
    }

    /// Replace every product whose id equals `id` with `product`.
    pub fn update(&self, id: &str, product: Product) -> Result<bool, StoreError> {
        let mut products = self.store.load();
        let mut replaced = false;
        for slot in products.iter_mut().filter(|p| p.id == id) {
            *slot = product.clone();
            replaced = true;
        }
        if !replaced {
            debug!(%id, "update skipped, no product with this id");
            return Ok(false);
        }
        debug!(%id, "updating product");
        self.store.save(&products)?;
        Ok(true)
    }

    /// Remove every product whose id equals `id`.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut products = self.store.load();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            debug!(%id, "delete skipped, no product with this id");
            return Ok(false);
        }
        debug!(%id, removed = before - products.len(), "deleting product");
        self.store.save(&products)?;
        Ok(true)
    }
}
