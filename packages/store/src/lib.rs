pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod repo;
pub mod validation;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::InventoryConfig;
pub use error::StoreError;
pub use models::{Product, Unit};
pub use repo::{ProductRepository, ProductStorage};
pub use validation::{Field, FieldError, ProductDraft, ProductValidator, ValidationErrors};
