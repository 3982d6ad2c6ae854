//! # Filesystem-backed product store
//!
//! [`FileStore`] is a [`ProductStorage`] implementation that keeps the product
//! list in a single JSON file. It is used on desktop, where there is no browser
//! `localStorage`, and writes exactly what the web build writes under its
//! storage key.
//!
//! ## Layout
//!
//! ```text
//! <data_dir>/inventory/
//! ├── products.json      # JSON array of products
//! └── inventory.toml     # optional configuration
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/inventory/` |
//! | Linux | `~/.local/share/inventory/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\inventory\` |

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::StoreError;
use crate::models::Product;
use crate::repo::{decode_products, encode_products, ProductStorage};

/// Filesystem-backed ProductStorage for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store the list at `<base>/<key>.json`.
    pub fn new(base: &Path, key: &str) -> Self {
        Self {
            path: base.join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductStorage for FileStore {
    fn load(&self) -> Vec<Product> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => decode_products(Some(&raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!("failed to read {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        let encoded = encode_products(products)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, encoded)?;
        Ok(())
    }
}
