//! # Application configuration: `inventory.toml`
//!
//! Defines the optional TOML file read at startup on desktop (filename:
//! [`InventoryConfig::filename`] = `"inventory.toml"`, next to the product
//! list in the data directory). The web build has no file to read and always
//! runs with [`InventoryConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! key = "products"        # storage key / file stem holding the product list
//!
//! [list]
//! page_size = 10          # rows per page in the product table
//!
//! [display]
//! currency_symbol = "R$"  # prefix shown before prices
//! ```
//!
//! Every section and field is optional. A missing file, or a file that does not
//! parse, is equivalent to the default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Top-level configuration stored in `inventory.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key holding the serialized product list.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Rows per table page. 0 is treated as 1.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_storage_key() -> String {
    "products".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl InventoryConfig {
    /// Builder method to set the table page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.list.page_size = page_size;
        self
    }

    /// Builder method to set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage.key = key.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "inventory.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `inventory.toml` from `dir`, falling back to the default.
    pub fn load_from_dir(dir: &Path) -> Self {
        let path = dir.join(Self::filename());
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match Self::from_toml(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring invalid {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Page size clamped to at least one row.
    pub fn page_size(&self) -> usize {
        self.list.page_size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = InventoryConfig::from_toml("").unwrap();
        assert_eq!(config, InventoryConfig::default());
        assert_eq!(config.storage.key, "products");
        assert_eq!(config.page_size(), 10);
        assert_eq!(config.display.currency_symbol, "R$");
    }

    #[test]
    fn test_partial_sections() {
        let config = InventoryConfig::from_toml("[list]\npage_size = 25\n").unwrap();
        assert_eq!(config.page_size(), 25);
        assert_eq!(config.storage.key, "products");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = InventoryConfig::default()
            .with_page_size(5)
            .with_storage_key("stock");
        let text = config.to_toml().unwrap();
        assert_eq!(InventoryConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(InventoryConfig::default().with_page_size(0).page_size(), 1);
    }

    #[test]
    fn test_load_from_dir_falls_back_on_bad_file() {
        let dir = std::env::temp_dir().join(format!("inventory_config_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        assert_eq!(InventoryConfig::load_from_dir(&dir), InventoryConfig::default());

        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("inventory.toml"), "[list\npage_size =").unwrap();
        assert_eq!(InventoryConfig::load_from_dir(&dir), InventoryConfig::default());

        std::fs::write(dir.join("inventory.toml"), "[storage]\nkey = \"stock\"\n").unwrap();
        assert_eq!(InventoryConfig::load_from_dir(&dir).storage.key, "stock");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
