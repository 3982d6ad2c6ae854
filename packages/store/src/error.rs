use thiserror::Error;

/// Failure writing the product list to its backing store.
///
/// Reads never fail: a missing or corrupt list loads as empty.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize products: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The browser refused the write (quota exceeded, storage disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("a product with id {0} already exists")]
    DuplicateId(String),
}
