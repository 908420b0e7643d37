/// Errors that can occur within the storage layer.
///
/// # Examples
///
/// ```rust
/// use notable_storage::error::StorageError;
///
/// let err = StorageError::Conflict {
///     entity: "user",
///     field: "username",
/// };
/// assert!(err.to_string().contains("username"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// An insert violated a uniqueness constraint (duplicate username).
    #[error("Storage: {entity} with the same {field} already exists")]
    Conflict {
        entity: &'static str,
        field: &'static str,
    },

    /// Password hashing or verification failure.
    #[error("Storage: bcrypt error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// An underlying database error.
    #[error("Storage: database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

/// Convenience `Result` alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
