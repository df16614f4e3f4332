#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to format signing date: {0}")]
    DateFormat(#[from] time::error::Format),

    #[error("signing key rejected")]
    SigningKey,
}
