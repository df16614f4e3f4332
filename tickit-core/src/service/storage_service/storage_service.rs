use super::StorageError;

#[cfg_attr(test, mockall::automock)]
pub trait StorageService: Send + Sync {
    ///
    /// Create URL allowing anyone who has it to upload object with the key
    /// until [UPLOAD_URL_LIFESPAN](super::UPLOAD_URL_LIFESPAN) passes.
    ///
    fn presign_upload(&self, key: &str) -> Result<String, StorageError>;
}
