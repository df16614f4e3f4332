use crate::{dto::output, error::Error};

#[cfg_attr(test, mockall::automock)]
pub trait UploadsService: Send + Sync {
    ///
    /// Create URL that lets client upload image directly to the object store.
    /// Every call generates new random object key.
    ///
    fn create_upload_url(&self) -> Result<output::UploadUrl, Error>;
}
