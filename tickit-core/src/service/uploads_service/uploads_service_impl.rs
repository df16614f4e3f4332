use super::UploadsService;
use crate::{dto::output, error::Error, service::StorageService};
use std::sync::Arc;
use uuid::Uuid;

pub struct UploadsServiceImpl {
    storage_service: Arc<dyn StorageService>,
}

impl UploadsServiceImpl {
    pub fn new(storage_service: Arc<dyn StorageService>) -> Self {
        Self { storage_service }
    }
}

impl UploadsService for UploadsServiceImpl {
    fn create_upload_url(&self) -> Result<output::UploadUrl, Error> {
        let key = Uuid::new_v4().to_string();
        tracing::info!(key, "creating upload url");

        let url = self.storage_service.presign_upload(&key)?;

        Ok(output::UploadUrl { url, key })
    }
}
