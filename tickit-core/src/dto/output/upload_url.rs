use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UploadUrl {
    /// Presigned URL accepting single PUT request
    pub url: String,

    /// Object key to reference uploaded image
    pub key: String,
}
