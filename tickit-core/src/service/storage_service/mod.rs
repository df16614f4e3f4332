mod error;
mod s3_storage_service;
mod storage_service;

pub use error::*;
pub use s3_storage_service::*;
pub use storage_service::*;
