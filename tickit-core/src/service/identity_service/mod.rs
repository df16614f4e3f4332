mod error;
mod id_token;
mod identity_service;
mod kakao_identity_service;

pub use error::*;
pub use id_token::*;
pub use identity_service::*;
pub use kakao_identity_service::*;
