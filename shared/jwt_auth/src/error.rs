#[derive(Debug, thiserror::Error)]
#[error("failed to sign token: {0}")]
pub struct IssueError(#[from] pub jsonwebtoken::errors::Error);

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token expired")]
    Expired,

    #[error("malformed token: {0}")]
    Malformed(jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for ValidationError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::InvalidSignature => ValidationError::InvalidSignature,
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => ValidationError::Expired,
            _ => ValidationError::Malformed(err),
        }
    }
}
