use super::IdentityError;
use axum::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityProfile {
    pub nick_name: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityService: Send + Sync {
    ///
    /// Fetch profile of the user owning OAuth access token
    ///
    /// ### Errors
    /// - [IdentityError::UpstreamUnreachable] when request could not be sent
    /// - [IdentityError::UpstreamStatus] when provider rejected the request
    /// - [IdentityError::Parse] when response body is not a profile
    /// - [IdentityError::MissingField] when profile has empty nickname
    ///
    async fn fetch_profile(&self, access_token: &str) -> Result<IdentityProfile, IdentityError>;
}
