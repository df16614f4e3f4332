use super::session_auth_service::SessionAuthService;
use jwt_auth::SessionTokens;
use tower::Layer;

///
/// Rejects requests without valid access token
/// and attaches [crate::auth::User] to the others.
///
#[derive(Clone)]
pub struct SessionAuthLayer {
    session_tokens: SessionTokens,
}

impl SessionAuthLayer {
    pub fn new(session_tokens: SessionTokens) -> Self {
        Self { session_tokens }
    }
}

impl<S> Layer<S> for SessionAuthLayer {
    type Service = SessionAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SessionAuthService::new(inner, self.session_tokens.clone())
    }
}
