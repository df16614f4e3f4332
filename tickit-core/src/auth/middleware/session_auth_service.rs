use super::session_auth_future::SessionAuthFuture;
use crate::auth::dto::User;
use anyhow::anyhow;
use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderValue},
    response::Response,
};
use bson::oid::ObjectId;
use jwt_auth::SessionTokens;
use std::task::{Context, Poll};
use tower::Service;

#[derive(Clone)]
pub struct SessionAuthService<S> {
    inner: S,
    session_tokens: SessionTokens,
}

impl<S> SessionAuthService<S> {
    pub fn new(inner: S, session_tokens: SessionTokens) -> Self {
        Self {
            inner,
            session_tokens,
        }
    }

    fn parse_authorization_header(
        &self,
        authorization_header: Option<&HeaderValue>,
    ) -> anyhow::Result<User> {
        let Some(authorization_header) = authorization_header else {
            return Err(anyhow!("missing Authorization header"));
        };
        let Ok(authorization_value) = authorization_header.to_str() else {
            return Err(anyhow!("illegal character in Authorization header"));
        };

        let parts = authorization_value.split(' ').collect::<Vec<_>>();
        let ["Bearer", token] = parts.as_slice() else {
            return Err(anyhow!("expected 'Bearer <token>' authorization"));
        };

        let user_id = self
            .session_tokens
            .validate(token)
            .map_err(|err| anyhow!("invalid token: {err}"))?;
        let user_id = ObjectId::parse_str(&user_id)
            .map_err(|err| anyhow!("invalid user id in token: {err}"))?;

        Ok(User::new(user_id))
    }
}

impl<S> Service<Request> for SessionAuthService<S>
where
    S: Service<Request, Response = Response>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = SessionAuthFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let authorization_header = req.headers().get(AUTHORIZATION);

        match self.parse_authorization_header(authorization_header) {
            Ok(user) => {
                // span that holds user information for the rest of the request
                let span = tracing::info_span!("user", id = %user.id);

                req.extensions_mut().insert(user);

                SessionAuthFuture::Authorized {
                    inner: self.inner.call(req),
                    span,
                }
            }
            Err(err) => {
                tracing::warn!(%err, "auth error");
                SessionAuthFuture::Unauthorized
            }
        }
    }
}
