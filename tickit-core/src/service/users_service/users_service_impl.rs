use super::UsersService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, UsersRepository},
    service::{decode_subject, IdentityService},
};
use axum::async_trait;
use bson::oid::ObjectId;
use jwt_auth::SessionTokens;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct UsersServiceImpl {
    session_tokens: SessionTokens,
    identity_service: Arc<dyn IdentityService>,
    repository: Arc<dyn UsersRepository>,
}

impl UsersServiceImpl {
    pub fn new(
        session_tokens: SessionTokens,
        identity_service: Arc<dyn IdentityService>,
        repository: Arc<dyn UsersRepository>,
    ) -> Self {
        Self {
            session_tokens,
            identity_service,
            repository,
        }
    }

    async fn start_session(&self, user_id: ObjectId) -> Result<output::Tokens, Error> {
        let id = user_id.to_hex();

        let access_token = self.session_tokens.issue_access(&id)?;
        let (refresh_token, expire_at) = self.session_tokens.issue_refresh(&id)?;

        self.repository
            .save_refresh_token(user_id, &refresh_token, expire_at)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::UserNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!(id, "started session");

        Ok(output::Tokens {
            access_token,
            refresh_token,
        })
    }
}

#[async_trait]
impl UsersService for UsersServiceImpl {
    async fn register(&self, tokens: input::OAuthTokens) -> Result<output::Tokens, Error> {
        tracing::info!("registering user");

        let oauth_id = decode_subject(&tokens.id_token)?;
        tracing::info!(oauth_id, "decoded identity token");

        let profile = self
            .identity_service
            .fetch_profile(&tokens.access_token)
            .await?;

        if self.repository.find_by_oauth_id(&oauth_id).await?.is_some() {
            return Err(Error::UserAlreadyRegistered);
        }

        let user = self
            .repository
            .insert(&oauth_id, &profile.nick_name)
            .await
            .map_err(|err| match err {
                repository::Error::InsertUniqueViolation => Error::UserAlreadyRegistered,
                err => Error::Database(err),
            })?;

        let id = user.id.to_hex();
        tracing::info!(id, "registered user");

        self.start_session(user.id).await
    }

    async fn login(&self, tokens: input::OAuthTokens) -> Result<output::Tokens, Error> {
        tracing::info!("logging in user");

        let oauth_id = decode_subject(&tokens.id_token)?;
        tracing::info!(oauth_id, "decoded identity token");

        let user = self
            .repository
            .find_by_oauth_id(&oauth_id)
            .await?
            .ok_or(Error::UserNotExist)?;

        self.start_session(user.id).await
    }

    async fn refresh(&self, refresh_token: input::RefreshToken) -> Result<output::Tokens, Error> {
        tracing::info!("refreshing session");

        let refresh_token = refresh_token.refresh_token;
        let user_id = self
            .session_tokens
            .validate(&refresh_token)
            .map_err(|err| {
                tracing::info!(%err, "refresh token rejected");
                Error::Unauthenticated("refresh token not valid")
            })?;
        let user_id = ObjectId::parse_str(&user_id)
            .map_err(|_| Error::Unauthenticated("refresh token subject is not user id"))?;

        let user = self
            .repository
            .find(user_id)
            .await?
            .ok_or(Error::Unauthenticated("refresh token owner does not exist"))?;

        if user.refresh_token.as_deref() != Some(refresh_token.as_str()) {
            return Err(Error::Unauthenticated("refresh token was replaced"));
        }
        match user.token_expiry {
            Some(expiry) if expiry > OffsetDateTime::now_utc() => {}
            _ => return Err(Error::Unauthenticated("refresh token expired")),
        }

        let access_token = self.session_tokens.issue_access(&user_id.to_hex())?;
        tracing::info!("refreshed session");

        Ok(output::Tokens {
            access_token,
            refresh_token,
        })
    }

    async fn logout(&self, user_id: ObjectId) -> Result<(), Error> {
        tracing::info!("logging out user");

        self.repository
            .remove_refresh_token(user_id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::UserNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("logged out user");

        Ok(())
    }

    async fn withdraw(&self, user_id: ObjectId) -> Result<(), Error> {
        tracing::info!("withdrawing user");

        self.repository
            .delete(user_id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::UserNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("withdrew user");

        Ok(())
    }

    async fn find_profile(&self, user_id: ObjectId) -> Result<output::Profile, Error> {
        tracing::info!("finding profile");

        let user = self
            .repository
            .find(user_id)
            .await?
            .ok_or(Error::UserNotExist)?;

        Ok(output::Profile {
            nick_name: user.name,
        })
    }
}
