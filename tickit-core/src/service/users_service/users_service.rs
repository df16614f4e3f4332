use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersService: Send + Sync {
    ///
    /// Register user identified by OAuth tokens and start the session.
    ///
    /// ### Errors
    /// - [Error::Identity] when identity token or provider profile is not usable
    /// - [Error::UserAlreadyRegistered] when subject is already registered
    ///
    async fn register(&self, tokens: input::OAuthTokens) -> Result<output::Tokens, Error>;

    ///
    /// Start new session of registered user.
    /// Refresh token of the previous session stops working.
    ///
    /// ### Errors
    /// - [Error::Identity] when identity token is not usable
    /// - [Error::UserNotExist] when subject is not registered
    ///
    async fn login(&self, tokens: input::OAuthTokens) -> Result<output::Tokens, Error>;

    ///
    /// Exchange refresh token for new access token.
    /// Returned refresh token is the same as the presented one.
    ///
    /// ### Errors
    /// - [Error::Unauthenticated] when
    ///     - token is not valid session token
    ///     - token is not the one stored for its user
    ///     - stored token expired
    ///     - user does not exist
    ///
    async fn refresh(&self, refresh_token: input::RefreshToken) -> Result<output::Tokens, Error>;

    ///
    /// End session. Stored refresh token is forgotten.
    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user does not exist
    ///
    async fn logout(&self, user_id: ObjectId) -> Result<(), Error>;

    ///
    /// Delete user account.
    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user does not exist
    ///
    async fn withdraw(&self, user_id: ObjectId) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::UserNotExist] when user does not exist
    ///
    async fn find_profile(&self, user_id: ObjectId) -> Result<output::Profile, Error>;
}
