use super::{dto::User, error::Error};
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Inserts new user without refresh token.
    ///
    /// ### Errors
    /// - [Error::InsertUniqueViolation] when user with oauth_id already exists
    ///
    async fn insert(&self, oauth_id: &str, name: &str) -> Result<User, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<User>, Error>;

    async fn find_by_oauth_id(&self, oauth_id: &str) -> Result<Option<User>, Error>;

    ///
    /// Stores refresh token together with its expiration instant.
    /// Previously stored token is overwritten.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when user does not exist
    ///
    async fn save_refresh_token(
        &self,
        id: ObjectId,
        refresh_token: &str,
        token_expiry: OffsetDateTime,
    ) -> Result<(), Error>;

    ///
    /// Removes stored refresh token.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when user does not exist
    ///
    async fn remove_refresh_token(&self, id: ObjectId) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when user does not exist
    ///
    async fn delete(&self, id: ObjectId) -> Result<(), Error>;
}
