use super::{
    dto::{Ticket, TicketContent, TicketPreview},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts new ticket owned by the user.
    ///
    async fn insert(
        &self,
        user_id: ObjectId,
        content: TicketContent,
        created_at: OffsetDateTime,
    ) -> Result<Ticket, Error>;

    ///
    /// Finds ticket with id that belongs to the user
    ///
    async fn find(&self, id: ObjectId, user_id: ObjectId) -> Result<Option<Ticket>, Error>;

    ///
    /// Finds previews of all user's tickets.
    /// Previews are sorted descending by creation date.
    ///
    async fn find_many_previews(&self, user_id: ObjectId) -> Result<Vec<TicketPreview>, Error>;

    ///
    /// Replaces content of the ticket.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - ticket does not exist
    ///     - ticket does not belong to the user
    ///
    async fn update(
        &self,
        id: ObjectId,
        user_id: ObjectId,
        content: TicketContent,
    ) -> Result<(), Error>;

    ///
    /// Deletes ticket.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - ticket does not exist
    ///     - ticket does not belong to the user
    ///
    async fn delete(&self, id: ObjectId, user_id: ObjectId) -> Result<(), Error>;
}
