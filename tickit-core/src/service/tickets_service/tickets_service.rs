use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Save new ticket of the user.
    /// Empty colors are replaced with defaults.
    ///
    /// ### Errors
    /// - [Error::Validation] when date or time has invalid format
    ///
    async fn create_ticket(
        &self,
        user_id: ObjectId,
        ticket: input::Ticket,
    ) -> Result<output::Ticket, Error>;

    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when
    ///     - id is not valid ticket id
    ///     - ticket with id does not exist
    ///     - ticket does not belong to the user
    ///
    async fn find_ticket(&self, id: &str, user_id: ObjectId) -> Result<output::Ticket, Error>;

    ///
    /// Find previews of all user's tickets, newest first
    ///
    async fn find_ticket_previews(
        &self,
        user_id: ObjectId,
    ) -> Result<Vec<output::TicketPreview>, Error>;

    ///
    /// Replace ticket content
    ///
    /// ### Errors
    /// - [Error::Validation] when date or time has invalid format
    /// - [Error::TicketNotExist] when
    ///     - id is not valid ticket id
    ///     - ticket with id does not exist
    ///     - ticket does not belong to the user
    ///
    async fn update_ticket(
        &self,
        id: &str,
        user_id: ObjectId,
        ticket: input::Ticket,
    ) -> Result<output::Ticket, Error>;

    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when
    ///     - id is not valid ticket id
    ///     - ticket with id does not exist
    ///     - ticket does not belong to the user
    ///
    async fn delete_ticket(&self, id: &str, user_id: ObjectId) -> Result<(), Error>;
}
