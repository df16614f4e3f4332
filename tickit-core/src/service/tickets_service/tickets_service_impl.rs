use super::TicketsService;
use crate::{
    date_time,
    dto::{input, output},
    error::Error,
    repository::{self, TicketContent, TicketField, TicketsRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;

pub const DEFAULT_BACKGROUND_COLOR: &str = "0xffFFFFFF";
pub const DEFAULT_FOREGROUND_COLOR: &str = "0xff000000";

pub struct TicketsServiceImpl {
    repository: Arc<dyn TicketsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(repository: Arc<dyn TicketsRepository>) -> Self {
        Self { repository }
    }

    fn parse_id(id: &str) -> Result<ObjectId, Error> {
        ObjectId::parse_str(id).map_err(|_| Error::TicketNotExist)
    }

    fn ticket_content(ticket: input::Ticket) -> Result<TicketContent, Error> {
        let date_time = date_time::combine(&ticket.date, &ticket.time)?;

        Ok(TicketContent {
            image: ticket.image,
            title: ticket.title,
            location: ticket.location,
            date_time,
            background_color: ticket.background_color,
            foreground_color: ticket.foreground_color,
            fields: ticket
                .fields
                .into_iter()
                .map(|field| TicketField {
                    subtitle: field.subtitle,
                    content: field.content,
                })
                .collect(),
        })
    }

    fn apply_default_colors(content: &mut TicketContent) {
        if content.background_color.is_empty() {
            content.background_color = DEFAULT_BACKGROUND_COLOR.to_string();
        }
        if content.foreground_color.is_empty() {
            content.foreground_color = DEFAULT_FOREGROUND_COLOR.to_string();
        }
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn create_ticket(
        &self,
        user_id: ObjectId,
        ticket: input::Ticket,
    ) -> Result<output::Ticket, Error> {
        tracing::info!("creating ticket");
        tracing::trace!(?ticket);

        let mut content = Self::ticket_content(ticket)?;
        Self::apply_default_colors(&mut content);

        let ticket = self
            .repository
            .insert(user_id, content, OffsetDateTime::now_utc())
            .await?;

        let id = ticket.id.to_hex();
        tracing::info!(id, "created ticket");

        Ok(ticket.into())
    }

    async fn find_ticket(&self, id: &str, user_id: ObjectId) -> Result<output::Ticket, Error> {
        tracing::info!(id, "finding ticket");

        let id = Self::parse_id(id)?;
        let ticket = self
            .repository
            .find(id, user_id)
            .await?
            .ok_or(Error::TicketNotExist)?;

        tracing::info!("found ticket");

        Ok(ticket.into())
    }

    async fn find_ticket_previews(
        &self,
        user_id: ObjectId,
    ) -> Result<Vec<output::TicketPreview>, Error> {
        tracing::info!("finding ticket previews");

        let previews = self.repository.find_many_previews(user_id).await?;
        tracing::info!(count = previews.len(), "found ticket previews");

        let previews = previews
            .into_iter()
            .map(output::TicketPreview::from)
            .collect();

        Ok(previews)
    }

    async fn update_ticket(
        &self,
        id: &str,
        user_id: ObjectId,
        ticket: input::Ticket,
    ) -> Result<output::Ticket, Error> {
        tracing::info!(id, "updating ticket");
        tracing::trace!(?ticket);

        let id = Self::parse_id(id)?;
        let content = Self::ticket_content(ticket)?;

        self.repository
            .update(id, user_id, content.clone())
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::TicketNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("updated ticket");

        Ok(output::Ticket::new(id, content))
    }

    async fn delete_ticket(&self, id: &str, user_id: ObjectId) -> Result<(), Error> {
        tracing::info!(id, "deleting ticket");

        let id = Self::parse_id(id)?;

        self.repository
            .delete(id, user_id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::TicketNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("deleted ticket");

        Ok(())
    }
}
