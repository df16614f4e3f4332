use super::{Ticket, TicketField, TicketPreview};
use crate::repository::entity::TicketFieldEntity;
use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: ObjectId,
    pub user_id: ObjectId,
    pub image: String,
    pub title: String,
    pub location: String,
    pub date_time: DateTime,
    pub background_color: String,
    pub foreground_color: String,

    #[serde(default)]
    pub fields: Vec<TicketFieldEntity>,

    pub created_at: DateTime,
}

#[derive(Deserialize)]
pub struct TicketPreviewFindEntity {
    pub _id: ObjectId,
    pub image: String,
}

impl From<TicketFindEntity> for Ticket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            id: value._id,
            user_id: value.user_id,
            image: value.image,
            title: value.title,
            location: value.location,
            date_time: OffsetDateTime::from(value.date_time),
            background_color: value.background_color,
            foreground_color: value.foreground_color,
            fields: value.fields.into_iter().map(TicketField::from).collect(),
            created_at: OffsetDateTime::from(value.created_at),
        }
    }
}

impl From<TicketFieldEntity> for TicketField {
    fn from(value: TicketFieldEntity) -> Self {
        Self {
            subtitle: value.subtitle,
            content: value.content,
        }
    }
}

impl From<TicketPreviewFindEntity> for TicketPreview {
    fn from(value: TicketPreviewFindEntity) -> Self {
        Self {
            id: value._id,
            image: value.image,
        }
    }
}
