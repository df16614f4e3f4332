use crate::{date_time, repository};
use bson::oid::ObjectId;
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub image: String,
    pub title: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub background_color: String,
    pub foreground_color: String,
    pub fields: Vec<TicketField>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TicketField {
    pub subtitle: String,
    pub content: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TicketPreview {
    pub id: String,
    pub image: String,
}

impl Ticket {
    pub fn new(id: ObjectId, content: repository::TicketContent) -> Self {
        let (date, time) = date_time::split(content.date_time);

        Self {
            id: id.to_hex(),
            image: content.image,
            title: content.title,
            location: content.location,
            date,
            time,
            background_color: content.background_color,
            foreground_color: content.foreground_color,
            fields: content.fields.into_iter().map(TicketField::from).collect(),
        }
    }
}

impl From<repository::Ticket> for Ticket {
    fn from(value: repository::Ticket) -> Self {
        Self::new(
            value.id,
            repository::TicketContent {
                image: value.image,
                title: value.title,
                location: value.location,
                date_time: value.date_time,
                background_color: value.background_color,
                foreground_color: value.foreground_color,
                fields: value.fields,
            },
        )
    }
}

impl From<repository::TicketField> for TicketField {
    fn from(value: repository::TicketField) -> Self {
        Self {
            subtitle: value.subtitle,
            content: value.content,
        }
    }
}

impl From<repository::TicketPreview> for TicketPreview {
    fn from(value: repository::TicketPreview) -> Self {
        Self {
            id: value.id.to_hex(),
            image: value.image,
        }
    }
}
