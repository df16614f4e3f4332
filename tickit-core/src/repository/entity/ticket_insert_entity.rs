use crate::repository::{TicketContent, TicketField};
use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct TicketInsertEntity {
    pub user_id: ObjectId,
    pub image: String,
    pub title: String,
    pub location: String,
    pub date_time: DateTime,
    pub background_color: String,
    pub foreground_color: String,
    pub fields: Vec<TicketFieldEntity>,
    pub created_at: DateTime,
}

#[derive(Serialize, Deserialize)]
pub struct TicketFieldEntity {
    pub subtitle: String,
    pub content: String,
}

impl TicketInsertEntity {
    pub fn new(user_id: ObjectId, content: TicketContent, created_at: DateTime) -> Self {
        Self {
            user_id,
            image: content.image,
            title: content.title,
            location: content.location,
            date_time: DateTime::from(content.date_time),
            background_color: content.background_color,
            foreground_color: content.foreground_color,
            fields: content
                .fields
                .into_iter()
                .map(TicketFieldEntity::from)
                .collect(),
            created_at,
        }
    }
}

impl From<TicketField> for TicketFieldEntity {
    fn from(value: TicketField) -> Self {
        Self {
            subtitle: value.subtitle,
            content: value.content,
        }
    }
}
