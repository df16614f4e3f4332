use bson::oid::ObjectId;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub image: String,
    pub title: String,
    pub location: String,
    pub date_time: OffsetDateTime,
    pub background_color: String,
    pub foreground_color: String,
    pub fields: Vec<TicketField>,
    pub created_at: OffsetDateTime,
}

///
/// Values of the ticket chosen by its owner.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketContent {
    pub image: String,
    pub title: String,
    pub location: String,
    pub date_time: OffsetDateTime,
    pub background_color: String,
    pub foreground_color: String,
    pub fields: Vec<TicketField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketField {
    pub subtitle: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketPreview {
    pub id: ObjectId,
    pub image: String,
}
