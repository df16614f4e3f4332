use bson::oid::ObjectId;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: ObjectId,
    pub oauth_id: String,
    pub name: String,
    pub refresh_token: Option<String>,
    pub token_expiry: Option<OffsetDateTime>,
}
