use super::User;
use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Deserialize)]
pub struct UserFindEntity {
    pub _id: ObjectId,
    pub oauth_id: String,
    pub name: String,

    #[serde(default)]
    pub refresh_token: Option<String>,

    #[serde(default)]
    pub token_expiry: Option<DateTime>,
}

impl From<UserFindEntity> for User {
    fn from(value: UserFindEntity) -> Self {
        Self {
            id: value._id,
            oauth_id: value.oauth_id,
            name: value.name,
            refresh_token: value.refresh_token,
            token_expiry: value.token_expiry.map(OffsetDateTime::from),
        }
    }
}
