use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,

    /// unix timestamp in seconds
    pub iat: i64,

    /// unix timestamp in seconds
    pub exp: i64,
}
