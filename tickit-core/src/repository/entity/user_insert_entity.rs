use serde::Serialize;

#[derive(Serialize)]
pub struct UserInsertEntity {
    pub oauth_id: String,
    pub name: String,
}
