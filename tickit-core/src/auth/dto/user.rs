use bson::oid::ObjectId;

///
/// Authenticated user attached to the request by [crate::auth::SessionAuthLayer].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub id: ObjectId,
}

impl User {
    pub fn new(id: ObjectId) -> Self {
        Self { id }
    }
}
