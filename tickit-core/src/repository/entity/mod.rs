mod schedule_insert_entity;
mod ticket_insert_entity;
mod user_insert_entity;

pub use schedule_insert_entity::*;
pub use ticket_insert_entity::*;
pub use user_insert_entity::*;
