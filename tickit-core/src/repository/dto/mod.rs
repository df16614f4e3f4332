mod schedule;
mod schedule_find_entity;
mod ticket;
mod ticket_find_entity;
mod user;
mod user_find_entity;

pub use schedule::*;
pub use schedule_find_entity::*;
pub use ticket::*;
pub use ticket_find_entity::*;
pub use user::*;
pub use user_find_entity::*;
