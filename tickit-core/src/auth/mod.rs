mod dto;
mod middleware;

pub use dto::User;
pub use middleware::SessionAuthLayer;
