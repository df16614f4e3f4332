mod calendar_filters;
mod oauth_tokens;
mod refresh_token;
mod schedule;
mod ticket;
mod ticket_schedules_filters;

pub use calendar_filters::*;
pub use oauth_tokens::*;
pub use refresh_token::*;
pub use schedule::*;
pub use ticket::*;
pub use ticket_schedules_filters::*;
