mod envelope;
mod health;
mod profile;
mod schedule;
mod ticket;
mod tokens;
mod upload_url;

pub use envelope::*;
pub use health::*;
pub use profile::*;
pub use schedule::*;
pub use ticket::*;
pub use tokens::*;
pub use upload_url::*;
