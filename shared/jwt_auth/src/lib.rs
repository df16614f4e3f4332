//!
//! Session tokens shared by every service that needs to authenticate users.
//!

pub mod dto;
pub mod error;
pub mod session_tokens;
pub mod util;

pub use session_tokens::{SessionTokens, ACCESS_TOKEN_LIFESPAN, REFRESH_TOKEN_LIFESPAN};
