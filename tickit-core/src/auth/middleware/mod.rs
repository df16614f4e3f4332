mod session_auth_future;
mod session_auth_layer;
mod session_auth_service;

pub use session_auth_layer::SessionAuthLayer;
