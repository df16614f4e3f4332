mod identity_service;
mod schedules_service;
mod storage_service;
mod tickets_service;
mod uploads_service;
mod users_service;

pub use identity_service::*;
pub use schedules_service::*;
pub use storage_service::*;
pub use tickets_service::*;
pub use uploads_service::*;
pub use users_service::*;
