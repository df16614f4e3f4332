mod schedules_service;
mod schedules_service_impl;

pub use schedules_service::*;
pub use schedules_service_impl::*;
