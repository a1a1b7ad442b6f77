pub mod api;
pub mod config;
pub mod logging;
pub mod notifications;
pub mod storage;
