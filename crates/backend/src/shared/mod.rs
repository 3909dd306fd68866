pub mod config;
pub mod format;
pub mod request_log;
