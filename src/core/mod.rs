pub mod add;
pub mod calculator;
pub mod config;
pub mod del;
pub mod history;
pub mod log;
pub mod platform;
pub mod profile;
pub mod summary;
