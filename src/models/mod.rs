pub mod clock_time;
pub mod platform;
pub mod profile;
pub mod session;
