pub mod colors;
pub mod date;
pub mod formatting;
pub mod number;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::format_currency;
pub use time::normalize_time;
