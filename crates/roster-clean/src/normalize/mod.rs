//! Format normalization for the coercers:
//! - **datetime**: loose date parsing and ISO `YYYY-MM-DD` output
//! - **money**: currency stripping and the USD -> EUR rate
//! - **numeric**: plain float parsing and feed-style formatting

pub mod datetime;
pub mod money;
pub mod numeric;

pub use datetime::{format_iso_date, parse_loose_date};
pub use money::{USD_TO_EUR, strip_currency};
pub use numeric::{format_numeric, parse_f64};
