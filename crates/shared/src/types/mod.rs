//! Common types used across the application.

pub mod id;
pub mod number;
pub mod policy;

pub use id::*;
pub use number::{lenient, non_negative, parse_or_zero, to_non_negative_number};
pub use policy::{NegativeTotals, PayloadRounding};
