//! Material consumption and machine time estimates.

mod consumption;
mod time;

pub use consumption::estimate_consumption;
pub use time::{estimate_time, format_time};
