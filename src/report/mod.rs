//! Plain text quote report.

mod text;

pub use text::{money, parameter_summary, QuoteReport};
