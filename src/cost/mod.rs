//! Cost pipeline from consumption and time to selling price.

mod pipeline;

pub use pipeline::{calculate_costs, calculate_profit};
