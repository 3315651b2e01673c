//! Data model types for label quoting.

mod cylinder;
mod job;
mod quote;

pub use cylinder::{CylinderSolution, LayoutResult};
pub use job::JobInput;
pub use quote::{Consumption, CostBreakdown, Quote, TimeEstimate};
