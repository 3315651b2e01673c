//! Press geometry: cylinder search and across-web layout.

mod cylinder;
mod layout;

pub use cylinder::{find_cylinder_specifications, CylinderSearch, SearchStatus};
pub use layout::{calculate_layout, calculate_material_width, calculate_number_across_width};
