//! Cylinder solutions and across-web layout.

use serde::{Deserialize, Serialize};

/// One feasible print cylinder for a label width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderSolution {
    /// Gear tooth count (Z).
    pub teeth: u32,
    /// Cylinder circumference (mm), `teeth * pitch`.
    pub circumference: f64,
    /// Labels around the circumference (x).
    pub repeats: u32,
    /// Gap between labels along the circumference (mm).
    pub gap: f64,
}

impl CylinderSolution {
    /// Length of one label plus its gap (mm).
    pub fn segment_length(&self, label_width: f64) -> f64 {
        label_width + self.gap
    }
}

/// Label columns across the web and the material they need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Labels side by side across the usable width (y).
    pub labels_across: u32,
    /// Material width including edge trim (mm).
    pub required_width: f64,
    /// Whether the required width exceeds the widest accepted material.
    pub width_exceeded: bool,
}

impl LayoutResult {
    /// Whether at least one label fits across the web.
    pub fn fits(&self) -> bool {
        self.labels_across > 0
    }
}
