//! Quote - The costed result of one job.

use super::{CylinderSolution, LayoutResult};
use serde::{Deserialize, Serialize};

/// Material consumed by the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Consumption {
    /// Web length printed for the ordered quantity (m).
    pub production_length: f64,
    /// Material area for the ordered quantity (m²).
    pub production_area: f64,
    /// Setup waste length (m).
    pub waste_length: f64,
    /// Setup waste area (m²).
    pub waste_area: f64,
    /// How the waste length was made up, e.g. "2 colors (50+2×50m)".
    pub waste_description: String,
}

impl Consumption {
    /// Production plus waste length (m).
    pub fn total_length(&self) -> f64 {
        self.production_length + self.waste_length
    }

    /// Production plus waste area (m²).
    pub fn total_area(&self) -> f64 {
        self.production_area + self.waste_area
    }
}

/// Machine time for the job, in minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimate {
    pub setup: f64,
    pub production: f64,
    pub cleanup: f64,
}

impl TimeEstimate {
    /// Setup, production and cleanup combined.
    pub fn total(&self) -> f64 {
        self.setup + self.production + self.cleanup
    }

    /// Total time in hours.
    pub fn total_hours(&self) -> f64 {
        self.total() / 60.0
    }
}

/// Itemized costs, profit and price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Ink used (kg) and its cost.
    pub ink_kg: f64,
    pub ink: f64,
    /// Varnish used (kg) and its cost.
    pub varnish_kg: f64,
    pub varnish: f64,
    /// Plates for every printed color.
    pub plates: f64,
    /// Material for production and waste.
    pub material: f64,
    /// Tool purchase.
    pub tool: f64,
    /// Machine labor.
    pub labor: f64,
    /// Profit on material cost.
    pub profit: f64,
    /// Ordered quantity the price is spread over.
    pub quantity: u64,
}

impl CostBreakdown {
    /// Ink plus varnish.
    pub fn ink_and_varnish(&self) -> f64 {
        self.ink + self.varnish
    }

    /// Sum of all itemized costs.
    pub fn production_cost(&self) -> f64 {
        self.ink_and_varnish() + self.plates + self.material + self.labor + self.tool
    }

    /// Production cost plus profit.
    pub fn selling_price(&self) -> f64 {
        self.production_cost() + self.profit
    }

    /// Selling price per ordered piece, 0 for an empty order.
    pub fn price_per_piece(&self) -> f64 {
        if self.quantity == 0 {
            return 0.0;
        }
        self.selling_price() / self.quantity as f64
    }
}

/// Complete quote for one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Selected cylinder.
    pub cylinder: CylinderSolution,
    /// Every feasible cylinder, best first.
    pub solutions: Vec<CylinderSolution>,
    /// Across-web layout.
    pub layout: LayoutResult,
    pub consumption: Consumption,
    pub time: TimeEstimate,
    pub costs: CostBreakdown,
    /// Resolved material price (RSD/m²).
    pub material_price: f64,
    /// Tool line, e.g. "Rotary (8,000.00 RSD)".
    pub tool_description: String,
    /// Stages that degraded to zero, in pipeline order.
    pub diagnostics: Vec<String>,
}

impl Quote {
    /// Labels printed per cylinder revolution (y × x).
    pub fn labels_per_cycle(&self) -> u32 {
        self.layout.labels_across * self.cylinder.repeats
    }

    /// Feasible cylinders other than the selected one.
    pub fn alternatives(&self) -> impl Iterator<Item = &CylinderSolution> {
        self.solutions.iter().filter(move |s| **s != self.cylinder)
    }

    /// Whether any stage degraded.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
