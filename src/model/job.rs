//! JobInput - Everything the estimator is told about a label job.

use crate::config::{Material, Rates, ToolType, CURRENCY, MACHINE_SPEED_DEFAULT};
use serde::{Deserialize, Serialize};
use thousands::Separable;

/// A label job to quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobInput {
    // === Dimensions ===
    /// Label width along the press direction (mm).
    pub label_width: f64,
    /// Label height across the web (mm).
    pub label_height: f64,
    /// Ordered pieces.
    pub quantity: u64,

    // === Print ===
    /// No ink, die-cut only.
    pub blank: bool,
    /// Printed colors (1-8), ignored for blank jobs.
    pub colors: u8,
    /// Apply UV varnish over the print.
    pub uv_varnish: bool,

    // === Machine ===
    /// Average machine speed (m/min).
    pub machine_speed: u32,
    /// Cutting tool to buy.
    pub tool: ToolType,
    /// Identifier of the tool already in stock, for existing-tool jobs.
    pub existing_tool: Option<String>,

    // === Material ===
    pub material: Material,

    // === Customer ===
    pub client: Option<String>,
    pub product: Option<String>,
}

impl Default for JobInput {
    fn default() -> Self {
        Self {
            label_width: 76.0,
            label_height: 76.0,
            quantity: 100_000,
            blank: false,
            colors: 1,
            uv_varnish: false,
            machine_speed: MACHINE_SPEED_DEFAULT,
            tool: ToolType::Existing,
            existing_tool: None,
            material: Material::PaperChrome,
            client: None,
            product: None,
        }
    }
}

impl JobInput {
    /// Create a job with the given dimensions and quantity.
    pub fn new(label_width: f64, label_height: f64, quantity: u64) -> Self {
        Self {
            label_width,
            label_height,
            quantity,
            ..Default::default()
        }
    }

    /// Colors that consume ink and plates: 0 for blank jobs, at least 1 otherwise.
    pub fn print_colors(&self) -> u32 {
        if self.blank {
            0
        } else {
            u32::from(self.colors.max(1))
        }
    }

    /// Colors that drive setup waste and setup time: a blank job counts once.
    pub fn waste_colors(&self) -> u32 {
        if self.blank {
            1
        } else {
            self.print_colors()
        }
    }

    /// Short tool label for the parameter summary.
    pub fn tool_info(&self) -> String {
        match (self.tool, self.existing_tool.as_deref()) {
            (ToolType::Existing, Some(id)) if !id.is_empty() => format!("Existing: {}", id),
            (tool, _) => tool.to_string(),
        }
    }

    /// Tool line with price for the cost breakdown.
    pub fn tool_description(&self, rates: &Rates) -> String {
        match self.tool {
            ToolType::Semirotary | ToolType::Rotary => format!(
                "{} ({} {})",
                self.tool,
                format!("{:.2}", rates.tool_price(self.tool)).separate_with_commas(),
                CURRENCY
            ),
            ToolType::Existing => match self.existing_tool.as_deref() {
                Some(id) if !id.is_empty() => format!("Existing: {}", id),
                _ => "Not selected".to_string(),
            },
        }
    }
}
