//! Press constants, rate configuration and selection enums.

use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

/// Tolerance applied to the gap range bounds.
///
/// Gaps computed as `circumference / N - W` land exactly on a bound for many
/// real label sizes, and floating-point division may push them just outside.
/// The magnitude was picked empirically and can be tuned.
pub const GAP_TOLERANCE: f64 = 1e-9;

/// Smallest denominator treated as non-zero.
pub const EPS: f64 = 1e-9;

/// Distance between gear teeth (mm).
pub const PITCH: f64 = 3.175;

/// Minimum gap between labels along the circumference (mm).
pub const GAP_MIN: f64 = 2.5;

/// Maximum gap between labels along the circumference (mm).
pub const GAP_MAX: f64 = 4.0;

/// Smallest cylinder gear (teeth).
pub const Z_MIN: u32 = 70;

/// Largest cylinder gear (teeth).
pub const Z_MAX: u32 = 140;

/// Total cylinder width (mm).
pub const TOTAL_CYLINDER_WIDTH: f64 = 200.0;

/// Usable printing width of the web (mm).
pub const WORKING_WIDTH: f64 = 190.0;

/// Gap between label columns (mm).
pub const WIDTH_GAP: f64 = 5.0;

/// Edge trim added to the material width (mm).
pub const WIDTH_WASTE: f64 = 10.0;

/// Widest material the press accepts (mm).
pub const MAX_MATERIAL_WIDTH: f64 = 200.0;

/// Setup waste for every job (m).
pub const BASE_WASTE_LENGTH: f64 = 50.0;

/// Additional setup waste per printed color (m).
pub const WASTE_LENGTH_PER_COLOR: f64 = 50.0;

/// Setup minutes per color, or once for a blank job.
pub const SETUP_TIME_PER_COLOR_OR_BASE: f64 = 30.0;

/// Fixed cleanup minutes.
pub const CLEANUP_TIME_MIN: f64 = 30.0;

/// Default machine speed (m/min).
pub const MACHINE_SPEED_DEFAULT: u32 = 30;

/// Slowest allowed machine speed (m/min).
pub const MACHINE_SPEED_MIN: u32 = 10;

/// Fastest allowed machine speed (m/min).
pub const MACHINE_SPEED_MAX: u32 = 120;

/// Ink laydown per color (g/m²).
pub const GRAMS_INK_PER_M2: f64 = 3.0;

/// UV varnish laydown (g/m²).
pub const GRAMS_VARNISH_PER_M2: f64 = 4.0;

/// Highest color count a job may print.
pub const MAX_COLORS: u8 = 8;

/// Allowed profit coefficient range.
pub const PROFIT_COEFFICIENT_MIN: f64 = 0.01;
pub const PROFIT_COEFFICIENT_MAX: f64 = 2.00;

/// Currency label used in reports.
pub const CURRENCY: &str = "RSD";

/// Physical constants of the press.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressConfig {
    /// Gear pitch (mm).
    pub pitch: f64,
    /// Allowed gap range along the circumference (mm).
    pub gap_min: f64,
    pub gap_max: f64,
    /// Allowed tooth counts, inclusive.
    pub z_min: u32,
    pub z_max: u32,
    /// Total cylinder width (mm).
    pub total_width: f64,
    /// Usable web width (mm).
    pub working_width: f64,
    /// Gap between label columns (mm).
    pub width_gap: f64,
    /// Edge trim (mm).
    pub width_waste: f64,
    /// Widest material accepted (mm).
    pub max_material_width: f64,
    /// Setup waste (m).
    pub base_waste_length: f64,
    pub waste_length_per_color: f64,
    /// Times (min).
    pub setup_time_per_color: f64,
    pub cleanup_time: f64,
    /// Machine speed bounds (m/min).
    pub speed_min: u32,
    pub speed_max: u32,
    /// Laydowns (g/m²).
    pub grams_ink_per_m2: f64,
    pub grams_varnish_per_m2: f64,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            pitch: PITCH,
            gap_min: GAP_MIN,
            gap_max: GAP_MAX,
            z_min: Z_MIN,
            z_max: Z_MAX,
            total_width: TOTAL_CYLINDER_WIDTH,
            working_width: WORKING_WIDTH,
            width_gap: WIDTH_GAP,
            width_waste: WIDTH_WASTE,
            max_material_width: MAX_MATERIAL_WIDTH,
            base_waste_length: BASE_WASTE_LENGTH,
            waste_length_per_color: WASTE_LENGTH_PER_COLOR,
            setup_time_per_color: SETUP_TIME_PER_COLOR_OR_BASE,
            cleanup_time: CLEANUP_TIME_MIN,
            speed_min: MACHINE_SPEED_MIN,
            speed_max: MACHINE_SPEED_MAX,
            grams_ink_per_m2: GRAMS_INK_PER_M2,
            grams_varnish_per_m2: GRAMS_VARNISH_PER_M2,
        }
    }
}

/// Label stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Material {
    PaperChrome,
    PlasticPpw,
    ThermalPaper,
}

impl Material {
    /// All stocks, in catalog order.
    pub const ALL: [Material; 3] = [
        Material::PaperChrome,
        Material::PlasticPpw,
        Material::ThermalPaper,
    ];

    /// Default price (RSD/m²).
    pub fn default_price(&self) -> f64 {
        match self {
            Material::PaperChrome => 39.95,
            Material::PlasticPpw => 54.05,
            Material::ThermalPaper => 49.35,
        }
    }

    /// Catalog display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::PaperChrome => "Paper (chrome)",
            Material::PlasticPpw => "Plastic (PPW)",
            Material::ThermalPaper => "Thermal Paper",
        }
    }

    /// Command line key.
    pub fn key(&self) -> &'static str {
        match self {
            Material::PaperChrome => "paper-chrome",
            Material::PlasticPpw => "plastic-ppw",
            Material::ThermalPaper => "thermal-paper",
        }
    }
}

impl FromStr for Material {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Material::ALL
            .into_iter()
            .find(|m| m.key() == wanted || m.display_name().to_lowercase() == wanted)
            .ok_or_else(|| QuoteError::UnknownMaterial {
                name: s.to_string(),
            })
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Cutting tool to purchase for the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolType {
    /// Existing tool, nothing to buy.
    #[default]
    Existing,
    Semirotary,
    Rotary,
}

impl FromStr for ToolType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" | "existing" => Ok(ToolType::Existing),
            "semirotary" | "semi-rotary" => Ok(ToolType::Semirotary),
            "rotary" => Ok(ToolType::Rotary),
            _ => Err(QuoteError::UnknownTool {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ToolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolType::Existing => write!(f, "None"),
            ToolType::Semirotary => write!(f, "Semirotary"),
            ToolType::Rotary => write!(f, "Rotary"),
        }
    }
}

/// Adjustable unit prices.
///
/// A value is passed into every quote; `Rates::default()` resets to the
/// shop's standard price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rates {
    /// Ink price (RSD/kg).
    pub ink_price_per_kg: f64,
    /// UV varnish price (RSD/kg).
    pub varnish_price_per_kg: f64,
    /// Machine labor (RSD/h).
    pub labor_price_per_hour: f64,
    /// One-time plate cost per color (RSD).
    pub plate_price_per_color: f64,
    /// Tool purchase prices (RSD).
    pub tool_price_semirotary: f64,
    pub tool_price_rotary: f64,
    /// Profit as a fraction of material cost.
    pub profit_coefficient: f64,
    /// Material prices (RSD/m²).
    pub material_prices: BTreeMap<Material, f64>,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            ink_price_per_kg: 2350.0,
            varnish_price_per_kg: 1800.0,
            labor_price_per_hour: 3000.0,
            plate_price_per_color: 2000.0,
            tool_price_semirotary: 6000.0,
            tool_price_rotary: 8000.0,
            profit_coefficient: 0.20,
            material_prices: Material::ALL
                .into_iter()
                .map(|m| (m, m.default_price()))
                .collect(),
        }
    }
}

impl Rates {
    /// Price per m² of a material, falling back to its catalog default.
    pub fn material_price(&self, material: Material) -> f64 {
        self.material_prices
            .get(&material)
            .copied()
            .unwrap_or_else(|| material.default_price())
    }

    /// Override the price of one material.
    pub fn set_material_price(&mut self, material: Material, price: f64) {
        self.material_prices.insert(material, price);
    }

    /// Purchase price of a tool type.
    pub fn tool_price(&self, tool: ToolType) -> f64 {
        match tool {
            ToolType::Existing => 0.0,
            ToolType::Semirotary => self.tool_price_semirotary,
            ToolType::Rotary => self.tool_price_rotary,
        }
    }

    /// Load rates from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QuoteError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let rates: Rates = serde_json::from_str(&content)?;
        tracing::debug!("Loaded rates from {}", path.display());
        Ok(rates)
    }

    /// Write rates as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Floating-point comparison helpers.
pub mod float_cmp {
    /// Check if `a` is in `[min, max]` widened by `tolerance` on both sides.
    #[inline]
    pub fn in_range(a: f64, min: f64, max: f64, tolerance: f64) -> bool {
        a >= min - tolerance && a <= max + tolerance
    }

    /// Replace negative or non-finite values with zero.
    #[inline]
    pub fn non_negative(a: f64) -> f64 {
        if a.is_finite() && a > 0.0 {
            a
        } else {
            0.0
        }
    }
}
