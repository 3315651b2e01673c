//! Bounds checks for a job and its rates before quoting.

use crate::config::{PressConfig, Rates, MAX_COLORS, PROFIT_COEFFICIENT_MAX, PROFIT_COEFFICIENT_MIN};
use crate::error::{QuoteError, Result};
use crate::geometry::calculate_layout;
use crate::model::JobInput;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a job, its rates and its fit on the press.
pub fn validate_job(job: &JobInput, rates: &Rates, press: &PressConfig) -> ValidationResult {
    let mut result = validate_dimensions(job, press);
    result.merge(validate_print(job, press));
    result.merge(validate_rates(job, rates));
    result
}

fn validate_dimensions(job: &JobInput, press: &PressConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !(job.label_width.is_finite() && job.label_width > 0.0) {
        result.add_error(format!("Label width must be > 0 (got {})", job.label_width));
    }
    if !(job.label_height.is_finite() && job.label_height > 0.0) {
        result.add_error(format!("Label height must be > 0 (got {})", job.label_height));
        return result;
    }
    if job.quantity == 0 {
        result.add_error("Quantity must be > 0");
    }

    let layout = calculate_layout(job.label_height, press);
    if !layout.fits() {
        result.add_warning(format!(
            "Label height {:.2}mm does not fit the {}mm working width",
            job.label_height, press.working_width
        ));
    } else if layout.width_exceeded {
        result.add_warning(format!(
            "Required material width {:.2}mm exceeds the {}mm maximum",
            layout.required_width, press.max_material_width
        ));
    }

    result
}

fn validate_print(job: &JobInput, press: &PressConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !job.blank && (job.colors == 0 || job.colors > MAX_COLORS) {
        result.add_error(format!(
            "Number of colors must be 1-{} (got {})",
            MAX_COLORS, job.colors
        ));
    }

    if job.machine_speed < press.speed_min || job.machine_speed > press.speed_max {
        result.add_error(format!(
            "Machine speed must be {}-{} m/min (got {})",
            press.speed_min, press.speed_max, job.machine_speed
        ));
    }

    result
}

fn validate_rates(job: &JobInput, rates: &Rates) -> ValidationResult {
    let mut result = ValidationResult::ok();

    let prices = [
        ("Ink price", rates.ink_price_per_kg),
        ("Varnish price", rates.varnish_price_per_kg),
        ("Labor price", rates.labor_price_per_hour),
        ("Plate price", rates.plate_price_per_color),
        ("Semirotary tool price", rates.tool_price_semirotary),
        ("Rotary tool price", rates.tool_price_rotary),
        ("Material price", rates.material_price(job.material)),
    ];
    for (name, price) in prices {
        if !(price.is_finite() && price >= 0.0) {
            result.add_error(format!("{} must be >= 0 (got {})", name, price));
        }
    }

    let k = rates.profit_coefficient;
    if !(PROFIT_COEFFICIENT_MIN..=PROFIT_COEFFICIENT_MAX).contains(&k) {
        result.add_error(format!(
            "Profit coefficient must be {:.2}-{:.2} (got {})",
            PROFIT_COEFFICIENT_MIN, PROFIT_COEFFICIENT_MAX, k
        ));
    }

    result
}

/// Fail with the joined error messages if the job does not validate.
pub fn quick_validate(job: &JobInput, rates: &Rates, press: &PressConfig) -> Result<()> {
    let result = validate_job(job, rates, press);

    if !result.passed {
        return Err(QuoteError::InvalidValue {
            field: "job".to_string(),
            expected: "values within bounds".to_string(),
            value: result.errors.join("; "),
        });
    }

    Ok(())
}
