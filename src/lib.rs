//! label-quote - Cost and price estimation for rotary label printing.
//!
//! A quote is derived from the press geometry: the cylinder search picks the
//! gear and repeat count that print the label with an allowed gap, the width
//! layout decides how many labels run side by side, and the rest follows as
//! material consumption, machine time and itemized cost.
//!
//! # Example
//!
//! ```
//! use label_quote::{quote_job, JobInput, PressConfig, Rates};
//!
//! let job = JobInput::new(76.0, 76.0, 100_000);
//! let quote = quote_job(&job, &PressConfig::default(), &Rates::default()).unwrap();
//! assert_eq!(quote.cylinder.teeth, 75);
//! assert_eq!(quote.layout.labels_across, 2);
//! ```

pub mod config;
pub mod cost;
pub mod error;
pub mod estimate;
pub mod geometry;
pub mod model;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use config::{Material, PressConfig, Rates, ToolType};
pub use cost::{calculate_costs, calculate_profit};
pub use error::{ErrorCode, QuoteError, Result};
pub use estimate::{estimate_consumption, estimate_time, format_time};
pub use geometry::{
    calculate_layout, calculate_material_width, calculate_number_across_width,
    find_cylinder_specifications, CylinderSearch, SearchStatus,
};
pub use model::{
    Consumption, CostBreakdown, CylinderSolution, JobInput, LayoutResult, Quote, TimeEstimate,
};
pub use report::QuoteReport;
pub use validation::{quick_validate, validate_job, ValidationResult};

/// Quote a label job.
///
/// Runs the full pipeline:
/// 1. Search for a cylinder and lay the labels out across the web
/// 2. Estimate material consumption
/// 3. Estimate machine time
/// 4. Price the job
///
/// Fails only when the label width is invalid or no cylinder fits. Later
/// stages never fail; they degrade to zero and record a diagnostic.
pub fn quote_job(job: &JobInput, press: &PressConfig, rates: &Rates) -> Result<Quote> {
    let (cylinder, solutions) =
        find_cylinder_specifications(job.label_width, press).into_result(press)?;
    let layout = calculate_layout(job.label_height, press);

    let mut diagnostics = Vec::new();
    if layout.width_exceeded {
        diagnostics.push(format!(
            "Material width {:.2}mm exceeds the {}mm maximum",
            layout.required_width, press.max_material_width
        ));
    }

    let consumption = estimate_consumption(job, &cylinder, &layout, press, &mut diagnostics);
    let time = estimate_time(job, &consumption, press);
    let costs = calculate_costs(job, &consumption, &time, rates, press);

    tracing::debug!(
        "Quoted Z={} x={} y={}: {:.2} {}",
        cylinder.teeth,
        cylinder.repeats,
        layout.labels_across,
        costs.selling_price(),
        config::CURRENCY
    );

    Ok(Quote {
        cylinder,
        solutions,
        layout,
        consumption,
        time,
        costs,
        material_price: rates.material_price(job.material),
        tool_description: job.tool_description(rates),
        diagnostics,
    })
}
