//! Itemized costs, profit and price.

use crate::config::{float_cmp::non_negative, PressConfig, Rates};
use crate::model::{Consumption, CostBreakdown, JobInput, TimeEstimate};

/// Price the job from its consumption and machine time.
///
/// Every item is a pure function of upstream results and `rates`; an item
/// whose inputs are zero, negative or not finite costs nothing.
pub fn calculate_costs(
    job: &JobInput,
    consumption: &Consumption,
    time: &TimeEstimate,
    rates: &Rates,
    press: &PressConfig,
) -> CostBreakdown {
    let colors = f64::from(job.print_colors());
    let production_area = consumption.production_area;

    let (ink_kg, ink) = if !job.blank && colors > 0.0 && production_area > 0.0 {
        let kg = production_area * colors * press.grams_ink_per_m2 / 1000.0;
        (kg, kg * rates.ink_price_per_kg)
    } else {
        (0.0, 0.0)
    };

    let (varnish_kg, varnish) = if job.uv_varnish && production_area > 0.0 {
        let kg = production_area * press.grams_varnish_per_m2 / 1000.0;
        (kg, kg * rates.varnish_price_per_kg)
    } else {
        (0.0, 0.0)
    };

    let plates = if !job.blank && colors > 0.0 {
        colors * rates.plate_price_per_color
    } else {
        0.0
    };

    let total_area = consumption.total_area();
    let material_price = rates.material_price(job.material);
    let material = if total_area > 0.0 && material_price >= 0.0 {
        total_area * material_price
    } else {
        0.0
    };

    let total_time = time.total();
    let labor = if total_time > 0.0 && rates.labor_price_per_hour >= 0.0 {
        total_time / 60.0 * rates.labor_price_per_hour
    } else {
        0.0
    };

    let tool = rates.tool_price(job.tool);
    let material = non_negative(material);

    CostBreakdown {
        ink_kg: non_negative(ink_kg),
        ink: non_negative(ink),
        varnish_kg: non_negative(varnish_kg),
        varnish: non_negative(varnish),
        plates: non_negative(plates),
        material,
        tool: non_negative(tool),
        labor: non_negative(labor),
        profit: calculate_profit(material, rates.profit_coefficient),
        quantity: job.quantity,
    }
}

/// Profit is a share of the material cost only.
pub fn calculate_profit(material_cost: f64, profit_coefficient: f64) -> f64 {
    if material_cost > 0.0 && profit_coefficient > 0.0 {
        non_negative(material_cost * profit_coefficient)
    } else {
        0.0
    }
}
