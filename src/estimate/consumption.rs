//! Material consumed for production and for setup waste.

use crate::config::PressConfig;
use crate::model::{Consumption, CylinderSolution, JobInput, LayoutResult};
use tracing::warn;

/// Estimate production and waste consumption for a job on a chosen cylinder.
///
/// Production and waste are kept apart: ink and varnish are charged on the
/// production area only, material on the total. Stages that cannot be
/// computed yield zero and push a note onto `diagnostics`.
pub fn estimate_consumption(
    job: &JobInput,
    cylinder: &CylinderSolution,
    layout: &LayoutResult,
    press: &PressConfig,
    diagnostics: &mut Vec<String>,
) -> Consumption {
    let width_m = layout.required_width / 1000.0;

    let mut production_length = 0.0;
    let mut production_area = 0.0;
    if layout.labels_across > 0 {
        let rows = job.quantity as f64 / f64::from(layout.labels_across);
        production_length = rows * cylinder.segment_length(job.label_width) / 1000.0;
        if layout.required_width > 0.0 {
            production_area = production_length * width_m;
        } else {
            push(diagnostics, "Width=0, area N/A.");
        }
    } else {
        push(diagnostics, "y=0, consumption N/A.");
    }

    let colors = job.print_colors();
    let (waste_length, waste_description) = if job.blank {
        (
            press.base_waste_length,
            format!("Blank ({}m)", press.base_waste_length),
        )
    } else {
        (
            press.base_waste_length + f64::from(colors) * press.waste_length_per_color,
            format!(
                "{} color{} ({}+{}×{}m)",
                colors,
                if colors == 1 { "" } else { "s" },
                press.base_waste_length,
                colors,
                press.waste_length_per_color
            ),
        )
    };

    let waste_area = if layout.required_width > 0.0 {
        waste_length * width_m
    } else {
        0.0
    };

    Consumption {
        production_length,
        production_area,
        waste_length,
        waste_area,
        waste_description,
    }
}

fn push(diagnostics: &mut Vec<String>, message: &str) {
    warn!("{}", message);
    diagnostics.push(message.to_string());
}
