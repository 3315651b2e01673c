//! Setup, production and cleanup time.

use crate::config::PressConfig;
use crate::model::{Consumption, JobInput, TimeEstimate};

/// Estimate machine time in minutes.
pub fn estimate_time(job: &JobInput, consumption: &Consumption, press: &PressConfig) -> TimeEstimate {
    let setup = f64::from(job.waste_colors()) * press.setup_time_per_color;

    let speed = f64::from(job.machine_speed);
    let production = if consumption.production_length > 0.0 && speed > 0.0 {
        consumption.production_length / speed
    } else {
        0.0
    };

    TimeEstimate {
        setup,
        production,
        cleanup: press.cleanup_time,
    }
}

/// Render minutes as "0 min", "45 min", "2 h" or "2 h 5 min".
///
/// Minutes are rounded half to even. Negative input renders as "N/A".
pub fn format_time(minutes: f64) -> String {
    if minutes.is_nan() || minutes < 0.0 {
        return "N/A".to_string();
    }
    let total = minutes.round_ties_even() as u64;
    if total == 0 {
        return "0 min".to_string();
    }
    if total < 60 {
        return format!("{} min", total);
    }
    let (hours, mins) = (total / 60, total % 60);
    if mins == 0 {
        format!("{} h", hours)
    } else {
        format!("{} h {} min", hours, mins)
    }
}
