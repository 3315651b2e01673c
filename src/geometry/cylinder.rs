//! Cylinder search over gear tooth counts and label repeats.

use crate::config::{float_cmp, PressConfig, EPS, GAP_TOLERANCE};
use crate::error::{QuoteError, Result};
use crate::model::CylinderSolution;
use tracing::debug;

/// Message returned when the search succeeds.
pub const SEARCH_OK: &str = "Circumference calculation OK.";

/// Message returned for a non-positive label width.
pub const INVALID_WIDTH: &str = "Error: Label width must be > 0.";

/// Outcome of a cylinder search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// At least one cylinder fits.
    Found,
    /// Label width was not positive.
    InvalidWidth,
    /// No tooth count gives a gap inside the allowed range.
    NoSolution,
}

/// Result of [`find_cylinder_specifications`].
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderSearch {
    /// Label width searched for (mm).
    pub label_width: f64,
    /// Preferred cylinder, if any.
    pub best: Option<CylinderSolution>,
    /// All feasible cylinders sorted by teeth ascending, then repeats descending.
    pub solutions: Vec<CylinderSolution>,
    pub status: SearchStatus,
    /// Human-readable diagnostic.
    pub message: String,
}

impl CylinderSearch {
    fn failed(label_width: f64, status: SearchStatus, message: String) -> Self {
        Self {
            label_width,
            best: None,
            solutions: Vec::new(),
            status,
            message,
        }
    }

    /// Feasible cylinders other than the best one.
    pub fn alternatives(&self) -> &[CylinderSolution] {
        self.solutions.get(1..).unwrap_or(&[])
    }

    /// Convert a failed search into an error, keeping the solutions otherwise.
    pub fn into_result(
        self,
        press: &PressConfig,
    ) -> Result<(CylinderSolution, Vec<CylinderSolution>)> {
        match (self.status, self.best) {
            (SearchStatus::Found, Some(best)) => Ok((best, self.solutions)),
            (SearchStatus::InvalidWidth, _) => Err(QuoteError::InvalidWidth {
                width: self.label_width,
            }),
            _ => Err(QuoteError::NoCylinder {
                width: self.label_width,
                z_min: press.z_min,
                z_max: press.z_max,
                gap_min: press.gap_min,
                gap_max: press.gap_max,
            }),
        }
    }
}

/// Find every cylinder that can print labels of `label_width` (mm) and pick the best.
///
/// For each tooth count in the press range, the circumference is divided into
/// `N` repeats and the leftover gap must lie within the allowed gap range.
/// The best solution is the smallest cylinder, and on that cylinder the most
/// repeats per revolution.
pub fn find_cylinder_specifications(label_width: f64, press: &PressConfig) -> CylinderSearch {
    if label_width.is_nan() || label_width <= 0.0 {
        return CylinderSearch::failed(
            label_width,
            SearchStatus::InvalidWidth,
            INVALID_WIDTH.to_string(),
        );
    }

    let segment_min = label_width + press.gap_min;
    let mut solutions = Vec::new();

    if segment_min > EPS {
        for teeth in press.z_min..=press.z_max {
            let circumference = f64::from(teeth) * press.pitch;
            let max_repeats = (circumference / segment_min).floor() as u32;

            for repeats in 1..=max_repeats {
                let gap = circumference / f64::from(repeats) - label_width;
                if float_cmp::in_range(gap, press.gap_min, press.gap_max, GAP_TOLERANCE) {
                    solutions.push(CylinderSolution {
                        teeth,
                        circumference,
                        repeats,
                        gap,
                    });
                }
            }
        }
    }

    if solutions.is_empty() {
        let message = format!(
            "No cylinder found ({}-{} teeth) for W={:.3}mm with G={:.1}-{:.1}mm.",
            press.z_min, press.z_max, label_width, press.gap_min, press.gap_max
        );
        debug!("{}", message);
        return CylinderSearch::failed(label_width, SearchStatus::NoSolution, message);
    }

    solutions.sort_by(|a, b| a.teeth.cmp(&b.teeth).then(b.repeats.cmp(&a.repeats)));

    debug!(
        "Found {} cylinder solution(s) for W={:.3}mm, best Z={} x={}",
        solutions.len(),
        label_width,
        solutions[0].teeth,
        solutions[0].repeats
    );

    CylinderSearch {
        label_width,
        best: solutions.first().copied(),
        solutions,
        status: SearchStatus::Found,
        message: SEARCH_OK.to_string(),
    }
}
