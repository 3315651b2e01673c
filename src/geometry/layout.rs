//! Label columns across the web width.

use crate::config::{PressConfig, EPS};
use crate::model::LayoutResult;

/// Number of labels of `label_height` (mm) that fit side by side within
/// `working_width`, separated by `width_gap`.
pub fn calculate_number_across_width(label_height: f64, working_width: f64, width_gap: f64) -> u32 {
    if label_height.is_nan() || label_height <= 0.0 || label_height > working_width {
        return 0;
    }
    // Exactly one column fits; the general formula can overcount here.
    if label_height * 2.0 + width_gap > working_width {
        return 1;
    }
    let denominator = label_height + width_gap;
    if denominator <= EPS {
        return 0;
    }
    ((working_width + width_gap) / denominator).floor() as u32
}

/// Material width (mm) for `labels_across` columns, including edge trim.
pub fn calculate_material_width(
    labels_across: u32,
    label_height: f64,
    width_gap: f64,
    width_waste: f64,
) -> f64 {
    if labels_across == 0 {
        return 0.0;
    }
    let labels = f64::from(labels_across);
    let gaps = f64::from(labels_across.saturating_sub(1));
    labels * label_height + gaps * width_gap + width_waste
}

/// Across-web layout for a label height on the given press.
pub fn calculate_layout(label_height: f64, press: &PressConfig) -> LayoutResult {
    let labels_across =
        calculate_number_across_width(label_height, press.working_width, press.width_gap);
    let required_width = calculate_material_width(
        labels_across,
        label_height,
        press.width_gap,
        press.width_waste,
    );

    LayoutResult {
        labels_across,
        required_width,
        width_exceeded: required_width > press.max_material_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== calculate_number_across_width tests ====================

    #[test]
    fn test_across_76mm() {
        assert_eq!(calculate_number_across_width(76.0, 190.0, 5.0), 2);
    }

    #[test]
    fn test_across_degenerate_heights() {
        assert_eq!(calculate_number_across_width(0.0, 190.0, 5.0), 0);
        assert_eq!(calculate_number_across_width(-10.0, 190.0, 5.0), 0);
        assert_eq!(calculate_number_across_width(190.5, 190.0, 5.0), 0);
        assert_eq!(calculate_number_across_width(f64::NAN, 190.0, 5.0), 0);
    }

    #[test]
    fn test_across_single_column_boundary() {
        assert_eq!(calculate_number_across_width(190.0, 190.0, 5.0), 1);
        assert_eq!(calculate_number_across_width(93.0, 190.0, 5.0), 1);
        assert_eq!(calculate_number_across_width(92.5, 190.0, 5.0), 2);
    }

    #[test]
    fn test_across_small_labels() {
        assert_eq!(calculate_number_across_width(10.0, 190.0, 5.0), 13);
        assert_eq!(calculate_number_across_width(1.0, 190.0, 5.0), 32);
    }

    #[test]
    fn test_across_monotonic_in_height() {
        let mut previous = u32::MAX;
        let mut height = 0.5;
        while height <= 200.0 {
            let across = calculate_number_across_width(height, 190.0, 5.0);
            assert!(across <= previous, "count rose at H={}", height);
            previous = across;
            height += 0.5;
        }
    }

    // ==================== calculate_material_width tests ====================

    #[test]
    fn test_material_width_76mm() {
        assert_eq!(calculate_material_width(2, 76.0, 5.0, 10.0), 167.0);
    }

    #[test]
    fn test_material_width_single_label_has_no_gap() {
        assert_eq!(calculate_material_width(1, 76.0, 5.0, 10.0), 86.0);
        assert_eq!(calculate_material_width(0, 76.0, 5.0, 10.0), 0.0);
    }

    #[test]
    fn test_material_width_monotonic() {
        let mut previous = 0.0;
        for labels in 0..20 {
            let width = calculate_material_width(labels, 12.0, 5.0, 10.0);
            assert!(width >= previous);
            previous = width;
        }
    }

    // ==================== calculate_layout tests ====================

    #[test]
    fn test_layout_within_max_width() {
        let layout = calculate_layout(76.0, &PressConfig::default());
        assert_eq!(layout.labels_across, 2);
        assert_eq!(layout.required_width, 167.0);
        assert!(!layout.width_exceeded);
        assert!(layout.fits());
    }

    #[test]
    fn test_layout_exceeds_max_width() {
        // One 190mm column plus 10mm trim is exactly 200mm, which is allowed.
        let layout = calculate_layout(190.0, &PressConfig::default());
        assert_eq!(layout.required_width, 200.0);
        assert!(!layout.width_exceeded);

        let press = PressConfig {
            max_material_width: 150.0,
            ..Default::default()
        };
        assert!(calculate_layout(76.0, &press).width_exceeded);
    }

    #[test]
    fn test_layout_no_fit() {
        let layout = calculate_layout(250.0, &PressConfig::default());
        assert_eq!(layout, LayoutResult::default());
        assert!(!layout.fits());
    }
}
