//! Integration tests for the quoting pipeline.
//!
//! These tests run whole jobs through `quote_job` and check the relationships
//! between stages rather than each stage in isolation:
//! - Reference job figures for a 76 × 76 mm label
//! - Degenerate layouts and failed cylinder searches
//! - Pricing identities (selling = cost + profit, profit on material only)
//! - Rate files on disk

use insta::assert_snapshot;
use label_quote::{
    find_cylinder_specifications, format_time, quote_job, validate_job, JobInput, Material,
    PressConfig, QuoteError, QuoteReport, Rates, SearchStatus, ToolType,
};
use pretty_assertions::assert_eq;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn press() -> PressConfig {
    PressConfig::default()
}

// ==================== Reference job ====================

#[test]
fn test_reference_job_figures() {
    let job = JobInput::new(76.0, 76.0, 100_000);
    let quote = quote_job(&job, &press(), &Rates::default()).expect("quote");

    assert_eq!(quote.cylinder.teeth, 75);
    assert_eq!(quote.cylinder.repeats, 3);
    assert_eq!(quote.layout.labels_across, 2);
    assert_eq!(quote.layout.required_width, 167.0);
    assert_eq!(quote.labels_per_cycle(), 6);

    let c = &quote.consumption;
    assert_close(c.production_length, 3968.75);
    assert_close(c.production_area, 662.78125);
    assert_eq!(c.waste_length, 100.0);
    assert_close(c.waste_area, 16.7);
    assert_close(c.total_area(), 679.48125);

    assert_eq!(quote.time.setup, 30.0);
    assert_close(quote.time.production, 132.291_666_666_666_66);
    assert_eq!(quote.time.cleanup, 30.0);

    let costs = &quote.costs;
    assert_close(costs.ink, 4672.607_812_5);
    assert_eq!(costs.varnish, 0.0);
    assert_eq!(costs.plates, 2000.0);
    assert_close(costs.material, 27_145.275_937_5);
    assert_eq!(costs.tool, 0.0);
    assert_close(costs.labor, 9614.583_333_333_334);
    assert_close(costs.production_cost(), 43_432.467_083_333_34);
    assert_close(costs.profit, 5429.055_187_5);
    assert_close(costs.selling_price(), 48_861.522_270_833_34);
    assert_close(costs.price_per_piece(), 0.488_615_222_708_333_4);

    assert!(quote.diagnostics.is_empty());
    assert_eq!(quote.tool_description, "Not selected");
}

#[test]
fn test_blank_job_waste_and_setup() {
    let mut job = JobInput::new(76.0, 76.0, 250_000);
    job.blank = true;
    job.colors = 6;
    let quote = quote_job(&job, &press(), &Rates::default()).expect("quote");

    assert_eq!(quote.consumption.waste_length, 50.0);
    assert_eq!(quote.time.setup, 30.0);
    assert_eq!(quote.costs.ink, 0.0);
    assert_eq!(quote.costs.plates, 0.0);
}

#[test]
fn test_tool_costs_follow_selection() {
    let rates = Rates::default();
    let mut job = JobInput::default();

    let mut totals = Vec::new();
    for tool in [ToolType::Existing, ToolType::Semirotary, ToolType::Rotary] {
        job.tool = tool;
        let quote = quote_job(&job, &press(), &rates).expect("quote");
        totals.push(quote.costs.production_cost());
    }

    assert_close(totals[1] - totals[0], 6000.0);
    assert_close(totals[2] - totals[0], 8000.0);
}

// ==================== Failures and degradation ====================

#[test]
fn test_invalid_width_stops_pipeline() {
    let search = find_cylinder_specifications(0.0, &press());
    assert_eq!(search.status, SearchStatus::InvalidWidth);
    assert_eq!(search.best, None);
    assert!(search.solutions.is_empty());
    assert!(search.message.contains("must be"));

    let job = JobInput::new(-3.0, 76.0, 1000);
    match quote_job(&job, &press(), &Rates::default()) {
        Err(QuoteError::InvalidWidth { width }) => assert_eq!(width, -3.0),
        other => panic!("Expected InvalidWidth, got {:?}", other),
    }
}

#[test]
fn test_no_cylinder_is_warning() {
    let job = JobInput::new(300.0, 76.0, 1000);
    let err = quote_job(&job, &press(), &Rates::default()).unwrap_err();
    assert!(err.is_warning());
    assert!(err.to_string().starts_with("No cylinder found (70-140 teeth)"));
}

#[test]
fn test_label_too_tall_degrades_inline() {
    let job = JobInput::new(76.0, 195.0, 1000);
    let quote = quote_job(&job, &press(), &Rates::default()).expect("quote");

    assert_eq!(quote.layout.labels_across, 0);
    assert_eq!(quote.consumption.production_length, 0.0);
    assert_eq!(quote.consumption.total_area(), 0.0);
    assert_eq!(quote.costs.material, 0.0);
    assert_eq!(quote.costs.profit, 0.0);
    // Setup and cleanup still run.
    assert_eq!(quote.time.total(), 60.0);
    assert_eq!(quote.costs.labor, 3000.0);
    assert_eq!(quote.diagnostics, vec!["y=0, consumption N/A.".to_string()]);
}

#[test]
fn test_exceeded_material_width_is_reported() {
    let press = PressConfig {
        max_material_width: 160.0,
        ..Default::default()
    };
    let quote = quote_job(&JobInput::default(), &press, &Rates::default()).expect("quote");
    assert!(quote.layout.width_exceeded);
    assert_eq!(
        quote.diagnostics,
        vec!["Material width 167.00mm exceeds the 160mm maximum".to_string()]
    );
}

// ==================== Pricing identities ====================

#[test]
fn test_selling_price_identity_across_jobs() {
    let rates = Rates::default();
    for (width, height, quantity, colors, varnish) in [
        (30.0, 20.0, 10_000, 1, false),
        (50.0, 90.0, 55_555, 4, true),
        (100.0, 150.0, 1, 8, true),
        (12.5, 12.5, 3_000_000, 2, false),
    ] {
        let mut job = JobInput::new(width, height, quantity);
        job.colors = colors;
        job.uv_varnish = varnish;
        let quote = quote_job(&job, &press(), &rates).expect("quote");
        let costs = &quote.costs;
        assert_eq!(costs.selling_price(), costs.production_cost() + costs.profit);
        assert_close(costs.profit, costs.material * rates.profit_coefficient);
    }
}

#[test]
fn test_profit_scales_with_coefficient() {
    let job = JobInput::default();
    let mut rates = Rates::default();
    rates.profit_coefficient = 0.5;
    let half = quote_job(&job, &press(), &rates).unwrap().costs.profit;
    rates.profit_coefficient = 1.0;
    let full = quote_job(&job, &press(), &rates).unwrap().costs.profit;
    assert_close(full, half * 2.0);
}

#[test]
fn test_material_choice_changes_material_cost_only() {
    let mut job = JobInput::default();
    let rates = Rates::default();
    let paper = quote_job(&job, &press(), &rates).unwrap();
    job.material = Material::PlasticPpw;
    let plastic = quote_job(&job, &press(), &rates).unwrap();

    assert_eq!(paper.costs.ink, plastic.costs.ink);
    assert_eq!(paper.costs.labor, plastic.costs.labor);
    assert_close(
        plastic.costs.material / paper.costs.material,
        54.05 / 39.95,
    );
}

#[test]
fn test_quote_is_idempotent() {
    let mut job = JobInput::new(42.3, 61.7, 77_777);
    job.colors = 5;
    job.uv_varnish = true;
    job.tool = ToolType::Semirotary;
    let rates = Rates::default();

    let first = quote_job(&job, &press(), &rates).unwrap();
    let second = quote_job(&job, &press(), &rates).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

// ==================== Rendering ====================

#[test]
fn test_format_time_table() {
    let rendered: Vec<String> = [0.0, 12.4, 59.5, 60.0, 61.0, 150.0, 192.29, -1.0]
        .iter()
        .map(|m| format!("{} -> {}", m, format_time(*m)))
        .collect();

    assert_snapshot!(rendered.join("\n"), @r"
    0 -> 0 min
    12.4 -> 12 min
    59.5 -> 1 h
    60 -> 1 h
    61 -> 1 h 1 min
    150 -> 2 h 30 min
    192.29 -> 3 h 12 min
    -1 -> N/A
    ");
}

#[test]
fn test_report_cost_lines() {
    let job = JobInput::default();
    let rates = Rates::default();
    let quote = quote_job(&job, &press(), &rates).unwrap();
    let text = QuoteReport::new(&job, &quote, &rates, &press()).to_string();

    assert!(text.contains("Qty:100,000"));
    assert!(text.contains("3,968.75 m"));
    assert!(text.contains("27,145.28 RSD"));
    assert!(text.contains("48,861.52 RSD"));
    assert!(text.contains("0.4886 RSD"));
    assert!(text.contains("TOTAL Work Time:                3 h 12 min"));
}

// ==================== Validation ====================

#[test]
fn test_validation_blocks_out_of_range_input() {
    let mut job = JobInput::default();
    job.machine_speed = 500;
    job.colors = 12;
    let result = validate_job(&job, &Rates::default(), &press());
    assert!(!result.passed);
    assert_eq!(result.errors.len(), 2);
}

// ==================== Rate files ====================

#[test]
fn test_rates_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rates.json");

    let mut rates = Rates::default();
    rates.labor_price_per_hour = 3500.0;
    rates.set_material_price(Material::ThermalPaper, 51.2);
    rates.save(&path).unwrap();

    let loaded = Rates::load(&path).unwrap();
    assert_eq!(loaded, rates);
}

#[test]
fn test_rates_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = Rates::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, QuoteError::FileNotFound { .. }));
}

#[test]
fn test_rates_file_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rates.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = Rates::load(&path).unwrap_err();
    assert!(matches!(err, QuoteError::Json(_)));
}
