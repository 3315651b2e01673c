//! label-quote - CLI tool to quote rotary label printing jobs.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use label_quote::config::MACHINE_SPEED_DEFAULT;
use label_quote::{
    quote_job, validate_job, JobInput, Material, PressConfig, QuoteReport, Rates, ToolType,
};

/// Estimate cost and selling price of a label printing job.
#[derive(Parser, Debug)]
#[command(name = "label-quote")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Label width along the cylinder circumference (mm)
    #[arg(short = 'W', long)]
    width: f64,

    /// Label height across the cylinder width (mm)
    #[arg(short = 'H', long)]
    height: f64,

    /// Desired quantity (pieces)
    #[arg(short, long)]
    quantity: u64,

    /// Number of printed colors (1-8)
    #[arg(short, long, default_value_t = 1)]
    colors: u8,

    /// Blank labels, no ink and no plates
    #[arg(long)]
    blank: bool,

    /// Add UV varnish
    #[arg(long)]
    uv_varnish: bool,

    /// Average machine speed (m/min)
    #[arg(short, long, default_value_t = MACHINE_SPEED_DEFAULT)]
    speed: u32,

    /// Cutting tool: none, semirotary or rotary
    #[arg(short, long, default_value = "none")]
    tool: ToolType,

    /// Identifier of the existing tool (with --tool none)
    #[arg(long)]
    existing_tool: Option<String>,

    /// Material: paper-chrome, plastic-ppw or thermal-paper
    #[arg(short, long, default_value = "paper-chrome")]
    material: Material,

    /// Override the selected material's price (RSD/m²)
    #[arg(long)]
    material_price: Option<f64>,

    /// Ink price (RSD/kg)
    #[arg(long)]
    ink_price: Option<f64>,

    /// UV varnish price (RSD/kg)
    #[arg(long)]
    varnish_price: Option<f64>,

    /// Machine labor price (RSD/h)
    #[arg(long)]
    labor_price: Option<f64>,

    /// Plate price per color (RSD)
    #[arg(long)]
    plate_price: Option<f64>,

    /// Semirotary tool price (RSD)
    #[arg(long)]
    semirotary_price: Option<f64>,

    /// Rotary tool price (RSD)
    #[arg(long)]
    rotary_price: Option<f64>,

    /// Profit coefficient on material cost (0.01-2.00)
    #[arg(long)]
    profit: Option<f64>,

    /// Load rates from a JSON file
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Write the effective rates to a JSON file
    #[arg(long)]
    save_rates: Option<PathBuf>,

    /// Client name for the report
    #[arg(long)]
    client: Option<String>,

    /// Product or label name for the report
    #[arg(long)]
    product: Option<String>,

    /// Print the quote as JSON
    #[arg(long)]
    json: bool,

    /// Validate only, don't quote
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn rates(&self) -> Result<Rates> {
        let mut rates = match &self.rates {
            Some(path) => Rates::load(path)
                .with_context(|| format!("Failed to load rates from {}", path.display()))?,
            None => Rates::default(),
        };

        let overrides = [
            (self.ink_price, &mut rates.ink_price_per_kg),
            (self.varnish_price, &mut rates.varnish_price_per_kg),
            (self.labor_price, &mut rates.labor_price_per_hour),
            (self.plate_price, &mut rates.plate_price_per_color),
            (self.semirotary_price, &mut rates.tool_price_semirotary),
            (self.rotary_price, &mut rates.tool_price_rotary),
            (self.profit, &mut rates.profit_coefficient),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(price) = self.material_price {
            rates.set_material_price(self.material, price);
        }

        Ok(rates)
    }

    fn job(&self) -> JobInput {
        JobInput {
            label_width: self.width,
            label_height: self.height,
            quantity: self.quantity,
            blank: self.blank,
            colors: self.colors,
            uv_varnish: self.uv_varnish,
            machine_speed: self.speed,
            tool: self.tool,
            existing_tool: self.existing_tool.clone(),
            material: self.material,
            client: self.client.clone(),
            product: self.product.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let press = PressConfig::default();
    let rates = args.rates()?;
    let job = args.job();

    // Validate
    let validation = validate_job(&job, &rates, &press);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    if let Some(path) = &args.save_rates {
        rates
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Saved rates: {}", path.display());
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let quote = match quote_job(&job, &press, &rates) {
        Ok(quote) => quote,
        Err(err) if err.is_warning() => {
            warn!("{}", err);
            anyhow::bail!("No quote produced");
        }
        Err(err) => return Err(err).context("Calculation error"),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&quote)?;
        println!("{}", json);
        return Ok(());
    }

    print!("{}", QuoteReport::new(&job, &quote, &rates, &press));

    Ok(())
}
