//! Text rendering of a quote for the terminal.

use crate::config::{PressConfig, Rates, CURRENCY};
use crate::estimate::format_time;
use crate::model::{JobInput, Quote};
use std::fmt;
use thousands::Separable;

/// Format a money or measurement value with two decimals and thousands separators.
pub fn money(value: f64) -> String {
    format!("{:.2}", value).separate_with_commas()
}

/// One-line summary of the job parameters.
pub fn parameter_summary(job: &JobInput, rates: &Rates) -> String {
    let colors = if job.blank {
        "Blank".to_string()
    } else {
        format!("{}C", job.print_colors())
    };
    format!(
        "W:{:.2}×H:{:.2}mm | Qty:{} | {}{} | Mat:'{}' | Tool:'{}' | Speed:{}m/min | Prof.Coef:{:.2}",
        job.label_width,
        job.label_height,
        job.quantity.separate_with_commas(),
        colors,
        if job.uv_varnish { "+V" } else { "" },
        job.material,
        job.tool_info(),
        job.machine_speed,
        rates.profit_coefficient
    )
}

/// A quote together with everything needed to explain it.
pub struct QuoteReport<'a> {
    pub job: &'a JobInput,
    pub quote: &'a Quote,
    pub rates: &'a Rates,
    pub press: &'a PressConfig,
}

impl<'a> QuoteReport<'a> {
    pub fn new(job: &'a JobInput, quote: &'a Quote, rates: &'a Rates, press: &'a PressConfig) -> Self {
        Self {
            job,
            quote,
            rates,
            press,
        }
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Calculation for: {} | Client: {}",
            self.job.product.as_deref().unwrap_or("[Product]"),
            self.job.client.as_deref().unwrap_or("[Client]")
        )?;
        writeln!(f, "Parameters: {}", parameter_summary(self.job, self.rates))?;
        writeln!(f)
    }

    fn write_geometry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cylinder = &self.quote.cylinder;
        let layout = &self.quote.layout;

        writeln!(f, "1. Cylinder and Template Configuration")?;
        writeln!(f, "  {:<32}{}", "Number of Teeth (Z):", cylinder.teeth)?;
        writeln!(f, "  {:<32}{:.3} mm", "Cylinder Circumference:", cylinder.circumference)?;
        writeln!(
            f,
            "  {:<32}{:.3} mm ({:.1}-{:.1} mm)",
            "Circumference Gap (G):", cylinder.gap, self.press.gap_min, self.press.gap_max
        )?;
        writeln!(f, "  {:<32}{}", "Templates Circumference (x):", cylinder.repeats)?;
        writeln!(
            f,
            "  {:<32}{} (on {}mm)",
            "Templates Width (y):", layout.labels_across, self.press.working_width
        )?;
        writeln!(
            f,
            "  {:<32}{} × {} ({}/cycle)",
            "Format (y × x):",
            layout.labels_across,
            cylinder.repeats,
            self.quote.labels_per_cycle()
        )?;
        writeln!(f)?;

        writeln!(f, "2. Material Width")?;
        if layout.fits() {
            let status = if layout.width_exceeded {
                format!("EXCEEDED! >{} mm", self.press.max_material_width)
            } else {
                format!("OK (<= {} mm)", self.press.max_material_width)
            };
            writeln!(
                f,
                "  {:<32}{:.2} mm  {}",
                "Required Material Width:", layout.required_width, status
            )?;
        } else {
            writeln!(f, "  y=0, material width N/A.")?;
        }
        writeln!(f)
    }

    fn write_consumption(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.quote.consumption;
        let layout = &self.quote.layout;

        writeln!(
            f,
            "3. Material Consumption for PRODUCTION ({} pcs)",
            self.job.quantity.separate_with_commas()
        )?;
        if layout.fits() {
            writeln!(f, "  {:<32}{} m", "Length (Production):", money(c.production_length))?;
            writeln!(f, "  {:<32}{} m²", "Area (Production):", money(c.production_area))?;
        } else {
            writeln!(f, "  y=0, consumption N/A.")?;
        }
        writeln!(f)?;

        writeln!(f, "4. Material Consumption for WASTE (Setup)")?;
        writeln!(
            f,
            "  {:<32}{} m ({})",
            "Length (Waste):",
            money(c.waste_length),
            c.waste_description
        )?;
        if layout.required_width > 0.0 {
            writeln!(f, "  {:<32}{} m²", "Area (Waste):", money(c.waste_area))?;
        } else {
            writeln!(f, "  Waste Area N/A (width=0)")?;
        }
        writeln!(f)?;

        writeln!(f, "5. TOTAL Estimated Material Consumption")?;
        writeln!(f, "  {:<32}{} m", "TOTAL Length:", money(c.total_length()))?;
        writeln!(f, "  {:<32}{} m²", "TOTAL Area:", money(c.total_area()))?;
        writeln!(f)
    }

    fn write_time(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.quote.time;

        writeln!(f, "6. Estimated Production Time")?;
        writeln!(
            f,
            "  {:<32}{} ({} × {}min)",
            "Setup Time:",
            format_time(t.setup),
            self.job.waste_colors(),
            self.press.setup_time_per_color
        )?;
        writeln!(
            f,
            "  {:<32}{} ({:.1}m / {}m/min)",
            "Production Time:",
            format_time(t.production),
            self.quote.consumption.production_length,
            self.job.machine_speed
        )?;
        writeln!(f, "  {:<32}{}", "Cleanup Time:", format_time(t.cleanup))?;
        writeln!(f, "  {:<32}{}", "TOTAL Work Time:", format_time(t.total()))?;
        writeln!(f)
    }

    fn write_alternatives(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut alternatives = self.quote.alternatives().peekable();
        if alternatives.peek().is_none() {
            return Ok(());
        }

        writeln!(f, "Other Possible Solutions (sorted by Z ↑, then x ↓)")?;
        writeln!(f, "  {:>5}  {:>14}  {:>4}  {:>10}", "Z", "Circumference", "x", "G Circum.")?;
        for s in alternatives {
            writeln!(
                f,
                "  {:>5}  {:>14.3}  {:>4}  {:>10.3}",
                s.teeth, s.circumference, s.repeats, s.gap
            )?;
        }
        writeln!(f)
    }

    fn write_costs(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let costs = &self.quote.costs;
        let c = &self.quote.consumption;

        writeln!(f, "Cost Calculation")?;
        writeln!(
            f,
            "  {:<32}{} {} (Ink:{}, Varnish:{})",
            "Cost: Ink + Varnish:",
            money(costs.ink_and_varnish()),
            CURRENCY,
            money(costs.ink),
            money(costs.varnish)
        )?;
        writeln!(
            f,
            "  {:<32}{} {} ({}×{:.2} {}/color)",
            "Cost: Plates:",
            money(costs.plates),
            CURRENCY,
            self.job.print_colors(),
            self.rates.plate_price_per_color,
            CURRENCY
        )?;
        writeln!(
            f,
            "  {:<32}{} {} ({}m²×{:.2}{}/m²)",
            "Cost: Material:",
            money(costs.material),
            CURRENCY,
            money(c.total_area()),
            self.quote.material_price,
            CURRENCY
        )?;
        writeln!(
            f,
            "  {:<32}{} {} ({})",
            "Cost: Tool:",
            money(costs.tool),
            CURRENCY,
            self.quote.tool_description
        )?;
        writeln!(
            f,
            "  {:<32}{} {} ({} ({:.2}h)×{:.2}{}/h)",
            "Cost: Machine Labor:",
            money(costs.labor),
            CURRENCY,
            format_time(self.quote.time.total()),
            self.quote.time.total_hours(),
            self.rates.labor_price_per_hour,
            CURRENCY
        )?;
        writeln!(f)?;

        writeln!(f, "Profit and Final Selling Price")?;
        writeln!(
            f,
            "  {:<32}{} {}",
            "Total Production Cost:",
            money(costs.production_cost()),
            CURRENCY
        )?;
        writeln!(
            f,
            "  {:<32}{} {} ({:.2} × Material Cost)",
            "Profit:",
            money(costs.profit),
            CURRENCY,
            self.rates.profit_coefficient
        )?;
        writeln!(
            f,
            "  {:<32}{} {}",
            "TOTAL PRICE (Selling):",
            money(costs.selling_price()),
            CURRENCY
        )?;
        writeln!(
            f,
            "  {:<32}{:.4} {}",
            "Selling Price per Piece:",
            costs.price_per_piece(),
            CURRENCY
        )?;
        writeln!(f)
    }

    fn write_footer(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for note in &self.quote.diagnostics {
            writeln!(f, "Note: {}", note)?;
        }
        writeln!(
            f,
            "MaxMat={}mm | LaborPrice={:.2}{}/h | Tools: Semi={:.2}, Rot={:.2} | Plate={:.2}{}/color",
            self.press.max_material_width,
            self.rates.labor_price_per_hour,
            CURRENCY,
            self.rates.tool_price_semirotary,
            self.rates.tool_price_rotary,
            self.rates.plate_price_per_color,
            CURRENCY
        )
    }
}

impl fmt::Display for QuoteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        self.write_geometry(f)?;
        self.write_consumption(f)?;
        self.write_time(f)?;
        self.write_alternatives(f)?;
        self.write_costs(f)?;
        self.write_footer(f)
    }
}
