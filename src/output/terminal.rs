use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, ContentArrangement, Table};
use std::io::Write;

use crate::core::{AnalysisReport, CalculationResult};
use crate::output::format::{format_currency, format_payback, format_percent, format_percent_whole};
use crate::output::OutputWriter;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_tco_table(report)?;
        self.write_risk_table(report)?;
        self.write_summary_line(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let c = &report.configuration;
        writeln!(
            self.writer,
            "{}",
            "NAC Vendor TCO Comparison".bold().underline()
        )?;
        writeln!(
            self.writer,
            "{} devices / {} users over {} year(s), catalog {}",
            c.devices, c.users, c.years, report.catalog_version
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_tco_table(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Vendor", "Capex", "Opex", "Hidden", "Total TCO", "vs Portnox", "ROI", "Payback",
            ]);

        for result in &report.results {
            let f = &result.financial_summary;
            table.add_row(vec![
                Cell::new(&result.short_name),
                currency_cell(f.total_capex),
                currency_cell(f.total_opex),
                currency_cell(f.total_hidden_costs),
                currency_cell(f.total_tco),
                Cell::new(premium_label(result)).set_alignment(CellAlignment::Right),
                Cell::new(format_percent(result.roi.roi_percentage))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format_payback(result.roi.payback_months))
                    .set_alignment(CellAlignment::Right),
            ]);
        }

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_risk_table(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Vendor",
                "Annual risk",
                "Reduction",
                "Breach cost avoided",
                "FTE saved",
            ]);

        for result in &report.results {
            let r = &result.risk;
            table.add_row(vec![
                Cell::new(&result.short_name),
                currency_cell(r.annual_risk_protected),
                Cell::new(format_percent(r.reduction * 100.0))
                    .set_alignment(CellAlignment::Right),
                currency_cell(r.breach_cost_avoidance),
                Cell::new(format!("{:.2}", result.operational.fte_saved))
                    .set_alignment(CellAlignment::Right),
            ]);
        }

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary_line(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let Some(best) = report.best() else {
            return Ok(());
        };
        writeln!(
            self.writer,
            "{} {} at {} total over {} year(s)",
            "Lowest TCO:".green().bold(),
            best.vendor_name,
            format_currency(best.total_tco()).green(),
            report.configuration.years
        )?;
        for result in report.results.iter().filter(|r| r.vendor != best.vendor) {
            let premium = crate::comparison::percent_premium(
                result.total_tco(),
                best.total_tco(),
            );
            writeln!(
                self.writer,
                "  {} costs {} more than {}",
                result.short_name,
                format_percent_whole(premium).yellow(),
                best.short_name
            )?;
        }
        Ok(())
    }
}

fn currency_cell(amount: f64) -> Cell {
    Cell::new(format_currency(amount)).set_alignment(CellAlignment::Right)
}

fn premium_label(result: &CalculationResult) -> String {
    let premium = result.financial_summary.savings_percent;
    if premium.abs() < 0.5 {
        "reference".to_string()
    } else if premium > 0.0 {
        format!("+{}", format_percent_whole(premium))
    } else {
        format_percent_whole(premium)
    }
}
