use std::io::Write;

use crate::core::{AnalysisReport, CalculationResult};
use crate::output::format::{format_currency, format_payback, format_percent, format_percent_whole};
use crate::output::OutputWriter;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_financial_section(report)?;
        self.write_risk_section(report)?;
        self.write_roi_section(report)?;
        self.write_compliance_section(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# NAC Vendor TCO Comparison")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Catalog version: {}", report.catalog_version)?;
        let c = &report.configuration;
        writeln!(
            self.writer,
            "Scope: {} devices, {} users, {} year(s)",
            c.devices, c.users, c.years
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_financial_section(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Total Cost of Ownership")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Vendor | Capex | Opex | Hidden | Total TCO | vs Portnox |"
        )?;
        writeln!(
            self.writer,
            "|--------|-------|------|--------|-----------|------------|"
        )?;
        for result in &report.results {
            let f = &result.financial_summary;
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                result.short_name,
                format_currency(f.total_capex),
                format_currency(f.total_opex),
                format_currency(f.total_hidden_costs),
                format_currency(f.total_tco),
                premium_label(result)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_risk_section(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Breach Risk")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Vendor | Annual risk (protected) | Risk reduction | Breach cost avoided | Mean recovery |"
        )?;
        writeln!(
            self.writer,
            "|--------|------------------------|----------------|---------------------|---------------|"
        )?;
        for result in &report.results {
            let r = &result.risk;
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {:.1} days |",
                result.short_name,
                format_currency(r.annual_risk_protected),
                format_percent(r.reduction * 100.0),
                format_currency(r.breach_cost_avoidance),
                r.mean_recovery_days
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_roi_section(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## ROI and Operations")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Vendor | ROI | Payback | FTE saved | Staffing cost avoided |"
        )?;
        writeln!(
            self.writer,
            "|--------|-----|---------|-----------|-----------------------|"
        )?;
        for result in &report.results {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.2} | {} |",
                result.short_name,
                format_percent(result.roi.roi_percentage),
                format_payback(result.roi.payback_months),
                result.operational.fte_saved,
                format_currency(result.operational.staffing_cost_avoided)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_compliance_section(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Compliance Certifications")?;
        writeln!(self.writer)?;
        for result in &report.results {
            let certs: Vec<&str> = result
                .certifications
                .iter()
                .map(String::as_str)
                .collect();
            writeln!(
                self.writer,
                "- **{}**: {}",
                result.short_name,
                if certs.is_empty() {
                    "none listed".to_string()
                } else {
                    certs.join(", ")
                }
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn premium_label(result: &CalculationResult) -> String {
    let premium = result.financial_summary.savings_percent;
    if premium.abs() < 0.5 {
        "reference".to_string()
    } else if premium > 0.0 {
        format!("+{} more", format_percent_whole(premium))
    } else {
        format!("{} less", format_percent_whole(-premium))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::config::CalculationConfiguration;
    use crate::vendors::VendorCatalog;

    #[test]
    fn renders_all_sections() {
        let config = CalculationConfiguration::default();
        let results = analyze(&config, VendorCatalog::builtin()).unwrap();
        let report = AnalysisReport::new("test", config, results);

        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&report)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("# NAC Vendor TCO Comparison"));
        assert!(text.contains("## Total Cost of Ownership"));
        assert!(text.contains("## Breach Risk"));
        assert!(text.contains("## ROI and Operations"));
        assert!(text.contains("## Compliance Certifications"));
        assert!(text.contains("Portnox"));
    }
}
