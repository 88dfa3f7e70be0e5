//! Shared output contract for vendor comparisons.
//!
//! Every renderer (terminal, JSON, Markdown) reads from these structs and
//! performs only display-level formatting. Aggregate totals are derived once
//! by the analysis pass and never re-derived downstream, so field semantics,
//! sign conventions and rounding policy live here:
//!
//! - Savings deltas are signed: positive means the evaluated vendor costs
//!   MORE than the reference vendor.
//! - Fractions (`total_roi`, `reduction`) live in natural units; percentage
//!   twins are the fraction times 100.
//! - Stored values are unrounded. Rounding happens in `crate::output`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::config::CalculationConfiguration;
use crate::vendors::PerformanceProfile;

/// Capex/opex/hidden cost buckets for one vendor over the analysis horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// One-time capital expenditure (hardware, professional services).
    pub total_capex: f64,
    /// Recurring expenditure over the horizon (licensing, support).
    pub total_opex: f64,
    /// Sum of the hidden cost breakdown.
    pub total_hidden_costs: f64,
    /// Always `total_capex + total_opex + total_hidden_costs`.
    pub total_tco: f64,
    /// TCO delta against the cheapest other vendor; positive = costs more.
    pub savings_vs_competitor: f64,
    /// TCO delta against the Portnox reference; positive = costs more.
    pub savings_vs_portnox: f64,
    /// Premium over the Portnox reference, `(tco / reference - 1) * 100`.
    pub savings_percent: f64,
}

/// Return on investment relative to the baseline competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiSummary {
    /// `(competitor_tco - vendor_tco) / vendor_tco`, 0.0 on a zero base.
    pub total_roi: f64,
    /// `total_roi * 100`.
    pub roi_percentage: f64,
    /// Months until cumulative savings cover upfront cost. `None` means the
    /// vendor never pays back against the baseline (non-positive savings).
    pub payback_months: Option<f64>,
}

/// Expected-loss comparison across protection levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Expected annual breach cost with no NAC deployed.
    pub annual_risk_unprotected: f64,
    /// Expected annual breach cost with a basic NAC deployment.
    pub annual_risk_basic: f64,
    /// Expected annual breach cost with this vendor's NAC.
    pub annual_risk_protected: f64,
    /// `1 - protected/unprotected`, in [0, 1]; 0.0 on a zero baseline.
    pub reduction: f64,
    /// Expected loss avoided over the horizon versus no protection.
    pub breach_cost_avoidance: f64,
    /// Mean incident recovery time under this vendor's protection.
    pub mean_recovery_days: f64,
}

/// Staffing impact versus the baseline competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalSummary {
    /// FTE headcount freed relative to the baseline competitor, floored at 0.
    pub fte_saved: f64,
    /// `fte_saved * avg_fte_cost * years`.
    pub staffing_cost_avoided: f64,
}

/// Hidden cost buckets for one vendor.
///
/// One-time buckets (infrastructure, migration, opportunity, downtime) do
/// not scale with the horizon; the rest are linear in `years`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenCostBreakdown {
    pub training: f64,
    pub downtime: f64,
    pub staffing: f64,
    pub infrastructure: f64,
    pub migration: f64,
    pub compliance: f64,
    pub opportunity: f64,
    /// Sum of the seven buckets above.
    pub total: f64,
    /// FTE fraction this vendor requires for ongoing administration.
    pub fte_requirement: f64,
}

/// Complete result for one vendor under one configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Stable vendor key, e.g. `cisco_ise`.
    pub vendor: String,
    pub vendor_name: String,
    pub short_name: String,
    #[serde(rename = "financialSummary")]
    pub financial_summary: FinancialSummary,
    pub roi: RoiSummary,
    pub risk: RiskSummary,
    pub operational: OperationalSummary,
    pub hidden_costs: HiddenCostBreakdown,
    pub performance: PerformanceProfile,
    pub certifications: BTreeSet<String>,
}

impl CalculationResult {
    pub fn total_tco(&self) -> f64 {
        self.financial_summary.total_tco
    }
}

/// Top-level report handed to output writers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub catalog_version: String,
    pub configuration: CalculationConfiguration,
    /// Results in stable ascending `total_tco` order.
    pub results: Vec<CalculationResult>,
}

impl AnalysisReport {
    pub fn new(
        catalog_version: impl Into<String>,
        configuration: CalculationConfiguration,
        results: Vec<CalculationResult>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            catalog_version: catalog_version.into(),
            configuration,
            results,
        }
    }

    /// The lowest-TCO result, if any results exist.
    pub fn best(&self) -> Option<&CalculationResult> {
        self.results.first()
    }
}
