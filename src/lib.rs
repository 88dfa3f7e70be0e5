// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod core;
pub mod cost;
pub mod output;
pub mod risk;
pub mod roi;
pub mod vendors;

// Re-export commonly used types
pub use crate::core::{
    AnalysisReport, CalculationResult, Error, FinancialSummary, HiddenCostBreakdown,
    OperationalSummary, Result, RiskSummary, RoiSummary,
};

pub use crate::analysis::analyze;
pub use crate::comparison::{percent_premium, rank_by_tco, savings_delta};
pub use crate::config::{load_config, CalculationConfiguration};
pub use crate::cost::{compute_direct_costs, compute_hidden_costs, DirectCosts};
pub use crate::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::risk::{annual_risk_cost, breach_cost_avoidance, risk_reduction};
pub use crate::roi::{payback_months, total_roi};
pub use crate::vendors::{
    ProtectionLevel, ThreatOutcome, ThreatScenario, VendorCatalog, VendorProfile, PORTNOX_KEY,
};
