pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{
    AnalysisReport, CalculationResult, FinancialSummary, HiddenCostBreakdown, OperationalSummary,
    RiskSummary, RoiSummary,
};
