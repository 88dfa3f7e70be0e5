//! Cost aggregation: hidden cost breakdown and direct capex/opex derivation.
//!
//! All formulas are exact over the catalog constants. Time-scaled buckets
//! (training ongoing, staffing, compliance) are linear in `years`; one-time
//! buckets (infrastructure, migration, opportunity, downtime) are invariant
//! under the horizon.

use crate::core::HiddenCostBreakdown;
use crate::vendors::{CostProfile, HiddenCostProfile};

/// Direct costs over the analysis horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectCosts {
    /// One-time: hardware plus professional services.
    pub capex: f64,
    /// Recurring: licensing plus support, scaled by the horizon.
    pub opex: f64,
}

/// Compute the hidden cost breakdown for one vendor over `years`.
///
/// The function is total: `years = 0` zeroes the time-scaled buckets and
/// leaves the one-time buckets intact. The configuration boundary rejects
/// zero-year horizons before analysis, so that case only arises when the
/// breakdown is evaluated directly.
pub fn compute_hidden_costs(hidden: &HiddenCostProfile, years: u32) -> HiddenCostBreakdown {
    let years = f64::from(years);

    let training = hidden.training_initial + hidden.training_ongoing * years;
    let downtime = hidden.downtime_hours * hidden.downtime_cost_per_hour;
    let staffing = hidden.staffing_fte * hidden.staffing_annual_cost * years;
    let infrastructure = hidden.infra_servers + hidden.infra_storage + hidden.infra_network;
    let migration = hidden.migration_professional + hidden.migration_internal;
    let compliance = (hidden.compliance_audit + hidden.compliance_documentation) * years;
    let opportunity = hidden.opportunity_delayed_projects + hidden.opportunity_missed_savings;

    HiddenCostBreakdown {
        training,
        downtime,
        staffing,
        infrastructure,
        migration,
        compliance,
        opportunity,
        total: training + downtime + staffing + infrastructure + migration + compliance
            + opportunity,
        fte_requirement: hidden.staffing_fte,
    }
}

/// Compute one-time capex and horizon opex for one vendor.
///
/// `device_monthly` is the effective per-device price after configuration
/// overrides, not necessarily the catalog list price.
pub fn compute_direct_costs(
    costs: &CostProfile,
    device_monthly: f64,
    devices: u32,
    years: u32,
) -> DirectCosts {
    let years = f64::from(years);
    DirectCosts {
        capex: costs.hardware + costs.professional_services,
        opex: device_monthly * f64::from(devices) * 12.0 * years + costs.support_annual * years,
    }
}
