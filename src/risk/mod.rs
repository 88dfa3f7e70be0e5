//! Expected-loss risk model.
//!
//! Annual risk is an expected value over threat scenarios, not a worst case:
//! each scenario contributes `probability/100 * impact`. Reduction ratios
//! are guarded so a zero baseline yields a defined 0.0 rather than
//! NaN/Infinity reaching a renderer.

use crate::core::RiskSummary;
use crate::vendors::{ProtectionLevel, RiskProfile, ThreatOutcome};

/// Expected annual breach cost across scenarios:
/// Σ (probability / 100) × impact.
pub fn annual_risk_cost<'a, I>(outcomes: I) -> f64
where
    I: IntoIterator<Item = &'a ThreatOutcome>,
{
    outcomes
        .into_iter()
        .map(|o| (o.probability / 100.0) * o.impact)
        .sum()
}

/// Fractional reduction in expected loss, `1 - protected/unprotected`,
/// clamped to [0, 1]. Returns 0.0 when the unprotected baseline is zero.
pub fn risk_reduction(unprotected: f64, protected_cost: f64) -> f64 {
    if unprotected <= 0.0 {
        return 0.0;
    }
    (1.0 - protected_cost / unprotected).clamp(0.0, 1.0)
}

/// Expected loss avoided over the horizon versus no protection, floored at
/// zero.
pub fn breach_cost_avoidance(unprotected: f64, protected_cost: f64, years: u32) -> f64 {
    ((unprotected - protected_cost) * f64::from(years)).max(0.0)
}

/// Mean recovery duration across scenarios, 0.0 when there are none.
pub fn mean_recovery_days<'a, I>(outcomes: I) -> f64
where
    I: IntoIterator<Item = &'a ThreatOutcome>,
{
    let (sum, count) = outcomes
        .into_iter()
        .fold((0.0, 0u32), |(sum, count), o| (sum + o.recovery_days, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

/// Summarize one vendor's risk profile over the analysis horizon.
pub fn summarize(risk: &RiskProfile, years: u32) -> RiskSummary {
    let unprotected = annual_risk_cost(risk.outcomes(ProtectionLevel::Unprotected));
    let basic = annual_risk_cost(risk.outcomes(ProtectionLevel::BasicNac));
    let protected_cost = annual_risk_cost(risk.outcomes(ProtectionLevel::VendorNac));

    RiskSummary {
        annual_risk_unprotected: unprotected,
        annual_risk_basic: basic,
        annual_risk_protected: protected_cost,
        reduction: risk_reduction(unprotected, protected_cost),
        breach_cost_avoidance: breach_cost_avoidance(unprotected, protected_cost, years),
        mean_recovery_days: mean_recovery_days(risk.outcomes(ProtectionLevel::VendorNac)),
    }
}
