//! Property-based tests for the calculation model.
//!
//! These verify invariants that should hold for all inputs:
//! - The hidden-cost total is the sum of its buckets
//! - Only time-scaled buckets vary with the horizon, linearly
//! - Expected annual risk is monotone in probability and impact
//! - Risk reduction is always a fraction in [0, 1]
//! - The aggregator is deterministic and keeps the TCO sum identity

use proptest::prelude::*;
use tcomap::vendors::{HiddenCostProfile, ThreatOutcome};
use tcomap::{
    analyze, annual_risk_cost, compute_hidden_costs, risk_reduction, CalculationConfiguration,
    VendorCatalog,
};

fn currency() -> impl Strategy<Value = f64> {
    // Whole-dollar amounts keep float arithmetic exact enough for equality
    // up to a relative epsilon.
    (0u32..5_000_000u32).prop_map(f64::from)
}

fn hidden_profile() -> impl Strategy<Value = HiddenCostProfile> {
    (
        (currency(), currency(), 0.0..500.0f64, currency()),
        (0.0..10.0f64, currency(), currency(), currency()),
        (currency(), currency(), currency(), currency()),
        (currency(), currency(), currency()),
    )
        .prop_map(
            |(
                (training_initial, training_ongoing, downtime_hours, downtime_cost_per_hour),
                (staffing_fte, staffing_annual_cost, infra_servers, infra_storage),
                (infra_network, migration_professional, migration_internal, compliance_audit),
                (compliance_documentation, opportunity_delayed_projects, opportunity_missed_savings),
            )| HiddenCostProfile {
                training_initial,
                training_ongoing,
                downtime_hours,
                downtime_cost_per_hour,
                staffing_fte,
                staffing_annual_cost,
                infra_servers,
                infra_storage,
                infra_network,
                migration_professional,
                migration_internal,
                compliance_audit,
                compliance_documentation,
                opportunity_delayed_projects,
                opportunity_missed_savings,
            },
        )
}

fn outcome() -> impl Strategy<Value = ThreatOutcome> {
    (0.0..=100.0f64, currency(), 0.0..90.0f64).prop_map(|(probability, impact, recovery_days)| {
        ThreatOutcome {
            probability,
            impact,
            recovery_days,
        }
    })
}

fn relative_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= scale * 1e-9
}

proptest! {
    /// Property: the breakdown total is exactly the sum of its buckets.
    #[test]
    fn prop_hidden_total_is_sum_of_buckets(profile in hidden_profile(), years in 1u32..=10) {
        let b = compute_hidden_costs(&profile, years);
        let sum = b.training + b.downtime + b.staffing + b.infrastructure
            + b.migration + b.compliance + b.opportunity;
        prop_assert_eq!(b.total, sum);
    }

    /// Property: one-time buckets ignore the horizon; time-scaled buckets
    /// grow linearly with it.
    #[test]
    fn prop_only_time_scaled_buckets_vary_with_years(profile in hidden_profile(), years in 1u32..=9) {
        let now = compute_hidden_costs(&profile, years);
        let later = compute_hidden_costs(&profile, years + 1);

        prop_assert_eq!(now.downtime, later.downtime);
        prop_assert_eq!(now.infrastructure, later.infrastructure);
        prop_assert_eq!(now.migration, later.migration);
        prop_assert_eq!(now.opportunity, later.opportunity);

        prop_assert!(relative_eq(later.training - now.training, profile.training_ongoing));
        prop_assert!(relative_eq(
            later.staffing - now.staffing,
            profile.staffing_fte * profile.staffing_annual_cost
        ));
        prop_assert!(relative_eq(
            later.compliance - now.compliance,
            profile.compliance_audit + profile.compliance_documentation
        ));
    }

    /// Property: expected annual risk never decreases when one scenario's
    /// probability or impact increases.
    #[test]
    fn prop_annual_risk_is_monotone(
        mut outcomes in prop::collection::vec(outcome(), 1..6),
        index in any::<prop::sample::Index>(),
        probability_bump in 0.0..20.0f64,
        impact_bump in 0.0..1_000_000.0f64,
    ) {
        let base = annual_risk_cost(outcomes.iter());

        let i = index.index(outcomes.len());
        outcomes[i].probability = (outcomes[i].probability + probability_bump).min(100.0);
        let bumped_probability = annual_risk_cost(outcomes.iter());
        prop_assert!(bumped_probability >= base);

        outcomes[i].impact += impact_bump;
        let bumped_impact = annual_risk_cost(outcomes.iter());
        prop_assert!(bumped_impact >= bumped_probability);
    }

    /// Property: risk reduction is a fraction for any non-negative inputs,
    /// including a zero baseline.
    #[test]
    fn prop_risk_reduction_is_a_fraction(unprotected in 0.0..10_000_000.0f64, protected_cost in 0.0..10_000_000.0f64) {
        let r = risk_reduction(unprotected, protected_cost);
        prop_assert!(r.is_finite());
        prop_assert!((0.0..=1.0).contains(&r));
    }

    /// Property: the aggregator is deterministic and keeps the TCO sum
    /// identity for any valid configuration.
    #[test]
    fn prop_analysis_is_deterministic_and_consistent(
        devices in 1u32..200_000,
        users in 1u32..100_000,
        years in 1u32..=10,
        avg_fte_cost in 40_000u32..400_000,
    ) {
        let config = CalculationConfiguration {
            devices,
            users,
            years,
            avg_fte_cost: f64::from(avg_fte_cost),
            ..Default::default()
        };
        let catalog = VendorCatalog::builtin();
        let first = analyze(&config, catalog).unwrap();
        let second = analyze(&config, catalog).unwrap();
        prop_assert_eq!(&first, &second);

        for result in &first {
            let f = &result.financial_summary;
            prop_assert_eq!(f.total_tco, f.total_capex + f.total_opex + f.total_hidden_costs);
            prop_assert!(f.total_tco >= 0.0);
        }
    }

    /// Property: extending the horizon never shrinks any vendor's TCO.
    #[test]
    fn prop_tco_is_monotone_in_years(devices in 1u32..50_000, years in 1u32..=9) {
        let base = CalculationConfiguration { devices, years, ..Default::default() };
        let longer = CalculationConfiguration { years: years + 1, ..base.clone() };
        let catalog = VendorCatalog::builtin();

        let now = analyze(&base, catalog).unwrap();
        let later = analyze(&longer, catalog).unwrap();
        for result in &now {
            let grown = later.iter().find(|r| r.vendor == result.vendor).unwrap();
            prop_assert!(grown.total_tco() >= result.total_tco());
        }
    }
}
