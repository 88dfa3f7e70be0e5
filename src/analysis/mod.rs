//! The aggregator: `(configuration, catalog) -> ordered results`.
//!
//! Two pure passes over a handful of vendors. The first derives each
//! vendor's standalone costs and risk in isolation; the second fills the
//! comparative fields (savings, ROI, payback, FTE saved) against two
//! references:
//!
//! - the Portnox catalog entry for `savings_vs_portnox`/`savings_percent`,
//! - the cheapest OTHER vendor ("baseline competitor") for
//!   `savings_vs_competitor`, ROI and payback.
//!
//! The whole computation is deterministic and idempotent: no global state,
//! no I/O, a full recompute on every call.

use crate::comparison;
use crate::config::CalculationConfiguration;
use crate::core::{
    CalculationResult, Error, FinancialSummary, OperationalSummary, Result, RoiSummary,
};
use crate::cost::{compute_direct_costs, compute_hidden_costs};
use crate::vendors::{VendorCatalog, VendorProfile, PORTNOX_KEY};
use crate::{risk, roi};

/// Run the full analysis. Results come back in stable ascending-TCO order.
///
/// The configuration is re-validated here so library callers get the same
/// boundary guarantees as the CLI.
pub fn analyze(
    config: &CalculationConfiguration,
    catalog: &VendorCatalog,
) -> Result<Vec<CalculationResult>> {
    config.validate()?;
    if catalog.is_empty() {
        return Err(Error::Analysis("vendor catalog is empty".to_string()));
    }

    let mut results: Vec<CalculationResult> = catalog
        .vendors
        .iter()
        .map(|vendor| compute_standalone(config, vendor))
        .collect();

    apply_comparisons(config, &mut results);
    comparison::rank_by_tco(&mut results);
    Ok(results)
}

/// First pass: everything derivable from one vendor profile alone.
fn compute_standalone(
    config: &CalculationConfiguration,
    vendor: &VendorProfile,
) -> CalculationResult {
    let device_monthly = config.device_monthly_for(&vendor.key, vendor.costs.device_monthly);
    let direct = compute_direct_costs(&vendor.costs, device_monthly, config.devices, config.years);
    let hidden = compute_hidden_costs(&vendor.costs.hidden, config.years);
    let risk_summary = risk::summarize(&vendor.risk, config.years);

    CalculationResult {
        vendor: vendor.key.clone(),
        vendor_name: vendor.name.clone(),
        short_name: vendor.short_name.clone(),
        financial_summary: FinancialSummary {
            total_capex: direct.capex,
            total_opex: direct.opex,
            total_hidden_costs: hidden.total,
            total_tco: direct.capex + direct.opex + hidden.total,
            // Filled by the comparative pass.
            savings_vs_competitor: 0.0,
            savings_vs_portnox: 0.0,
            savings_percent: 0.0,
        },
        roi: RoiSummary {
            total_roi: 0.0,
            roi_percentage: 0.0,
            payback_months: None,
        },
        risk: risk_summary,
        operational: OperationalSummary {
            fte_saved: 0.0,
            staffing_cost_avoided: 0.0,
        },
        hidden_costs: hidden,
        performance: vendor.performance.clone(),
        certifications: vendor.certifications.clone(),
    }
}

/// Second pass: savings, ROI, payback and staffing deltas.
fn apply_comparisons(config: &CalculationConfiguration, results: &mut [CalculationResult]) {
    let portnox_total = results
        .iter()
        .find(|r| r.vendor == PORTNOX_KEY)
        .map(|r| r.total_tco());

    for index in 0..results.len() {
        let competitor = comparison::cheapest_competitor(results, index);
        let competitor_total = competitor.map(|i| results[i].total_tco());
        let competitor_fte = competitor.map(|i| results[i].hidden_costs.fte_requirement);

        let total = results[index].total_tco();
        let upfront =
            results[index].financial_summary.total_capex + results[index].hidden_costs.migration;

        let result = &mut results[index];
        if let Some(reference) = portnox_total {
            result.financial_summary.savings_vs_portnox =
                comparison::savings_delta(total, reference);
            result.financial_summary.savings_percent =
                comparison::percent_premium(total, reference);
        }
        if let Some(baseline) = competitor_total {
            result.financial_summary.savings_vs_competitor =
                comparison::savings_delta(total, baseline);
        }

        result.roi = roi::summarize(total, competitor_total, upfront, config.years);

        let fte_saved = competitor_fte
            .map(|baseline| (baseline - result.hidden_costs.fte_requirement).max(0.0))
            .unwrap_or(0.0);
        result.operational = OperationalSummary {
            fte_saved,
            staffing_cost_avoided: fte_saved * config.avg_fte_cost * f64::from(config.years),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendors::VendorCatalog;

    fn run_default() -> Vec<CalculationResult> {
        analyze(
            &CalculationConfiguration::default(),
            VendorCatalog::builtin(),
        )
        .unwrap()
    }

    #[test]
    fn tco_identity_holds_for_every_vendor() {
        for result in run_default() {
            let f = &result.financial_summary;
            assert_eq!(
                f.total_tco,
                f.total_capex + f.total_opex + f.total_hidden_costs,
                "{}",
                result.vendor
            );
        }
    }

    #[test]
    fn results_come_back_in_ascending_tco_order() {
        let results = run_default();
        for pair in results.windows(2) {
            assert!(pair[0].total_tco() <= pair[1].total_tco());
        }
    }

    #[test]
    fn portnox_reference_savings_are_zero_for_itself() {
        let results = run_default();
        let portnox = results.iter().find(|r| r.vendor == PORTNOX_KEY).unwrap();
        assert_eq!(portnox.financial_summary.savings_vs_portnox, 0.0);
        assert_eq!(portnox.financial_summary.savings_percent, 0.0);
    }

    #[test]
    fn on_premise_vendors_cost_more_than_the_cloud_reference() {
        let results = run_default();
        for result in results.iter().filter(|r| r.vendor != PORTNOX_KEY) {
            assert!(
                result.financial_summary.savings_vs_portnox > 0.0,
                "{} should carry a positive premium",
                result.vendor
            );
            assert!(result.financial_summary.savings_percent > 0.0);
        }
    }

    #[test]
    fn rejects_invalid_configuration_before_computing() {
        let config = CalculationConfiguration {
            years: 0,
            ..Default::default()
        };
        let err = analyze(&config, VendorCatalog::builtin()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn minimal_boundary_configuration_produces_non_negative_totals() {
        let config = CalculationConfiguration {
            devices: 1,
            users: 1,
            years: 1,
            ..Default::default()
        };
        let results = analyze(&config, VendorCatalog::builtin()).unwrap();
        for result in &results {
            let f = &result.financial_summary;
            assert!(f.total_capex >= 0.0);
            assert!(f.total_opex >= 0.0);
            assert!(f.total_hidden_costs >= 0.0);
            assert!(f.total_tco >= 0.0);
        }
    }

    #[test]
    fn tco_is_monotone_in_devices_and_years() {
        let base = CalculationConfiguration::default();
        let more_devices = CalculationConfiguration {
            devices: base.devices * 2,
            ..base.clone()
        };
        let more_years = CalculationConfiguration {
            years: base.years + 2,
            ..base.clone()
        };
        let catalog = VendorCatalog::builtin();

        let baseline = analyze(&base, catalog).unwrap();
        for scaled in [
            analyze(&more_devices, catalog).unwrap(),
            analyze(&more_years, catalog).unwrap(),
        ] {
            for result in &baseline {
                let grown = scaled.iter().find(|r| r.vendor == result.vendor).unwrap();
                assert!(grown.total_tco() >= result.total_tco(), "{}", result.vendor);
            }
        }
    }

    #[test]
    fn analysis_is_deterministic() {
        let config = CalculationConfiguration::default();
        let catalog = VendorCatalog::builtin();
        let first = analyze(&config, catalog).unwrap();
        let second = analyze(&config, catalog).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn single_vendor_catalog_has_neutral_comparative_fields() {
        let mut catalog = VendorCatalog::builtin().clone();
        catalog.vendors.retain(|v| v.key == PORTNOX_KEY);
        let results = analyze(&CalculationConfiguration::default(), &catalog).unwrap();
        assert_eq!(results.len(), 1);
        let only = &results[0];
        assert_eq!(only.financial_summary.savings_vs_competitor, 0.0);
        assert_eq!(only.roi.total_roi, 0.0);
        assert_eq!(only.roi.payback_months, None);
        assert_eq!(only.operational.fte_saved, 0.0);
    }

    #[test]
    fn device_cost_override_lowers_tco() {
        let catalog = VendorCatalog::builtin();
        let base = CalculationConfiguration::default();
        let mut discounted = base.clone();
        discounted
            .device_cost_overrides
            .insert("cisco_ise".to_string(), 1.0);

        let baseline = analyze(&base, catalog).unwrap();
        let cheaper = analyze(&discounted, catalog).unwrap();
        let before = baseline.iter().find(|r| r.vendor == "cisco_ise").unwrap();
        let after = cheaper.iter().find(|r| r.vendor == "cisco_ise").unwrap();
        assert!(after.total_tco() < before.total_tco());
    }
}
