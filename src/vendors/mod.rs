//! Vendor reference catalog: static cost, risk, performance and compliance
//! profiles for each NAC vendor.
//!
//! The catalog is a versioned, read-only data asset. A built-in copy ships
//! embedded in the binary; an alternate catalog can be loaded from a TOML
//! file with the same schema. Profiles are validated once at load time so
//! the aggregator can assume well-formed, non-negative inputs.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::core::{Error, Result};

/// Key of the cloud-native reference vendor used for savings comparisons.
pub const PORTNOX_KEY: &str = "portnox";

/// One vendor's static reference data. Not user-editable; tunable unit
/// prices are overridden through the configuration instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorProfile {
    /// Stable key, e.g. `cisco_ise`.
    pub key: String,
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub certifications: BTreeSet<String>,
    pub costs: CostProfile,
    pub risk: RiskProfile,
    pub performance: PerformanceProfile,
}

/// Direct and hidden cost constants for one vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostProfile {
    /// List price per device per month.
    pub device_monthly: f64,
    /// One-time appliance/server spend.
    #[serde(default)]
    pub hardware: f64,
    /// One-time deployment services spend.
    #[serde(default)]
    pub professional_services: f64,
    /// Recurring annual support contract.
    #[serde(default)]
    pub support_annual: f64,
    pub hidden: HiddenCostProfile,
}

/// Cost components not captured in list pricing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiddenCostProfile {
    pub training_initial: f64,
    pub training_ongoing: f64,
    pub downtime_hours: f64,
    pub downtime_cost_per_hour: f64,
    pub staffing_fte: f64,
    pub staffing_annual_cost: f64,
    pub infra_servers: f64,
    pub infra_storage: f64,
    pub infra_network: f64,
    pub migration_professional: f64,
    pub migration_internal: f64,
    pub compliance_audit: f64,
    pub compliance_documentation: f64,
    pub opportunity_delayed_projects: f64,
    pub opportunity_missed_savings: f64,
}

/// Breach scenarios with outcomes at each protection level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub scenarios: Vec<ThreatScenario>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatScenario {
    pub name: String,
    /// Outcome with no NAC deployed.
    pub unprotected: ThreatOutcome,
    /// Outcome with a basic NAC deployment.
    pub basic: ThreatOutcome,
    /// Outcome with this vendor's NAC.
    pub protected: ThreatOutcome,
}

/// Expected outcome of one threat scenario at one protection level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatOutcome {
    /// Annual breach probability in percent, [0, 100].
    pub probability: f64,
    /// Financial impact when the breach occurs.
    pub impact: f64,
    /// Time to recover, in days.
    pub recovery_days: f64,
}

/// Throughput and resilience characteristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceProfile {
    pub auths_per_second: u32,
    pub max_concurrent_sessions: u32,
    pub latency_ms: f64,
    pub availability_pct: f64,
    pub geo_redundant: bool,
    pub auto_scaling: bool,
}

impl RiskProfile {
    pub fn outcomes(&self, level: ProtectionLevel) -> impl Iterator<Item = &ThreatOutcome> {
        self.scenarios.iter().map(move |s| s.outcome(level))
    }
}

impl ThreatScenario {
    pub fn outcome(&self, level: ProtectionLevel) -> &ThreatOutcome {
        match level {
            ProtectionLevel::Unprotected => &self.unprotected,
            ProtectionLevel::BasicNac => &self.basic,
            ProtectionLevel::VendorNac => &self.protected,
        }
    }
}

/// Protection level a risk total is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtectionLevel {
    Unprotected,
    BasicNac,
    VendorNac,
}

/// The versioned set of vendor profiles an analysis runs over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorCatalog {
    pub version: String,
    pub vendors: Vec<VendorProfile>,
}

static BUILTIN_CATALOG: Lazy<VendorCatalog> = Lazy::new(|| {
    parse_catalog(include_str!("data/vendors.toml"))
        .expect("embedded vendor catalog is valid (checked by tests)")
});

impl VendorCatalog {
    /// The catalog embedded in the binary.
    pub fn builtin() -> &'static VendorCatalog {
        &BUILTIN_CATALOG
    }

    /// Load and validate a catalog from a TOML file.
    pub fn from_path(path: &Path) -> Result<VendorCatalog> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::catalog_with_path(format!("failed to read catalog: {}", e), path))?;
        parse_catalog(&contents)
            .map_err(|e| Error::catalog_with_path(e.to_string(), path))
    }

    pub fn get(&self, key: &str) -> Option<&VendorProfile> {
        self.vendors.iter().find(|v| v.key == key)
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

/// Parse and validate a catalog from a TOML string.
pub fn parse_catalog(contents: &str) -> Result<VendorCatalog> {
    let catalog = toml::from_str::<VendorCatalog>(contents)
        .map_err(|e| Error::catalog(format!("failed to parse catalog: {}", e)))?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

// Pure function: validate a probability is a percentage
fn check_probability(value: f64, context: &str) -> std::result::Result<(), String> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{}: probability {} outside [0, 100]", context, value))
    }
}

// Pure function: validate a currency or duration amount
fn check_non_negative(value: f64, context: &str) -> std::result::Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{}: {} must be non-negative", context, value))
    }
}

fn check_outcome(outcome: &ThreatOutcome, context: &str) -> std::result::Result<(), String> {
    check_probability(outcome.probability, context)?;
    check_non_negative(outcome.impact, context)?;
    check_non_negative(outcome.recovery_days, context)
}

fn check_hidden_costs(hidden: &HiddenCostProfile, key: &str) -> std::result::Result<(), String> {
    let fields = [
        ("training_initial", hidden.training_initial),
        ("training_ongoing", hidden.training_ongoing),
        ("downtime_hours", hidden.downtime_hours),
        ("downtime_cost_per_hour", hidden.downtime_cost_per_hour),
        ("staffing_fte", hidden.staffing_fte),
        ("staffing_annual_cost", hidden.staffing_annual_cost),
        ("infra_servers", hidden.infra_servers),
        ("infra_storage", hidden.infra_storage),
        ("infra_network", hidden.infra_network),
        ("migration_professional", hidden.migration_professional),
        ("migration_internal", hidden.migration_internal),
        ("compliance_audit", hidden.compliance_audit),
        ("compliance_documentation", hidden.compliance_documentation),
        (
            "opportunity_delayed_projects",
            hidden.opportunity_delayed_projects,
        ),
        ("opportunity_missed_savings", hidden.opportunity_missed_savings),
    ];
    for (name, value) in fields {
        check_non_negative(value, &format!("{}.hidden.{}", key, name))?;
    }
    Ok(())
}

fn check_vendor(vendor: &VendorProfile) -> std::result::Result<(), String> {
    let key = vendor.key.as_str();
    if key.is_empty() {
        return Err("vendor key must not be empty".to_string());
    }
    check_non_negative(vendor.costs.device_monthly, &format!("{}.device_monthly", key))?;
    check_non_negative(vendor.costs.hardware, &format!("{}.hardware", key))?;
    check_non_negative(
        vendor.costs.professional_services,
        &format!("{}.professional_services", key),
    )?;
    check_non_negative(vendor.costs.support_annual, &format!("{}.support_annual", key))?;
    check_hidden_costs(&vendor.costs.hidden, key)?;
    if !(0.0..=100.0).contains(&vendor.performance.availability_pct) {
        return Err(format!("{}: availability_pct outside [0, 100]", key));
    }
    for scenario in &vendor.risk.scenarios {
        let ctx = format!("{}.risk.{}", key, scenario.name);
        check_outcome(&scenario.unprotected, &ctx)?;
        check_outcome(&scenario.basic, &ctx)?;
        check_outcome(&scenario.protected, &ctx)?;
    }
    Ok(())
}

fn validate_catalog(catalog: &VendorCatalog) -> Result<()> {
    if catalog.vendors.is_empty() {
        return Err(Error::catalog("catalog contains no vendors"));
    }
    let mut seen = BTreeSet::new();
    for vendor in &catalog.vendors {
        if !seen.insert(vendor.key.clone()) {
            return Err(Error::catalog(format!("duplicate vendor key: {}", vendor.key)));
        }
        check_vendor(vendor).map_err(Error::catalog)?;
    }
    Ok(())
}
