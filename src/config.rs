//! Analysis configuration and `.tcomap.toml` loading.
//!
//! The configuration is the user-tunable half of a computation: environment
//! size, analysis horizon and unit prices. It is validated at this boundary;
//! the aggregator assumes pre-validated, non-negative inputs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::core::{Error, Result};

/// User-tunable inputs shared by every vendor computation.
///
/// A configuration is immutable per computation: changing any field means
/// recomputing every result from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationConfiguration {
    /// Managed endpoint count.
    #[serde(default = "default_devices")]
    pub devices: u32,

    /// User count.
    #[serde(default = "default_users")]
    pub users: u32,

    /// Analysis horizon in years (typically 1-5).
    #[serde(default = "default_years")]
    pub years: u32,

    /// Annual fully-loaded cost of one FTE.
    #[serde(default = "default_avg_fte_cost")]
    pub avg_fte_cost: f64,

    /// Override for the Portnox per-device monthly price. When unset the
    /// catalog price applies.
    #[serde(default)]
    pub portnox_device_cost: Option<f64>,

    /// Per-device monthly price overrides keyed by vendor key. Takes
    /// precedence over both the catalog and `portnox_device_cost`.
    #[serde(default)]
    pub device_cost_overrides: BTreeMap<String, f64>,
}

impl Default for CalculationConfiguration {
    fn default() -> Self {
        Self {
            devices: default_devices(),
            users: default_users(),
            years: default_years(),
            avg_fte_cost: default_avg_fte_cost(),
            portnox_device_cost: None,
            device_cost_overrides: BTreeMap::new(),
        }
    }
}

fn default_devices() -> u32 {
    5000
}
fn default_users() -> u32 {
    3000
}
fn default_years() -> u32 {
    3
}
fn default_avg_fte_cost() -> f64 {
    120_000.0
}

impl CalculationConfiguration {
    // Pure function: Validate a single count field
    fn validate_count(value: u32, name: &str) -> std::result::Result<(), String> {
        if value == 0 {
            Err(format!("{} must be greater than zero", name))
        } else {
            Ok(())
        }
    }

    // Pure function: Validate a currency amount
    fn validate_non_negative(value: f64, name: &str) -> std::result::Result<(), String> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(format!("{} must be a non-negative amount", name))
        }
    }

    fn collect_validations(&self) -> Vec<std::result::Result<(), String>> {
        let mut checks = vec![
            Self::validate_count(self.devices, "devices"),
            Self::validate_count(self.users, "users"),
            Self::validate_count(self.years, "years"),
            Self::validate_non_negative(self.avg_fte_cost, "avg_fte_cost"),
        ];
        if self.avg_fte_cost == 0.0 {
            checks.push(Err("avg_fte_cost must be greater than zero".to_string()));
        }
        if let Some(cost) = self.portnox_device_cost {
            checks.push(Self::validate_non_negative(cost, "portnox_device_cost"));
        }
        for (key, cost) in &self.device_cost_overrides {
            checks.push(Self::validate_non_negative(
                *cost,
                &format!("device_cost_overrides.{}", key),
            ));
        }
        checks
    }

    /// Validate all inputs, rejecting non-positive counts and negative
    /// prices. A `years = 0` horizon is invalid input, not a request to zero
    /// out time-scaled costs.
    pub fn validate(&self) -> Result<()> {
        for check in self.collect_validations() {
            check.map_err(Error::validation)?;
        }
        Ok(())
    }

    /// Effective per-device monthly price for a vendor, after overrides.
    pub fn device_monthly_for(&self, vendor_key: &str, catalog_price: f64) -> f64 {
        if let Some(price) = self.device_cost_overrides.get(vendor_key) {
            return *price;
        }
        if vendor_key == crate::vendors::PORTNOX_KEY {
            if let Some(price) = self.portnox_device_cost {
                return price;
            }
        }
        catalog_price
    }
}

/// Config file name searched for in ancestor directories.
pub const CONFIG_FILE_NAME: &str = ".tcomap.toml";

// Pure function to read config file contents
fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(contents: &str) -> Result<CalculationConfiguration> {
    let config = toml::from_str::<CalculationConfiguration>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;
    config.validate()?;
    Ok(config)
}

/// Try loading configuration from a specific path. A missing file yields
/// `Ok(None)` so the ancestor search can continue; an unreadable or invalid
/// file is rejected rather than silently replaced by defaults.
fn try_load_config_from_path(
    config_path: &Path,
) -> Result<Option<CalculationConfiguration>> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(Error::Configuration(format!(
                "failed to read {}: {}",
                config_path.display(),
                e
            )));
        }
    };

    let config = parse_config(&contents).map_err(|e| {
        Error::Configuration(format!("{} (in {})", e, config_path.display()))
    })?;
    log::debug!("Loaded config from {}", config_path.display());
    Ok(Some(config))
}

#[cfg(test)]
pub(crate) fn load_config_file(path: &Path) -> Result<Option<CalculationConfiguration>> {
    try_load_config_from_path(path)
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from the nearest `.tcomap.toml`. Only a missing file
/// falls back to defaults; a file that fails to parse or validate is a hard
/// error.
pub fn load_config() -> Result<CalculationConfiguration> {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return Ok(CalculationConfiguration::default());
        }
    };

    for path in directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
    {
        if let Some(config) = try_load_config_from_path(&path)? {
            return Ok(config);
        }
    }

    log::debug!(
        "No config found after checking {} directories. Using default config.",
        MAX_TRAVERSAL_DEPTH
    );
    Ok(CalculationConfiguration::default())
}
