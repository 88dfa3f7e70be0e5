use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# tcomap configuration

# Environment size
devices = 5000
users = 3000

# Analysis horizon in years
years = 3

# Annual fully-loaded cost of one FTE
avg_fte_cost = 120000.0

# Override the Portnox per-device monthly price
# portnox_device_cost = 4.0

# Per-device monthly price overrides by vendor key
# [device_cost_overrides]
# cisco_ise = 6.0
"#;

    fs::write(&config_path, default_config)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
