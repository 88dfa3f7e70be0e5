use anyhow::Result;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::analysis::analyze;
use crate::config::{self, CalculationConfiguration};
use crate::core::AnalysisReport;
use crate::output::{create_writer, ColorMode, OutputFormat};
use crate::vendors::VendorCatalog;

/// Everything the compare command needs, resolved from CLI flags.
pub struct CompareConfig {
    pub devices: Option<u32>,
    pub users: Option<u32>,
    pub years: Option<u32>,
    pub avg_fte_cost: Option<f64>,
    pub portnox_device_cost: Option<f64>,
    pub catalog: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub color: ColorMode,
}

/// Run the comparison: file config + flag overrides -> validate -> analyze
/// -> render.
pub fn compare(cmd: CompareConfig) -> Result<()> {
    colored::control::set_override(effective_color(cmd.color, cmd.output.is_some()));

    let configuration = resolve_configuration(&cmd)?;
    let catalog = load_catalog(cmd.catalog.as_deref())?;

    let mut results = analyze(&configuration, &catalog)?;
    if let Some(top) = cmd.top {
        results.truncate(top);
    }
    log::debug!(
        "computed {} results against catalog {}",
        results.len(),
        catalog.version
    );

    let report = AnalysisReport::new(catalog.version.clone(), configuration, results);

    let sink: Box<dyn Write> = match &cmd.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    create_writer(sink, cmd.format).write_report(&report)?;
    Ok(())
}

/// `Auto` never colors a file sink; explicit `Always`/`Never` always win.
fn effective_color(mode: ColorMode, writing_to_file: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => !writing_to_file && mode.should_use_color(),
    }
}

/// CLI flags override the loaded `.tcomap.toml`, which overrides defaults.
/// An invalid config file is an error, not a fallback to defaults.
fn resolve_configuration(cmd: &CompareConfig) -> Result<CalculationConfiguration> {
    let mut configuration = config::load_config()?;
    if let Some(devices) = cmd.devices {
        configuration.devices = devices;
    }
    if let Some(users) = cmd.users {
        configuration.users = users;
    }
    if let Some(years) = cmd.years {
        configuration.years = years;
    }
    if let Some(avg_fte_cost) = cmd.avg_fte_cost {
        configuration.avg_fte_cost = avg_fte_cost;
    }
    if let Some(price) = cmd.portnox_device_cost {
        configuration.portnox_device_cost = Some(price);
    }
    Ok(configuration)
}

fn load_catalog(path: Option<&std::path::Path>) -> Result<VendorCatalog> {
    match path {
        Some(path) => Ok(VendorCatalog::from_path(path)?),
        None => Ok(VendorCatalog::builtin().clone()),
    }
}
