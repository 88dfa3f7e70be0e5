use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::{ColorMode, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "tcomap")]
#[command(about = "NAC vendor TCO, ROI and breach-risk comparison", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare vendors under a configuration
    Compare {
        /// Managed endpoint count
        #[arg(long)]
        devices: Option<u32>,

        /// User count
        #[arg(long)]
        users: Option<u32>,

        /// Analysis horizon in years
        #[arg(long)]
        years: Option<u32>,

        /// Annual fully-loaded FTE cost
        #[arg(long = "avg-fte-cost")]
        avg_fte_cost: Option<f64>,

        /// Override the Portnox per-device monthly price
        #[arg(long = "portnox-device-cost")]
        portnox_device_cost: Option<f64>,

        /// Alternate vendor catalog (TOML); defaults to the built-in catalog
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the N lowest-TCO vendors
        #[arg(long)]
        top: Option<usize>,

        /// Color output
        #[arg(long, value_enum, default_value = "auto")]
        color: ColorMode,
    },

    /// List the vendor catalog
    Vendors {
        /// Alternate vendor catalog (TOML)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Create a default .tcomap.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
