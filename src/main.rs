use anyhow::Result;
use clap::Parser;
use tcomap::cli::{Cli, Commands};
use tcomap::commands::{self, CompareConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            devices,
            users,
            years,
            avg_fte_cost,
            portnox_device_cost,
            catalog,
            format,
            output,
            top,
            color,
        } => commands::compare(CompareConfig {
            devices,
            users,
            years,
            avg_fte_cost,
            portnox_device_cost,
            catalog,
            format,
            output,
            top,
            color,
        }),
        Commands::Vendors { catalog } => commands::list_vendors(catalog.as_deref()),
        Commands::Init { force } => commands::init_config(force),
    }
}
