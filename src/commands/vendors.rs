use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, ContentArrangement, Table};
use std::path::Path;

use crate::output::format::format_currency;
use crate::vendors::VendorCatalog;

/// Print the vendor catalog as a table.
pub fn list_vendors(catalog_path: Option<&Path>) -> Result<()> {
    let catalog = match catalog_path {
        Some(path) => VendorCatalog::from_path(path)?,
        None => VendorCatalog::builtin().clone(),
    };

    println!("Vendor catalog {} ({} vendors)", catalog.version, catalog.len());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Key",
            "Vendor",
            "$/device/mo",
            "Hardware",
            "Admin FTE",
            "Availability",
            "Certifications",
        ]);

    for vendor in &catalog.vendors {
        let certs: Vec<&str> = vendor.certifications.iter().map(String::as_str).collect();
        table.add_row(vec![
            Cell::new(&vendor.key),
            Cell::new(&vendor.name),
            Cell::new(format!("{:.2}", vendor.costs.device_monthly))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_currency(vendor.costs.hardware)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", vendor.costs.hidden.staffing_fte))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}%", vendor.performance.availability_pct))
                .set_alignment(CellAlignment::Right),
            Cell::new(certs.join(", ")),
        ]);
    }

    println!("{table}");
    Ok(())
}
