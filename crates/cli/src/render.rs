//! Plain-text tables and messages for the menu.

use std::io::{self, Write};

use stockwatch_events::RestockRequested;
use stockwatch_inventory::SweepReport;
use stockwatch_parties::Supplier;
use stockwatch_products::Product;

const RULE_WIDTH: usize = 65;

pub fn product_table<'a, W: Write>(
    out: &mut W,
    title: &str,
    products: impl IntoIterator<Item = &'a Product>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "{:<10}{:<20}{:<15}{:<10}{:<10}",
        "ID", "Product Name", "Category", "Price", "Stock"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for p in products {
        writeln!(
            out,
            "{:<10}{:<20}{:<15}{:<10}{:<10}",
            p.id_typed(),
            p.name(),
            p.category(),
            p.price(),
            p.stock_level()
        )?;
    }
    Ok(())
}

pub fn sweep_report<W: Write>(out: &mut W, report: &SweepReport) -> io::Result<()> {
    if report.is_all_stocked() {
        writeln!(out)?;
        writeln!(out, "All products are well-stocked. No restocking needed.")?;
        return Ok(());
    }
    for alert in &report.alerts {
        writeln!(out)?;
        writeln!(
            out,
            "Low stock alert for: {} (ID: {}), reorder {}",
            alert.name, alert.product_id, alert.quantity
        )?;
    }
    Ok(())
}

/// Show what a supplier has received since the last call, emptying its inbox.
pub fn received_requests<W: Write>(out: &mut W, supplier: &Supplier) -> io::Result<()> {
    for request in supplier.received() {
        restock_request(out, supplier, &request)?;
    }
    Ok(())
}

fn restock_request<W: Write>(
    out: &mut W,
    supplier: &Supplier,
    request: &RestockRequested,
) -> io::Result<()> {
    writeln!(
        out,
        "{} Supplier {} received restocking request for Product ID: {}, Quantity: {}",
        supplier.kind(),
        supplier.name(),
        request.product_id,
        request.quantity
    )?;
    writeln!(out, "{} Supplier {}.", supplier.kind(), supplier.kind().fulfilment_note())
}
