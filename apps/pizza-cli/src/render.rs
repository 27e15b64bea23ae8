//! Text rendering for menus, order summaries and bill splits.
//!
//! Every function writes to any `Write` so output can be captured in tests.

use std::io::{self, Write};

use pizza_core::{BillSplit, Catalog, OrderSummary};

const MENU_RULE: &str = "--------------------------------------------------";
const SUMMARY_RULE: &str = "-------------------------------------------------------";

/// Prints the catalog as a numbered table. IDs are 1-based.
///
/// ```text
/// === Pizza Menu ===
/// ID  Pizza Name                Price      Available
/// --------------------------------------------------
/// 1   Margherita                €10.00     Yes
/// ```
pub fn write_menu<W: Write>(out: &mut W, catalog: &Catalog, symbol: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Pizza Menu ===")?;

    if catalog.is_empty() {
        writeln!(out, "The menu is empty.")?;
        return writeln!(out);
    }

    writeln!(out, "{:<3} {:<25} {:<10} {}", "ID", "Pizza Name", "Price", "Available")?;
    writeln!(out, "{}", MENU_RULE)?;

    for (index, pizza) in catalog.iter().enumerate() {
        writeln!(
            out,
            "{:<3} {:<25} {}{:<9} {}",
            index + 1,
            pizza.name,
            symbol,
            pizza.price,
            if pizza.available { "Yes" } else { "No" }
        )?;
    }

    writeln!(out)
}

/// Prints the order lines, total and party size.
pub fn write_summary<W: Write>(out: &mut W, summary: &OrderSummary, symbol: &str) -> io::Result<()> {
    if summary.is_empty() {
        return writeln!(out, "No items in order.");
    }

    writeln!(out)?;
    writeln!(out, "=== Order Summary ===")?;
    writeln!(out, "Placed: {}", summary.created_at.format("%Y-%m-%d %H:%M UTC"))?;
    writeln!(out, "{:<25} {:<8} {:<10} {}", "Pizza", "Qty", "Unit Price", "Subtotal")?;
    writeln!(out, "{}", SUMMARY_RULE)?;

    for line in &summary.lines {
        writeln!(
            out,
            "{:<25} {:<8} {}{:<9} {}{}",
            line.name, line.quantity, symbol, line.unit_price, symbol, line.subtotal
        )?;
    }

    writeln!(out, "{}", SUMMARY_RULE)?;
    writeln!(out, "Total Amount: {}{}", symbol, summary.total_amount)?;
    writeln!(out, "Number of People: {}", summary.num_people)
}

/// Prints the bill split block.
pub fn write_split<W: Write>(out: &mut W, split: &BillSplit, symbol: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Bill Split Results ===")?;
    writeln!(out, "Total bill: {}{}", symbol, split.total)?;
    writeln!(out, "Number of people: {}", split.num_people)?;
    writeln!(out, "Cost per person: {}{}", symbol, split.per_person)
}
