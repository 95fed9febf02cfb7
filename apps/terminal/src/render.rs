//! # Rendering
//!
//! Plain-text tables, banners, and the receipt. Everything writes to an
//! injected `io::Write` so the session tests can capture output.
//!
//! Table columns: Product (20 chars, left), Price, Qty, Total (10 each).

use std::io::{self, Write};

use corner_core::{Cart, Catalog, Receipt, Totals, DISCOUNT_RATE, TAX_RATE};

const RULE_WIDTH: usize = 80;

/// A full-width row of asterisks.
pub fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "*".repeat(RULE_WIDTH))
}

/// A title centered in a full-width asterisk banner.
pub fn banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{:*^width$}", format!(" {} ", title), width = RULE_WIDTH)
}

fn table_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{:<20} {:<10} {:<10} {:<10}",
        "Product", "Price", "Qty", "Total"
    )
}

fn table_row(
    out: &mut impl Write,
    name: &str,
    unit_price: &str,
    quantity: i64,
    line_total: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "{:<20} {:<10} {:<10} {:<10}",
        name, unit_price, quantity, line_total
    )
}

/// The main menu plus its choice prompt (flushed, no trailing newline).
pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    banner(out, "CORNER MART POINT OF SALE")?;
    writeln!(out)?;
    rule(out)?;
    writeln!(out, "1. View Products")?;
    writeln!(out, "2. Add to Cart")?;
    writeln!(out, "3. Remove from Cart")?;
    writeln!(out, "4. View Cart")?;
    writeln!(out, "5. Checkout")?;
    writeln!(out, "6. Exit")?;
    rule(out)?;
    write!(out, "Enter choice (1-6): ")?;
    out.flush()
}

/// Numbered catalog listing with low-stock flags.
pub fn catalog(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    writeln!(out)?;
    banner(out, "CORNER MART PRODUCT CATALOG")?;
    writeln!(out)?;
    for (idx, product) in catalog.iter().enumerate() {
        let alert = if product.is_low_stock() {
            " (LOW STOCK!)"
        } else {
            ""
        };
        writeln!(out, "{}. {}{}", idx + 1, product, alert)?;
    }
    Ok(())
}

/// Cart table with subtotal, or the empty-cart message.
pub fn cart(out: &mut impl Write, cart: &Cart) -> io::Result<()> {
    if cart.is_empty() {
        writeln!(out, "Your cart is empty")?;
        return Ok(());
    }

    writeln!(out)?;
    banner(out, "CORNER MART SHOPPING CART")?;
    writeln!(out)?;
    table_header(out)?;
    for line in cart.lines() {
        table_row(
            out,
            &line.name,
            &line.unit_price.to_string(),
            line.quantity,
            &line.line_total().to_string(),
        )?;
    }
    rule(out)?;
    writeln!(out, "SUBTOTAL: {}", cart.subtotal())
}

/// Pre-payment order summary: the cart table plus discount/tax/total.
pub fn order_summary(out: &mut impl Write, items: &Cart, totals: &Totals) -> io::Result<()> {
    writeln!(out)?;
    banner(out, "ORDER SUMMARY")?;
    cart(out, items)?;
    totals_block(out, totals)
}

fn totals_block(out: &mut impl Write, totals: &Totals) -> io::Result<()> {
    if totals.has_discount() {
        writeln!(
            out,
            "DISCOUNT ({}%): -{}",
            DISCOUNT_RATE.percentage(),
            totals.discount
        )?;
    }
    writeln!(out, "TAX ({}%): {}", TAX_RATE.percentage(), totals.tax)?;
    writeln!(out, "TOTAL: {}", totals.total)
}

/// The printed receipt: store header, every line item, totals, payment.
pub fn receipt(out: &mut impl Write, receipt: &Receipt) -> io::Result<()> {
    writeln!(out)?;
    banner(out, "RECEIPT")?;
    writeln!(out)?;
    writeln!(out, "Corner Mart Groceries, Beverages & Household Goods")?;
    writeln!(out, "16 East Street, Riverton. Contact: (876) 555-2025")?;
    writeln!(
        out,
        "Issued: {}",
        receipt.issued_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    rule(out)?;
    table_header(out)?;
    for line in &receipt.lines {
        table_row(
            out,
            &line.name,
            &line.unit_price.to_string(),
            line.quantity,
            &line.line_total.to_string(),
        )?;
    }
    rule(out)?;
    writeln!(out, "SUBTOTAL: {}", receipt.totals.subtotal)?;
    if receipt.totals.has_discount() {
        writeln!(out, "DISCOUNT: -{}", receipt.totals.discount)?;
    }
    writeln!(out, "TAX: {}", receipt.totals.tax)?;
    writeln!(out, "TOTAL: {}", receipt.totals.total)?;
    writeln!(out, "PAID: {}", receipt.paid)?;
    writeln!(out, "CHANGE: {}", receipt.change)?;
    writeln!(out)?;
    writeln!(out, "Thank you for shopping with us!")?;
    writeln!(out)?;
    rule(out)
}

/// Post-checkout alert listing every catalog product now under 5 units.
pub fn low_stock_alert(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    let low: Vec<_> = catalog.low_stock().collect();
    if low.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "ALERT: Low stock items:")?;
    for product in low {
        writeln!(out, "- {}: {} remaining", product.name, product.stock)?;
    }
    Ok(())
}
