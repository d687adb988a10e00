//! Receipt
//!
//! Renders the cart as a table of lines followed by the item count and total.

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::Cart, items::LineItem};

/// Shown instead of a table when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Giỏ hàng trống";

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Printable view of a cart.
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    cart: &'a Cart,
}

impl<'a> Receipt<'a> {
    /// Receipt for `cart`.
    pub fn new(cart: &'a Cart) -> Self {
        Self { cart }
    }

    /// Writes the receipt to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.cart.is_empty() {
            return writeln!(out, "{EMPTY_CART_MESSAGE}").map_err(|_err| ReceiptError::IO);
        }

        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Unit Price", "Qty", "Line Total"]);

        for (idx, item) in self.cart.iter().enumerate() {
            push_line_row(&mut builder, idx, item);
        }

        write_receipt_table(&mut out, builder)?;

        write_receipt_summary(&mut out, self.cart)
    }
}

fn push_line_row(builder: &mut Builder, idx: usize, item: &LineItem) {
    builder.push_record([
        format!("#{:<3}", idx + 1),
        item.name().to_string(),
        format!("{}", item.unit_price()),
        item.quantity().to_string(),
        format!("{}", item.line_total()),
    ]);
}

fn write_receipt_table(out: &mut impl io::Write, builder: Builder) -> Result<(), ReceiptError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(
        1,
        HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
    );

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)
}

fn write_receipt_summary(out: &mut impl io::Write, cart: &Cart) -> Result<(), ReceiptError> {
    let items_label = " Items:";
    let total_label = " Total:";

    let items_val = format!("{}  ", cart.total_item_count());
    let total_val = format!("{}  ", cart.total_amount());

    let label_width = items_label.chars().count().max(total_label.chars().count());
    let value_width = items_val.chars().count().max(total_val.chars().count());

    write_summary_line(out, items_label, &items_val, label_width, value_width)?;
    write_summary_line(out, total_label, &total_val, label_width, value_width)?;

    writeln!(out).map_err(|_err| ReceiptError::IO)
}

/// Writes a summary line with a right-aligned label and a fixed-width value column.
fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    value: &str,
    label_col_width: usize,
    value_col_width: usize,
) -> Result<(), ReceiptError> {
    let label_pad = label_col_width.saturating_sub(label.chars().count());
    let value_pad = value_col_width.saturating_sub(value.chars().count());

    writeln!(
        out,
        "{:>label_pad$}{label}  {:>value_pad$}{value}",
        "", ""
    )
    .map_err(|_err| ReceiptError::IO)
}
