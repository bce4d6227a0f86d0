//! Text preview of a merge result
//!
//! Presentation only: amounts are shown as US dollars here, but the
//! exported CSV always carries the raw amount text.

use crate::types::{MergeError, Transaction};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;
use std::str::FromStr;

fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a raw amount as US currency
///
/// Empty input stays empty and text that is not a plain decimal is returned
/// unchanged.
///
/// ```
/// use statement_merger::io::preview::format_amount;
///
/// assert_eq!(format_amount("1234.5"), "$1,234.50");
/// assert_eq!(format_amount("-15"), "-$15.00");
/// assert_eq!(format_amount(""), "");
/// ```
pub fn format_amount(raw: &str) -> String {
    let Some(amount) = parse_amount(raw) else {
        return raw.trim().to_string();
    };

    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// True when the amount is a negative number (money leaving the account)
pub fn is_debit(raw: &str) -> bool {
    parse_amount(raw).is_some_and(|amount| amount.is_sign_negative() && !amount.is_zero())
}

fn account_label(transaction: &Transaction) -> String {
    format!("{} {}", transaction.name, transaction.last4)
        .trim()
        .to_string()
}

/// Write a table of the merged transactions
///
/// Debit rows are flagged with `*` in the last column.
pub fn write_preview(transactions: &[Transaction], output: &mut dyn Write) -> Result<(), MergeError> {
    writeln!(output, "Showing {} transactions", transactions.len())?;
    if transactions.is_empty() {
        return Ok(());
    }

    let rows: Vec<[String; 4]> = transactions
        .iter()
        .map(|t| {
            [
                account_label(t),
                t.date.clone(),
                t.description.clone(),
                format_amount(&t.amount),
            ]
        })
        .collect();

    let headers = ["Account", "Date", "Description", "Amount"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(
        output,
        "{:<w0$}  {:<w1$}  {:<w2$}  {:>w3$}",
        headers[0],
        headers[1],
        headers[2],
        headers[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    )?;

    for (row, transaction) in rows.iter().zip(transactions) {
        let marker = if is_debit(&transaction.amount) { " *" } else { "" };
        writeln!(
            output,
            "{:<w0$}  {:<w1$}  {:<w2$}  {:>w3$}{}",
            row[0],
            row[1],
            row[2],
            row[3],
            marker,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        )?;
    }

    Ok(())
}
