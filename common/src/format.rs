//! Text formatting for amounts, dates and labels.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::TransactionKind;

const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[day]/[month]/[year]");
const ISO_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Format `amount` as Brazilian reais with two decimals, e.g. "R$ 12.30".
///
/// Negative amounts keep their sign after the symbol, e.g. "R$ -5.00".
pub fn format_currency(amount: f64) -> String {
    // Avoid printing "-0.00" for values that round to zero.
    let amount = if amount.abs() < 0.005 { 0.0 } else { amount };

    format!("R$ {amount:.2}")
}

/// Format the magnitude of `amount` with a leading sign chosen by `kind`,
/// e.g. "+ R$ 100.00" for income and "- R$ 40.00" for an expense.
pub fn format_signed_amount(amount: f64, kind: TransactionKind) -> String {
    let sign = match kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };

    format!("{sign} {}", format_currency(amount.abs()))
}

/// Format `date` the way Brazilian users read it, e.g. "05/03/2025".
pub fn format_date(date: Date) -> String {
    date.format(DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Parse a date in the `YYYY-MM-DD` format used by HTML date inputs and the API.
pub fn parse_iso_date(text: &str) -> Option<Date> {
    Date::parse(text, ISO_DATE_FORMAT).ok()
}
