//! Derived totals over a document's line items
//!
//! Pure functions, recomputed on every render. Nothing here is stored
//! on the document itself.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::document::{Document, LineItem};

/// Sum of quantity x unit price over all rows. Empty list is 0.
pub fn subtotal(items: &[LineItem]) -> i64 {
    items.iter().map(LineItem::line_total).sum()
}

/// Consumption tax, floored. Always 0 while tax is disabled.
///
/// The floor (not round) is deliberate and matches how the totals are
/// presented on the printed sheet.
pub fn tax(subtotal: i64, rate: f64, enabled: bool) -> i64 {
    if !enabled {
        return 0;
    }
    ((subtotal as f64) * rate).floor() as i64
}

pub fn total(subtotal: i64, tax: i64) -> i64 {
    subtotal + tax
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: i64,
    pub tax: i64,
    pub total: i64,
}

impl Totals {
    pub fn of(document: &Document) -> Self {
        let subtotal = subtotal(&document.items);
        let tax = tax(subtotal, document.tax_rate, document.enable_tax);
        Self {
            subtotal,
            tax,
            total: total(subtotal, tax),
        }
    }
}

/// "¥1,234,567" -- yen glyph plus 3-digit grouping, no decimals.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("¥-{grouped}")
    } else {
        format!("¥{grouped}")
    }
}

/// "2026年8月31日" -- the fixed display locale for dates.
pub fn format_date_jp(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}
