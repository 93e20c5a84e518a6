//! Shared document types for the invoice/quote maker
//!
//! A single [`Document`] covers both invoices and quotes; the only
//! structural difference between the two is the invoice-only bank
//! transfer block and the label strings hanging off [`DocumentKind`].
//! Derived amounts live in [`totals`] and are recomputed on demand,
//! never stored.

pub mod document;
pub mod totals;

pub use document::{due_date_for, BankInfo, Document, DocumentKind, LineItem};
pub use totals::{format_currency, format_date_jp, subtotal, tax, total, Totals};
