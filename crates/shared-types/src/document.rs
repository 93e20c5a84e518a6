//! The in-memory document model
//!
//! One mutable `Document` per open session. Item order is insertion
//! order and is display-significant: edits and removals never renumber
//! or reuse ids. Visibility toggles are a display concern only, the
//! underlying value is kept while hidden.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One row of the document: a quantity x unit-price charge.
///
/// `unit_price` is integer yen (no minor unit). The form keeps both
/// fields non-negative; that is an assumed precondition here, not a
/// guarded one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub description: String,
    pub quantity: u32,
    pub unit_price: i64,
}

impl LineItem {
    /// A fresh, empty row with a new unique id.
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            description: String::new(),
            quantity: 0,
            unit_price: 0,
        }
    }

    pub fn line_total(&self) -> i64 {
        i64::from(self.quantity) * self.unit_price
    }

    /// Blank rows render as empty cells instead of "0" in the preview.
    pub fn is_blank(&self) -> bool {
        self.description.is_empty() && self.quantity == 0 && self.unit_price == 0
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Invoice,
    Quote,
}

impl DocumentKind {
    /// Page heading.
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "請求書",
            DocumentKind::Quote => "見積書",
        }
    }

    /// Label used in the exported file name.
    pub fn file_label(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "請求書",
            DocumentKind::Quote => "御見積書",
        }
    }

    pub fn number_prefix(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "INV-",
            DocumentKind::Quote => "Q-",
        }
    }
}

/// Bank transfer details, shown on invoices only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankInfo {
    pub bank_name: String,
    pub branch: String,
    pub account_number: String,
    pub account_holder: String,
}

impl Default for BankInfo {
    fn default() -> Self {
        Self {
            bank_name: "◯◯銀行".to_string(),
            branch: "◯◯支店".to_string(),
            account_number: "普通 1234567".to_string(),
            account_holder: "ヤマダ タロウ".to_string(),
        }
    }
}

/// A business document: an invoice or a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub kind: DocumentKind,
    pub number: String,
    pub issue_date: NaiveDate,
    /// Payment deadline (invoice) or quote expiry.
    pub due_date: NaiveDate,
    pub from_name: String,
    pub from_address: String,
    pub from_phone: String,
    pub to_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub items: Vec<LineItem>,
    pub tax_rate: f64,
    pub enable_tax: bool,
    pub show_number: bool,
    pub show_registration_number: bool,
    pub show_phone: bool,
    /// Present on invoices, absent on quotes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankInfo>,
}

/// Default payment deadline: the last day of the month after the issue
/// month (issue in January -> due February 28/29).
pub fn due_date_for(issue_date: NaiveDate) -> NaiveDate {
    let (year, month) = if issue_date.month() >= 11 {
        (issue_date.year() + 1, issue_date.month() - 10)
    } else {
        (issue_date.year(), issue_date.month() + 2)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(issue_date)
}

impl Document {
    /// A new document seeded the way the form starts out: one sample
    /// row, two blank rows, tax enabled at 10%.
    pub fn new(kind: DocumentKind) -> Self {
        let issue_date = chrono::Local::now().date_naive();
        Self::with_issue_date(kind, issue_date)
    }

    pub fn with_issue_date(kind: DocumentKind, issue_date: NaiveDate) -> Self {
        let sample = LineItem {
            description: "バナー制作".to_string(),
            quantity: 1,
            unit_price: 10000,
            ..LineItem::new()
        };
        Self {
            kind,
            number: format!("{}001", kind.number_prefix()),
            issue_date,
            due_date: due_date_for(issue_date),
            from_name: "山田 太郎".to_string(),
            from_address: "〒000-0000\n東京都架空区架空町1-2-3".to_string(),
            from_phone: "01-2345-6789".to_string(),
            to_name: "株式会社サンプルクライアント御中".to_string(),
            to_address: None,
            registration_number: Some("T1234567890123".to_string()),
            notes: None,
            items: vec![sample, LineItem::new(), LineItem::new()],
            tax_rate: 0.10,
            enable_tax: true,
            show_number: true,
            show_registration_number: true,
            show_phone: true,
            bank: match kind {
                DocumentKind::Invoice => Some(BankInfo::default()),
                DocumentKind::Quote => None,
            },
        }
    }

    /// Append a fresh blank row and return its id. Existing rows keep
    /// their order and ids.
    pub fn add_item(&mut self) -> String {
        let item = LineItem::new();
        let id = item.id.clone();
        self.items.push(item);
        id
    }

    /// Edit the row with the given id in place. Returns false if no
    /// such row exists.
    pub fn update_item(&mut self, id: &str, edit: impl FnOnce(&mut LineItem)) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                edit(item);
                true
            }
            None => false,
        }
    }

    /// Remove exactly the row with the given id, preserving the
    /// relative order of the rest.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_items_get_unique_ids() {
        let a = LineItem::new();
        let b = LineItem::new();
        assert_ne!(a.id, b.id);
        assert_eq!(a.quantity, 0);
        assert_eq!(a.unit_price, 0);
        assert!(a.is_blank());
    }

    #[test]
    fn add_item_appends_and_preserves_existing_rows() {
        let mut doc = Document::with_issue_date(DocumentKind::Invoice, date(2026, 8, 31));
        let before: Vec<String> = doc.items.iter().map(|i| i.id.clone()).collect();

        let new_id = doc.add_item();

        assert_eq!(doc.items.len(), before.len() + 1);
        let after: Vec<String> = doc.items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last().unwrap(), &new_id);
        assert!(doc.items.last().unwrap().is_blank());
        assert!(!before.contains(&new_id));
    }

    #[test]
    fn update_item_edits_by_id() {
        let mut doc = Document::with_issue_date(DocumentKind::Quote, date(2026, 8, 31));
        let id = doc.items[1].id.clone();

        let found = doc.update_item(&id, |item| {
            item.description = "ロゴ制作".to_string();
            item.quantity = 2;
            item.unit_price = 30000;
        });

        assert!(found);
        assert_eq!(doc.items[1].description, "ロゴ制作");
        assert_eq!(doc.items[1].line_total(), 60000);
        assert!(!doc.update_item("no-such-id", |item| item.quantity = 99));
    }

    #[test]
    fn remove_item_keeps_relative_order() {
        let mut doc = Document::with_issue_date(DocumentKind::Invoice, date(2026, 8, 31));
        let removed = doc.items[1].id.clone();
        let kept: Vec<String> = doc
            .items
            .iter()
            .filter(|i| i.id != removed)
            .map(|i| i.id.clone())
            .collect();

        assert!(doc.remove_item(&removed));
        let after: Vec<String> = doc.items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(after, kept);
        assert!(!doc.remove_item(&removed));
    }

    #[test]
    fn hiding_a_field_retains_its_value() {
        let mut doc = Document::with_issue_date(DocumentKind::Invoice, date(2026, 8, 31));
        let number = doc.number.clone();
        let registration = doc.registration_number.clone();

        doc.show_number = false;
        doc.show_registration_number = false;
        doc.show_number = true;
        doc.show_registration_number = true;

        assert_eq!(doc.number, number);
        assert_eq!(doc.registration_number, registration);
    }

    #[test]
    fn due_date_is_last_day_of_following_month() {
        assert_eq!(due_date_for(date(2026, 1, 15)), date(2026, 2, 28));
        assert_eq!(due_date_for(date(2024, 1, 10)), date(2024, 2, 29));
        assert_eq!(due_date_for(date(2026, 8, 31)), date(2026, 9, 30));
        assert_eq!(due_date_for(date(2025, 11, 3)), date(2025, 12, 31));
        assert_eq!(due_date_for(date(2025, 12, 5)), date(2026, 1, 31));
    }

    #[test]
    fn invoice_has_bank_block_and_quote_does_not() {
        let invoice = Document::with_issue_date(DocumentKind::Invoice, date(2026, 8, 31));
        let quote = Document::with_issue_date(DocumentKind::Quote, date(2026, 8, 31));
        assert!(invoice.bank.is_some());
        assert!(quote.bank.is_none());
        assert_eq!(invoice.number, "INV-001");
        assert_eq!(quote.number, "Q-001");
        assert_eq!(invoice.kind.title(), "請求書");
        assert_eq!(quote.kind.title(), "見積書");
    }

    #[test]
    fn document_round_trips_through_json() {
        let doc = Document::with_issue_date(DocumentKind::Invoice, date(2026, 8, 31));
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
