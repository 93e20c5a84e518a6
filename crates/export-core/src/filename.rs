//! Default export file names
//!
//! Pattern: `{year}年{month}月_{client}様{label}.pdf`, with the client
//! name cleaned of honorifics and filesystem-unsafe characters.

use chrono::Datelike;
use shared_types::Document;

const UNSAFE_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

const FALLBACK_CLIENT: &str = "Client";

/// Derive the default file name from the document's issue date, client
/// name and kind.
pub fn default_file_name(document: &Document) -> String {
    format!(
        "{}年{}月_{}様{}.pdf",
        document.issue_date.year(),
        document.issue_date.month(),
        sanitize_client_name(&document.to_name),
        document.kind.file_label()
    )
}

/// First line of the name, honorifics (御中/様) removed everywhere,
/// filesystem-unsafe characters dropped, whitespace trimmed. An empty
/// result falls back to a generic label.
pub fn sanitize_client_name(name: &str) -> String {
    let first_line = name.lines().next().unwrap_or("");
    let stripped = first_line.replace("御中", "").replace('様', "");
    let cleaned: String = stripped.chars().filter(|c| !UNSAFE_CHARS.contains(c)).collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        FALLBACK_CLIENT.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use shared_types::DocumentKind;

    #[test]
    fn strips_honorifics_and_unsafe_characters() {
        assert_eq!(sanitize_client_name("株式会社サンプル御中"), "株式会社サンプル");
        assert_eq!(sanitize_client_name("山田太郎様"), "山田太郎");
        assert_eq!(sanitize_client_name("A/B:C*株式会社?"), "ABC株式会社");
        assert_eq!(sanitize_client_name("  トリム商事  "), "トリム商事");
    }

    #[test]
    fn only_the_first_line_is_used() {
        assert_eq!(sanitize_client_name("一行目商事\n二行目は住所"), "一行目商事");
    }

    #[test]
    fn empty_or_honorific_only_names_fall_back() {
        assert_eq!(sanitize_client_name(""), "Client");
        assert_eq!(sanitize_client_name("御中"), "Client");
        assert_eq!(sanitize_client_name("   "), "Client");
    }

    #[test]
    fn invoice_and_quote_get_their_labels() {
        let mut invoice = Document::with_issue_date(
            DocumentKind::Invoice,
            NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
        );
        invoice.to_name = "株式会社サンプルクライアント御中".to_string();
        assert_eq!(
            default_file_name(&invoice),
            "2026年8月_株式会社サンプルクライアント様請求書.pdf"
        );

        let mut quote = Document::with_issue_date(
            DocumentKind::Quote,
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        );
        quote.to_name = "テスト商事様".to_string();
        assert_eq!(default_file_name(&quote), "2025年12月_テスト商事様御見積書.pdf");
    }
}
