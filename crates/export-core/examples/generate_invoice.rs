//! Example: export a default invoice preview to a single-page PDF
//!
//! The rasterizer here is a stand-in that hands back a plain white
//! page; a real host renders the preview element and returns its
//! pixels instead.
//!
//! Run with:
//!   cargo run --example generate_invoice
//!
//! The file is written to the `output/` directory.

use chrono::NaiveDate;
use export_core::{
    default_file_name, Bitmap, DetachedPage, ExportError, ExportStatus, Exporter, PreviewHandle,
    PreviewSource, RasterOptions, Rasterizer,
};
use shared_types::{Document, DocumentKind, Totals};

/// The one live preview element of this fake session.
struct SessionPreview;

impl PreviewSource for SessionPreview {
    fn find(&self, element_id: &str) -> Option<PreviewHandle> {
        (element_id == "invoice-preview").then(|| PreviewHandle {
            element_id: element_id.to_string(),
            page_scale: 0.85,
            name_scale: 1.0,
        })
    }
}

/// Produces a blank page at the requested print resolution.
struct BlankPageRasterizer;

impl Rasterizer for BlankPageRasterizer {
    fn rasterize(
        &self,
        _page: &DetachedPage,
        options: &RasterOptions,
    ) -> Result<Bitmap, ExportError> {
        let width = 794 * options.scale;
        let height = 1123 * options.scale;
        Bitmap::solid(width, height, options.background)
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let output_dir = std::path::Path::new("output");
    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir).expect("Failed to create output directory");
    }

    let issue_date = NaiveDate::from_ymd_opt(2026, 8, 31).expect("valid date");
    let mut invoice = Document::with_issue_date(DocumentKind::Invoice, issue_date);
    let second_row = invoice.items[1].id.clone();
    invoice.update_item(&second_row, |item| {
        item.description = "ロゴデザイン".to_string();
        item.quantity = 1;
        item.unit_price = 50000;
    });

    let totals = Totals::of(&invoice);
    println!(
        "Invoice for {}: subtotal {}, tax {}, total {}",
        invoice.to_name,
        shared_types::format_currency(totals.subtotal),
        shared_types::format_currency(totals.tax),
        shared_types::format_currency(totals.total),
    );

    let file_name = default_file_name(&invoice);
    let exporter = Exporter::new();
    let outcome = exporter
        .export(
            &SessionPreview,
            &BlankPageRasterizer,
            "invoice-preview",
            &file_name,
        )
        .await;

    match outcome.status {
        ExportStatus::Saved => {
            let file = outcome.file.expect("saved outcome carries a file");
            let path = file.save_to(output_dir).expect("Failed to write PDF");
            println!("Wrote {}", path.display());
        }
        status => {
            eprintln!("Export did not complete: {:?} {:?}", status, outcome.error);
            std::process::exit(1);
        }
    }
}
