//! Export adapter: preview -> raster image -> single-page A4 PDF
//!
//! The live preview renders with visual scaling applied; exporting
//! takes a detached full-size copy with the scaling neutralized, lets
//! async resources settle, rasterizes the copy at print resolution and
//! embeds the bitmap into a one-page A4 portrait PDF.
//!
//! The actual pixel production is delegated to a [`Rasterizer`]
//! implementation supplied by the host; this crate owns the flow,
//! the PDF assembly and the file-name derivation.

pub mod error;
pub mod export;
pub mod filename;
pub mod pdf;
pub mod raster;

pub use error::ExportError;
pub use export::{ExportOutcome, ExportStatus, Exporter, PdfFile, SETTLE_DELAY};
pub use filename::{default_file_name, sanitize_client_name};
pub use pdf::{assemble_pdf, A4_HEIGHT_PT, A4_WIDTH_PT};
pub use raster::{Bitmap, DetachedPage, PreviewHandle, PreviewSource, RasterOptions, Rasterizer};
