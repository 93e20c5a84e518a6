//! Auto-fit layout engine for the single-page document preview
//!
//! Keeps a variable-length document on exactly one fixed A4 page by
//! computing a uniform shrink factor ([`PageFit`]), and keeps the
//! client-name heading from overflowing its column with an independent
//! factor ([`NameFit`]). A third, outer factor fits the whole sheet to
//! the preview pane width ([`preview::fit_width`]).
//!
//! The engine never measures anything itself: callers supply
//! measurements through [`MeasurePage`] / [`MeasureName`], which stand
//! in for whatever layout/text-measurement backend hosts the preview.

pub mod measure;
pub mod name_fit;
pub mod page;
pub mod page_fit;
pub mod preview;

pub use measure::{MeasureName, MeasurePage, NameMetrics, PageMetrics};
pub use name_fit::{NameFit, NAME_SCALE_EPSILON};
pub use page_fit::{FitUpdate, PageFit};
pub use preview::{fit_width, PreviewLayout};
