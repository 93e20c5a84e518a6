//! Fixed page geometry
//!
//! The preview sheet is a physical A4 page laid out at 96 DPI with a
//! 20 mm padding on every side. box-sizing includes the padding in the
//! stated height, so the usable content height is the client height
//! minus the vertical padding.

/// A4 portrait at 96 DPI.
pub const A4_WIDTH_PX: f64 = 794.0;
pub const A4_HEIGHT_PX: f64 = 1123.0;

pub const PX_PER_MM: f64 = 96.0 / 25.4;

/// Page padding on each side.
pub const PAGE_PADDING_MM: f64 = 20.0;

/// Vertical padding total (top + bottom), in pixels.
pub fn page_padding_y_px() -> f64 {
    2.0 * PAGE_PADDING_MM * PX_PER_MM
}
