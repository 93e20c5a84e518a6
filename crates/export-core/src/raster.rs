//! Raster pipeline types
//!
//! [`PreviewHandle`] identifies the live, possibly scaled preview;
//! [`DetachedPage`] is its off-screen full-fidelity copy with every
//! scale transform reset; [`Rasterizer`] is the host-provided
//! "render to pixels" collaborator.

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// The currently rendered preview element and its live scale state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewHandle {
    pub element_id: String,
    pub page_scale: f64,
    pub name_scale: f64,
}

/// Lookup of live preview elements by id.
pub trait PreviewSource {
    fn find(&self, element_id: &str) -> Option<PreviewHandle>;
}

/// A detached copy of the preview, positioned off-screen, with all
/// scaling reset and explicit full-page physical dimensions, so it
/// renders at true size no matter what the live preview looks like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetachedPage {
    pub element_id: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub page_scale: f64,
    pub name_scale: f64,
}

impl DetachedPage {
    pub fn from_handle(handle: &PreviewHandle) -> Self {
        Self {
            element_id: handle.element_id.clone(),
            width_mm: 210.0,
            height_mm: 297.0,
            page_scale: 1.0,
            name_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterOptions {
    /// Upscale factor over the 96 DPI page size, for print quality.
    pub scale: u32,
    /// Forced opaque background, regardless of page transparency.
    pub background: [u8; 3],
    /// Keep going when cross-origin images cannot be fetched cleanly.
    pub allow_cross_origin: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 4,
            background: [0xff, 0xff, 0xff],
            allow_cross_origin: true,
        }
    }
}

/// An opaque RGB8 raster of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Wrap raw RGB8 pixel data, row-major, 3 bytes per pixel.
    pub fn rgb8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ExportError> {
        if width == 0 || height == 0 {
            return Err(ExportError::InvalidBitmap(format!(
                "zero dimension: {}x{}",
                width, height
            )));
        }
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(ExportError::InvalidBitmap(format!(
                "expected {} bytes for {}x{} RGB8, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A single-color page, handy for stub rasterizers.
    pub fn solid(width: u32, height: u32, color: [u8; 3]) -> Result<Self, ExportError> {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..(width as usize * height as usize) {
            pixels.extend_from_slice(&color);
        }
        Self::rgb8(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// height / width
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }
}

/// Host-provided "render this element to pixels" capability
/// (the html2canvas of whatever platform hosts the preview).
pub trait Rasterizer {
    fn rasterize(&self, page: &DetachedPage, options: &RasterOptions)
        -> Result<Bitmap, ExportError>;
}
