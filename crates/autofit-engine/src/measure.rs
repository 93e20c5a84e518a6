//! Measurement inputs supplied by the host layout backend
//!
//! The fit algorithms only ever see these snapshots. A `None` from a
//! provider, or a snapshot with non-finite or non-positive dimensions,
//! means the container is not laid out yet: the engine skips that
//! cycle rather than divide by zero or apply a NaN scale.

use serde::{Deserialize, Serialize};

/// A snapshot of the page box and its content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    /// Rendered height of the page box, padding included.
    pub client_height: f64,
    /// Top plus bottom padding of the page box.
    pub padding_y: f64,
    /// Natural (unscaled) height of the content. The content is
    /// width-compensated, so this is independent of the applied scale
    /// and line breaks never move when the scale changes.
    pub layout_height: f64,
}

impl PageMetrics {
    pub fn available_height(&self) -> f64 {
        self.client_height - self.padding_y
    }

    pub fn is_ready(&self) -> bool {
        self.client_height.is_finite()
            && self.padding_y.is_finite()
            && self.layout_height.is_finite()
            && self.layout_height > 0.0
            && self.available_height() > 0.0
    }
}

/// A snapshot of the client-name heading and its column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NameMetrics {
    /// Width of the column the name sits in.
    pub container_width: f64,
    /// Width the name would occupy unscaled on a single line (the name
    /// is forced to not wrap).
    pub natural_width: f64,
}

impl NameMetrics {
    pub fn is_ready(&self) -> bool {
        self.container_width.is_finite()
            && self.natural_width.is_finite()
            && self.container_width > 0.0
            && self.natural_width >= 0.0
    }
}

/// Page-box measurement capability of the host.
pub trait MeasurePage {
    /// `None` while the page box cannot be measured yet.
    fn page_metrics(&self) -> Option<PageMetrics>;
}

/// Client-name measurement capability of the host.
pub trait MeasureName {
    fn name_metrics(&self) -> Option<NameMetrics>;
}
