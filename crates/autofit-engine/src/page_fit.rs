//! Page-fit: uniform shrink so the document stays on one page

use serde::{Deserialize, Serialize};

use crate::measure::{MeasurePage, PageMetrics};

/// Slack below which an overflow is ignored, to keep sub-pixel
/// rounding from oscillating between correction and re-measure.
pub const OVERFLOW_SLACK_PX: f64 = 1.0;

/// Result of one correction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitUpdate {
    /// The scale changed; the host must re-render.
    Applied,
    /// Content already fits (or the change was below the threshold).
    Unchanged,
    /// Container not measurable yet; skipped this cycle.
    NotReady,
}

/// Uniform visual scale keeping the content inside the fixed page box.
///
/// Scaling is applied by the host as a top-left-anchored transform on
/// content whose layout width is widened by the inverse of the scale,
/// so shrinking never moves line breaks. The correction is single-shot
/// from the current layout height, not an iterative search: if a
/// re-wrap does shift the height after correction (compensation can in
/// principle merge or split a line), the result may slightly over- or
/// under-fit, and that is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageFit {
    scale: f64,
}

impl PageFit {
    pub fn new() -> Self {
        Self { scale: 1.0 }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Back to 100%. Called whenever the document content changes; the
    /// next correction starts from scratch rather than refining the
    /// previous scale.
    pub fn reset(&mut self) {
        self.scale = 1.0;
    }

    /// Run one correction cycle against the given measurements.
    ///
    /// Shrinks when the visual height overflows the available height by
    /// more than [`OVERFLOW_SLACK_PX`]; never enlarges. Idempotent at
    /// the fixed point: once the content fits, repeated calls with the
    /// same metrics do nothing.
    pub fn correct(&mut self, metrics: PageMetrics) -> FitUpdate {
        if !metrics.is_ready() {
            return FitUpdate::NotReady;
        }

        let available = metrics.available_height();
        let visual_height = metrics.layout_height * self.scale;

        if visual_height > available + OVERFLOW_SLACK_PX {
            self.scale = available / metrics.layout_height;
            tracing::debug!(
                scale = self.scale,
                layout_height = metrics.layout_height,
                available,
                "page content overflowed, shrinking"
            );
            FitUpdate::Applied
        } else {
            FitUpdate::Unchanged
        }
    }

    pub fn correct_from(&mut self, provider: &impl MeasurePage) -> FitUpdate {
        match provider.page_metrics() {
            Some(metrics) => self.correct(metrics),
            None => FitUpdate::NotReady,
        }
    }
}

impl Default for PageFit {
    fn default() -> Self {
        Self::new()
    }
}
