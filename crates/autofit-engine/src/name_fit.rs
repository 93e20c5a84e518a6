//! Name-fit: independent shrink for the client-name heading
//!
//! The counterparty name renders on a single forced line; when the
//! text is wider than its column the whole heading is shrunk, anchored
//! at its left edge so it stays left-aligned.

use serde::{Deserialize, Serialize};

use crate::measure::{MeasureName, NameMetrics};
use crate::page_fit::FitUpdate;

/// Minimum change worth applying. Measurement feeds back into the next
/// render, so updates below this threshold are suppressed to stop the
/// measure/re-render loop from oscillating.
pub const NAME_SCALE_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NameFit {
    scale: f64,
}

impl NameFit {
    pub fn new() -> Self {
        Self { scale: 1.0 }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Called whenever the name text itself changes, independently of
    /// the page-fit reset.
    pub fn reset(&mut self) {
        self.scale = 1.0;
    }

    /// Run one correction cycle. Shrinks only; a name narrower than
    /// its column is left at the current scale.
    pub fn correct(&mut self, metrics: NameMetrics) -> FitUpdate {
        if !metrics.is_ready() {
            return FitUpdate::NotReady;
        }

        if metrics.natural_width > metrics.container_width {
            let candidate = metrics.container_width / metrics.natural_width;
            if (candidate - self.scale).abs() > NAME_SCALE_EPSILON {
                self.scale = candidate;
                tracing::debug!(scale = self.scale, "client name overflowed, shrinking");
                return FitUpdate::Applied;
            }
        }
        FitUpdate::Unchanged
    }

    pub fn correct_from(&mut self, provider: &impl MeasureName) -> FitUpdate {
        match provider.name_metrics() {
            Some(metrics) => self.correct(metrics),
            None => FitUpdate::NotReady,
        }
    }
}

impl Default for NameFit {
    fn default() -> Self {
        Self::new()
    }
}
