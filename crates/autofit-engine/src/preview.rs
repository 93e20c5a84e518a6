//! Preview pane fit and the per-preview layout state
//!
//! [`fit_width`] scales the whole sheet to the preview pane; it is
//! pure and cheap because the host calls it on every container resize.
//! [`PreviewLayout`] bundles the two inner fit factors for one
//! rendered preview and maps document mutations to their resets.

use serde::{Deserialize, Serialize};

use crate::measure::{MeasureName, MeasurePage};
use crate::name_fit::NameFit;
use crate::page::A4_WIDTH_PX;
use crate::page_fit::{FitUpdate, PageFit};

/// Horizontal gutter around the sheet inside the preview pane.
pub const PREVIEW_GUTTER_PX: f64 = 64.0;

pub const MIN_PREVIEW_SCALE: f64 = 0.2;

/// Scale the A4 sheet to the preview pane width, clamped to 0.2..=1.0.
/// Never upscales past true size; tiny panes bottom out at 20% rather
/// than vanish.
pub fn fit_width(container_width: f64) -> f64 {
    if !container_width.is_finite() || container_width <= 0.0 {
        return MIN_PREVIEW_SCALE;
    }
    ((container_width - PREVIEW_GUTTER_PX) / A4_WIDTH_PX).clamp(MIN_PREVIEW_SCALE, 1.0)
}

/// Fit state for one rendered preview instance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PreviewLayout {
    page: PageFit,
    name: NameFit,
}

impl PreviewLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any change to the document content: page scale restarts at
    /// 100% before the next correction.
    pub fn document_changed(&mut self) {
        self.page.reset();
    }

    /// The client-name text changed: its scale resets independently.
    pub fn client_name_changed(&mut self) {
        self.name.reset();
    }

    /// One synchronous correction cycle after a layout-affecting
    /// change. Either factor may come back [`FitUpdate::Applied`], in
    /// which case the host re-renders and calls this again; both
    /// algorithms are idempotent at their fixed points, so the cycle
    /// settles.
    pub fn relayout(
        &mut self,
        page_provider: &impl MeasurePage,
        name_provider: &impl MeasureName,
    ) -> (FitUpdate, FitUpdate) {
        (
            self.page.correct_from(page_provider),
            self.name.correct_from(name_provider),
        )
    }

    pub fn page_scale(&self) -> f64 {
        self.page.scale()
    }

    pub fn name_scale(&self) -> f64 {
        self.name.scale()
    }

    /// Layout width of the content node, as a percentage. The content
    /// is widened by the inverse of the scale so the visual transform
    /// shrinks it back to the page width without moving line breaks.
    pub fn content_width_percent(&self) -> f64 {
        100.0 / self.page.scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{NameMetrics, PageMetrics};
    use pretty_assertions::assert_eq;

    struct FixedMeasure {
        page: Option<PageMetrics>,
        name: Option<NameMetrics>,
    }

    impl MeasurePage for FixedMeasure {
        fn page_metrics(&self) -> Option<PageMetrics> {
            self.page
        }
    }

    impl MeasureName for FixedMeasure {
        fn name_metrics(&self) -> Option<NameMetrics> {
            self.name
        }
    }

    #[test]
    fn fit_width_clamps_to_bounds() {
        // 858 px pane: exactly 794 + 64 gutter, full size.
        assert_eq!(fit_width(858.0), 1.0);
        assert_eq!(fit_width(10_000.0), 1.0);
        assert_eq!(fit_width(100.0), 0.2);
        assert_eq!(fit_width(0.0), 0.2);
        assert_eq!(fit_width(f64::NAN), 0.2);

        let mid = fit_width(461.0);
        assert!((mid - (461.0 - 64.0) / 794.0).abs() < 1e-9);
    }

    #[test]
    fn fit_width_is_idempotent_per_width() {
        for width in [0.0, 300.0, 858.0, 2000.0] {
            assert_eq!(fit_width(width), fit_width(width));
        }
    }

    #[test]
    fn relayout_corrects_both_factors() {
        let measure = FixedMeasure {
            page: Some(PageMetrics {
                client_height: 1123.0,
                padding_y: 0.0,
                layout_height: 2000.0,
            }),
            name: Some(NameMetrics {
                container_width: 300.0,
                natural_width: 400.0,
            }),
        };

        let mut layout = PreviewLayout::new();
        let (page, name) = layout.relayout(&measure, &measure);
        assert_eq!(page, FitUpdate::Applied);
        assert_eq!(name, FitUpdate::Applied);
        assert!((layout.page_scale() - 0.5615).abs() < 1e-4);
        assert_eq!(layout.name_scale(), 0.75);

        // Settles on the second cycle.
        let (page, name) = layout.relayout(&measure, &measure);
        assert_eq!(page, FitUpdate::Unchanged);
        assert_eq!(name, FitUpdate::Unchanged);
    }

    #[test]
    fn resets_are_independent() {
        let measure = FixedMeasure {
            page: Some(PageMetrics {
                client_height: 1123.0,
                padding_y: 0.0,
                layout_height: 2000.0,
            }),
            name: Some(NameMetrics {
                container_width: 300.0,
                natural_width: 400.0,
            }),
        };

        let mut layout = PreviewLayout::new();
        layout.relayout(&measure, &measure);

        layout.client_name_changed();
        assert_eq!(layout.name_scale(), 1.0);
        assert!(layout.page_scale() < 1.0);

        layout.document_changed();
        assert_eq!(layout.page_scale(), 1.0);
    }

    #[test]
    fn width_compensation_is_inverse_of_scale() {
        let measure = FixedMeasure {
            page: Some(PageMetrics {
                client_height: 1000.0,
                padding_y: 0.0,
                layout_height: 2000.0,
            }),
            name: None,
        };

        let mut layout = PreviewLayout::new();
        assert_eq!(layout.content_width_percent(), 100.0);
        layout.relayout(&measure, &measure);
        assert_eq!(layout.page_scale(), 0.5);
        assert_eq!(layout.content_width_percent(), 200.0);
    }

    #[test]
    fn unready_measurements_leave_scales_alone() {
        let measure = FixedMeasure {
            page: None,
            name: None,
        };
        let mut layout = PreviewLayout::new();
        let (page, name) = layout.relayout(&measure, &measure);
        assert_eq!(page, FitUpdate::NotReady);
        assert_eq!(name, FitUpdate::NotReady);
        assert_eq!(layout.page_scale(), 1.0);
        assert_eq!(layout.name_scale(), 1.0);
    }
}
