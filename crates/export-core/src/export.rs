//! The export flow
//!
//! Strictly sequential: locate -> detach full-size copy -> settle
//! delay -> rasterize -> discard copy -> assemble PDF. A second export
//! while one is in flight is rejected outright; both would own the
//! same transient off-screen region. No retries and no cancellation;
//! every failure is terminal for that attempt and leaves the process
//! usable.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::pdf;
use crate::raster::{DetachedPage, PreviewSource, RasterOptions, Rasterizer};

/// Grace period for async resources (fonts, images) loading in the
/// detached copy before it is rasterized.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportStatus {
    Saved,
    /// The named preview element does not exist; logged, no output.
    TargetMissing,
    /// Another export is already in flight.
    Busy,
    /// Rasterization or PDF assembly failed; logged, no partial file.
    Failed,
}

/// The finished artifact, ready to persist under its derived name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PdfFile {
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, crate::ExportError> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

#[derive(Debug)]
pub struct ExportOutcome {
    pub status: ExportStatus,
    pub file: Option<PdfFile>,
    pub error: Option<String>,
}

impl ExportOutcome {
    fn saved(file: PdfFile) -> Self {
        Self {
            status: ExportStatus::Saved,
            file: Some(file),
            error: None,
        }
    }

    fn target_missing() -> Self {
        Self {
            status: ExportStatus::TargetMissing,
            file: None,
            error: None,
        }
    }

    fn busy() -> Self {
        Self {
            status: ExportStatus::Busy,
            file: None,
            error: None,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            status: ExportStatus::Failed,
            file: None,
            error: Some(message),
        }
    }
}

/// One exporter per session; serializes export requests.
#[derive(Debug, Default)]
pub struct Exporter {
    in_flight: AtomicBool,
}

struct ClearFlag<'a>(&'a AtomicBool);

impl Drop for ClearFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_exporting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Export the preview identified by `element_id` as a PDF named
    /// `file_name`. All failure modes come back as an outcome status,
    /// never as a panic or an unhandled error.
    pub async fn export(
        &self,
        source: &impl PreviewSource,
        rasterizer: &impl Rasterizer,
        element_id: &str,
        file_name: &str,
    ) -> ExportOutcome {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!(element_id, "export already in flight, rejecting");
            return ExportOutcome::busy();
        }
        let _guard = ClearFlag(&self.in_flight);

        let Some(handle) = source.find(element_id) else {
            tracing::error!(element_id, "export target not found");
            return ExportOutcome::target_missing();
        };

        // Full-fidelity copy with the live scaling neutralized.
        let page = DetachedPage::from_handle(&handle);

        tokio::time::sleep(SETTLE_DELAY).await;

        let options = RasterOptions::default();
        let bitmap = match rasterizer.rasterize(&page, &options) {
            Ok(bitmap) => bitmap,
            Err(e) => {
                tracing::error!(error = %e, element_id, "failed to rasterize preview");
                return ExportOutcome::failed(e.to_string());
            }
        };
        // The detached copy has served its purpose.
        drop(page);

        let bytes = match pdf::assemble_pdf(&bitmap) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(error = %e, "failed to assemble PDF");
                return ExportOutcome::failed(e.to_string());
            }
        };

        tracing::debug!(file_name, size = bytes.len(), "export complete");
        ExportOutcome::saved(PdfFile {
            file_name: file_name.to_string(),
            bytes,
        })
    }
}
