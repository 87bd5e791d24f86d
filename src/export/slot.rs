//! Export job runner
//!
//! Runs capture, composition, and the file write on a worker thread and
//! makes sure at most one export is in flight at a time.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use tracing::{info, warn};

use super::capture::{RegionCapture, CAPTURE_SCALE};
use super::pdf::{save_document, PageComposer};
use crate::error::{BudgetError, BudgetResult};
use crate::presenter::ResultsRegion;

/// Run the whole export synchronously and return the saved path
pub fn export_region<C: RegionCapture + ?Sized>(
    region: &ResultsRegion,
    capture: &C,
    composer: &PageComposer,
    output_dir: &Path,
) -> BudgetResult<PathBuf> {
    let snapshot = capture.capture(region, CAPTURE_SCALE)?;
    let bytes = composer.compose(&snapshot)?;
    save_document(output_dir, &bytes)
}

/// What happened when an export was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStart {
    /// A worker is now producing the document
    Started,
    /// No results region is rendered, nothing to export
    NothingToExport,
}

/// Serialization point for exports
///
/// An export is in flight exactly while the slot holds a receiver.
#[derive(Debug, Default)]
pub struct ExportSlot {
    pending: Option<mpsc::Receiver<BudgetResult<PathBuf>>>,
}

impl ExportSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an export is currently running
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Start an export of `region` on a worker thread
    ///
    /// Returns `NothingToExport` when there is no region and
    /// `BudgetError::ExportInProgress` when a previous export has not
    /// finished yet.
    pub fn start<C>(
        &mut self,
        region: Option<ResultsRegion>,
        capture: C,
        composer: PageComposer,
        output_dir: PathBuf,
    ) -> BudgetResult<ExportStart>
    where
        C: RegionCapture + Send + 'static,
    {
        let Some(region) = region else {
            return Ok(ExportStart::NothingToExport);
        };

        if self.is_busy() {
            warn!("export requested while another one is running");
            return Err(BudgetError::ExportInProgress);
        }

        let (sender, receiver) = mpsc::channel();
        thread::Builder::new()
            .name("pdf-export".into())
            .spawn(move || {
                let result = export_region(&region, &capture, &composer, &output_dir);
                // The slot may have been dropped; nobody is left to tell
                let _ = sender.send(result);
            })
            .map_err(|e| BudgetError::Export(format!("Failed to start export: {}", e)))?;

        info!("export started");
        self.pending = Some(receiver);
        Ok(ExportStart::Started)
    }

    /// Collect the finished export, if any, without blocking
    pub fn poll(&mut self) -> Option<BudgetResult<PathBuf>> {
        let receiver = self.pending.as_ref()?;
        match receiver.try_recv() {
            Ok(result) => {
                self.pending = None;
                Some(result)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.pending = None;
                Some(Err(BudgetError::Export("export worker stopped".into())))
            }
        }
    }

    /// Block until the running export finishes
    pub fn wait(&mut self) -> Option<BudgetResult<PathBuf>> {
        let receiver = self.pending.take()?;
        Some(
            receiver
                .recv()
                .unwrap_or_else(|_| Err(BudgetError::Export("export worker stopped".into()))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::capture::{BufferCapture, Snapshot};
    use crate::export::pdf::inspect;
    use crate::models::{Currency, FinancialInput};
    use crate::presenter::BudgetView;
    use std::sync::{Arc, Barrier};
    use tempfile::TempDir;

    fn region() -> ResultsRegion {
        let mut view = BudgetView::with_input(FinancialInput::new(5000.0, 800.0, 5.5));
        view.compute();
        view.results_region(Currency::Usd).unwrap()
    }

    /// Holds the worker until the test releases it
    struct GatedCapture {
        gate: Arc<Barrier>,
    }

    impl RegionCapture for GatedCapture {
        fn capture(&self, region: &ResultsRegion, scale: u32) -> BudgetResult<Snapshot> {
            self.gate.wait();
            BufferCapture::new().capture(region, scale)
        }
    }

    struct FailingCapture;

    impl RegionCapture for FailingCapture {
        fn capture(&self, _region: &ResultsRegion, _scale: u32) -> BudgetResult<Snapshot> {
            Err(BudgetError::Capture("region is not renderable".into()))
        }
    }

    #[test]
    fn test_export_region_writes_pdf() {
        let temp_dir = TempDir::new().unwrap();
        let path = export_region(
            &region(),
            &BufferCapture::new(),
            &PageComposer::default(),
            temp_dir.path(),
        )
        .unwrap();

        assert!(path.ends_with("budget-breakdown.pdf"));
        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let snapshot = BufferCapture::new().capture(&region(), CAPTURE_SCALE).unwrap();
        let aspect = snapshot.height() as f32 / snapshot.width() as f32;
        let page = PageComposer::default().page();
        let transform = inspect::image_transform(&bytes).unwrap();
        assert_eq!(inspect::page_count(&bytes), Some(1));
        assert!((transform[0] - page.width_pt()).abs() < 0.01);
        assert!((transform[3] / transform[0] - aspect).abs() < 1e-3);
        assert!((transform[5] + transform[3] - page.height_pt()).abs() < 0.01);
    }

    #[test]
    fn test_no_region_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut slot = ExportSlot::new();
        let outcome = slot
            .start(
                None,
                BufferCapture::new(),
                PageComposer::default(),
                temp_dir.path().to_path_buf(),
            )
            .unwrap();

        assert_eq!(outcome, ExportStart::NothingToExport);
        assert!(!slot.is_busy());
        assert!(slot.poll().is_none());
        assert!(!temp_dir.path().join("budget-breakdown.pdf").exists());
    }

    #[test]
    fn test_second_export_rejected_while_in_flight() {
        let temp_dir = TempDir::new().unwrap();
        let gate = Arc::new(Barrier::new(2));
        let mut slot = ExportSlot::new();

        let first = slot
            .start(
                Some(region()),
                GatedCapture { gate: gate.clone() },
                PageComposer::default(),
                temp_dir.path().to_path_buf(),
            )
            .unwrap();
        assert_eq!(first, ExportStart::Started);
        assert!(slot.is_busy());

        let second = slot.start(
            Some(region()),
            BufferCapture::new(),
            PageComposer::default(),
            temp_dir.path().to_path_buf(),
        );
        assert!(matches!(second, Err(BudgetError::ExportInProgress)));

        gate.wait();
        let path = slot.wait().unwrap().unwrap();
        assert!(path.exists());
        assert!(!slot.is_busy());
    }

    #[test]
    fn test_capture_failure_is_reported_and_slot_freed() {
        let temp_dir = TempDir::new().unwrap();
        let mut slot = ExportSlot::new();
        slot.start(
            Some(region()),
            FailingCapture,
            PageComposer::default(),
            temp_dir.path().to_path_buf(),
        )
        .unwrap();

        let err = slot.wait().unwrap().unwrap_err();
        assert!(err.is_export_failure());
        assert!(!slot.is_busy());

        // A new export can start right away
        let again = slot.start(
            Some(region()),
            BufferCapture::new(),
            PageComposer::default(),
            temp_dir.path().to_path_buf(),
        );
        assert_eq!(again.unwrap(), ExportStart::Started);
        assert!(slot.wait().unwrap().is_ok());
    }
}
