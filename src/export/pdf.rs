//! Single-page PDF composition
//!
//! Embeds one raster snapshot into a portrait page. The image spans the full
//! page width and keeps its aspect ratio; it is anchored to the top-left
//! corner, so a very tall snapshot runs off the bottom edge.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, TextStr};
use tracing::info;

use super::capture::Snapshot;
use crate::error::{BudgetError, BudgetResult};

/// File name every export is saved under
pub const EXPORT_FILE_NAME: &str = "budget-breakdown.pdf";

/// PDF points per millimetre
const PT_PER_MM: f32 = 72.0 / 25.4;

/// zlib compression level for the image stream
const COMPRESSION_LEVEL: u8 = 6;

const IMAGE_NAME: Name<'static> = Name(b"Im1");

/// Physical page size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFormat {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageFormat {
    /// ISO A4, portrait
    pub const A4_PORTRAIT: PageFormat = PageFormat {
        width_mm: 210.0,
        height_mm: 297.0,
    };

    pub fn width_pt(&self) -> f32 {
        self.width_mm * PT_PER_MM
    }

    pub fn height_pt(&self) -> f32 {
        self.height_mm * PT_PER_MM
    }
}

/// Where the image lands on the page, in points from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y_from_top: f32,
    pub width: f32,
    pub height: f32,
}

/// Fit an image to the page width, preserving its aspect ratio
pub fn fit_to_width(image_width: u32, image_height: u32, page: PageFormat) -> Placement {
    let width = page.width_pt();
    let height = image_height as f32 * width / image_width as f32;
    Placement {
        x: 0.0,
        y_from_top: 0.0,
        width,
        height,
    }
}

/// Composes snapshot images into PDF documents
#[derive(Debug, Clone, Copy)]
pub struct PageComposer {
    page: PageFormat,
}

impl PageComposer {
    pub fn new(page: PageFormat) -> Self {
        Self { page }
    }

    pub fn page(&self) -> PageFormat {
        self.page
    }

    /// Build a one-page document holding `snapshot`
    pub fn compose(&self, snapshot: &Snapshot) -> BudgetResult<Vec<u8>> {
        let (image_width, image_height) = snapshot.dimensions();
        if image_width == 0 || image_height == 0 {
            return Err(BudgetError::Export("snapshot has no pixels".into()));
        }

        let page_width = self.page.width_pt();
        let page_height = self.page.height_pt();
        let placement = fit_to_width(image_width, image_height, self.page);

        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let page_id = Ref::new(3);
        let image_id = Ref::new(4);
        let content_id = Ref::new(5);
        let info_id = Ref::new(6);

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id).kids([page_id]).count(1);

        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, page_width, page_height));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources().x_objects().pair(IMAGE_NAME, image_id);
        page.finish();

        let compressed = compress_to_vec_zlib(snapshot.as_raw(), COMPRESSION_LEVEL);
        let mut image = pdf.image_xobject(image_id, &compressed);
        image.filter(Filter::FlateDecode);
        image.width(image_width as i32);
        image.height(image_height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        image.finish();

        // PDF space is y-up; the image's lower edge sits `height` below the top
        let bottom = page_height - placement.y_from_top - placement.height;
        let mut content = Content::new();
        content.save_state();
        content.transform([
            placement.width,
            0.0,
            0.0,
            placement.height,
            placement.x,
            bottom,
        ]);
        content.x_object(IMAGE_NAME);
        content.restore_state();
        pdf.stream(content_id, &content.finish());

        pdf.document_info(info_id)
            .title(TextStr("Budget Breakdown"))
            .producer(TextStr("budget-brain"));

        Ok(pdf.finish())
    }
}

impl Default for PageComposer {
    fn default() -> Self {
        Self::new(PageFormat::A4_PORTRAIT)
    }
}

/// Write the document as `budget-breakdown.pdf` inside `dir`
///
/// The bytes go to a temp file next to the target which is then renamed into
/// place, so a failed write never clobbers an earlier export.
pub fn save_document(dir: &Path, bytes: &[u8]) -> BudgetResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        BudgetError::Export(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let path = dir.join(EXPORT_FILE_NAME);
    let temp_path = path.with_extension("pdf.tmp");

    let written = write_synced(&temp_path, bytes).and_then(|_| {
        fs::rename(&temp_path, &path).map_err(|e| {
            BudgetError::Export(format!("Failed to move {} into place: {}", path.display(), e))
        })
    });

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    info!(path = %path.display(), bytes = bytes.len(), "PDF saved");
    Ok(path)
}

fn write_synced(path: &Path, bytes: &[u8]) -> BudgetResult<()> {
    let to_export =
        |e: std::io::Error| BudgetError::Export(format!("Failed to write {}: {}", path.display(), e));

    let mut file = File::create(path).map_err(to_export)?;
    file.write_all(bytes).map_err(to_export)?;
    file.sync_all().map_err(to_export)?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    #[test]
    fn test_a4_in_points() {
        let page = PageFormat::A4_PORTRAIT;
        assert!((page.width_pt() - 595.276).abs() < 0.01);
        assert!((page.height_pt() - 841.89).abs() < 0.01);
    }

    #[test]
    fn test_fit_preserves_aspect_ratio() {
        let page = PageFormat::A4_PORTRAIT;
        let placement = fit_to_width(1600, 1200, page);

        assert_eq!(placement.width, page.width_pt());
        assert!((placement.height / placement.width - 0.75).abs() < 1e-5);
        assert_eq!(placement.x, 0.0);
        assert_eq!(placement.y_from_top, 0.0);
    }

    #[test]
    fn test_compose_produces_pdf() {
        let snapshot = RgbImage::from_pixel(40, 20, Rgb([0x3B, 0x82, 0xF6]));
        let bytes = PageComposer::default().compose(&snapshot).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Im1"));
        assert!(text.contains("/FlateDecode"));
    }

    #[test]
    fn test_compose_lays_out_single_a4_page() {
        let snapshot = RgbImage::from_pixel(400, 300, Rgb([0xFF, 0xFF, 0xFF]));
        let bytes = PageComposer::default().compose(&snapshot).unwrap();

        let media_box = inspect::media_box(&bytes).unwrap();
        assert_eq!(media_box.len(), 4);
        assert_eq!(media_box[0], 0.0);
        assert_eq!(media_box[1], 0.0);
        assert!((media_box[2] - 595.276).abs() < 0.01);
        assert!((media_box[3] - 841.89).abs() < 0.01);
        assert_eq!(inspect::page_count(&bytes), Some(1));
    }

    #[test]
    fn test_compose_places_image_at_top_with_aspect_ratio() {
        let snapshot = RgbImage::from_pixel(400, 300, Rgb([0xFF, 0xFF, 0xFF]));
        let bytes = PageComposer::default().compose(&snapshot).unwrap();

        let [width, skew_a, skew_b, height, x, bottom] =
            <[f32; 6]>::try_from(inspect::image_transform(&bytes).unwrap()).unwrap();
        assert!((width - 595.276).abs() < 0.01);
        assert_eq!((skew_a, skew_b), (0.0, 0.0));
        assert!((height / width - 0.75).abs() < 1e-3);
        assert_eq!(x, 0.0);
        assert!((bottom + height - 841.89).abs() < 0.01);
    }

    #[test]
    fn test_compose_rejects_empty_snapshot() {
        let snapshot = RgbImage::new(0, 0);
        let err = PageComposer::default().compose(&snapshot).unwrap_err();
        assert!(matches!(err, BudgetError::Export(_)));
    }

    #[test]
    fn test_save_document_uses_fixed_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = save_document(&temp_dir.path().join("out"), b"%PDF-1.7").unwrap();

        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        assert_eq!(std::fs::read(path).unwrap(), b"%PDF-1.7");
    }

    #[test]
    fn test_failed_save_keeps_previous_document() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        save_document(dir, b"%PDF-old").unwrap();
        std::fs::create_dir(dir.join(EXPORT_FILE_NAME).with_extension("pdf.tmp")).unwrap();

        let err = save_document(dir, b"%PDF-new").unwrap_err();

        assert!(matches!(err, BudgetError::Export(_)));
        assert_eq!(std::fs::read(dir.join(EXPORT_FILE_NAME)).unwrap(), b"%PDF-old");
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        save_document(temp_dir.path(), b"%PDF-1.7").unwrap();

        let names: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from(EXPORT_FILE_NAME)]);
    }
}
