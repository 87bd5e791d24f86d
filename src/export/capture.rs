//! Results region capture
//!
//! Turns a rendered results panel into an RGB raster. `BufferCapture` draws
//! the panel into an off-screen terminal buffer and paints every cell as a
//! block of pixels using an 8x8 bitmap font.

use chrono::{DateTime, Local};
use font8x8::legacy::{BASIC_LEGACY, BOX_LEGACY, LATIN_LEGACY};
use image::{Rgb, RgbImage};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::presenter::ResultsRegion;
use crate::tui::views::results::{ResultsPanel, MIN_PANEL_WIDTH, PANEL_HEIGHT};

/// Upscale factor applied to every capture
pub const CAPTURE_SCALE: u32 = 2;

/// Pixel width of one terminal cell at scale 1
pub const CELL_WIDTH: u32 = 8;

/// Pixel height of one terminal cell at scale 1
pub const CELL_HEIGHT: u32 = 16;

/// Width in cells of the off-screen panel
pub const DEFAULT_CAPTURE_COLUMNS: u16 = 100;

/// Widest panel a capture will render
pub const MAX_CAPTURE_COLUMNS: u16 = 400;

/// Captured raster
pub type Snapshot = RgbImage;

const PAPER: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
const INK: Rgb<u8> = Rgb([0x1F, 0x29, 0x37]);

/// Produces a raster image of a results region
pub trait RegionCapture {
    fn capture(&self, region: &ResultsRegion, scale: u32) -> BudgetResult<Snapshot>;
}

/// Captures by rendering the results panel into an off-screen buffer
#[derive(Debug, Clone)]
pub struct BufferCapture {
    columns: u16,
    subtitle: Option<String>,
}

impl BufferCapture {
    pub fn new() -> Self {
        Self {
            columns: DEFAULT_CAPTURE_COLUMNS,
            subtitle: None,
        }
    }

    /// Width of the off-screen panel in cells
    pub fn columns(mut self, columns: u16) -> Self {
        self.columns = columns;
        self
    }

    /// Line drawn under the panel title
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Render the panel into a terminal buffer
    pub fn render_buffer(&self, region: &ResultsRegion) -> BudgetResult<Buffer> {
        if self.columns < MIN_PANEL_WIDTH {
            return Err(BudgetError::Capture(format!(
                "results region is {} columns wide, need at least {}",
                self.columns, MIN_PANEL_WIDTH
            )));
        }
        if self.columns > MAX_CAPTURE_COLUMNS {
            return Err(BudgetError::Capture(format!(
                "results region is {} columns wide, at most {} allowed",
                self.columns, MAX_CAPTURE_COLUMNS
            )));
        }

        // Footer row is unused off-screen
        let area = Rect::new(0, 0, self.columns, PANEL_HEIGHT - 1);
        let mut buf = Buffer::empty(area);

        let mut panel = ResultsPanel::new(region);
        if let Some(subtitle) = &self.subtitle {
            panel = panel.subtitle(subtitle.clone());
        }
        panel.render(area, &mut buf);

        Ok(buf)
    }
}

impl Default for BufferCapture {
    fn default() -> Self {
        Self::new()
    }
}

/// Subtitle stamped on exported panels
pub fn generated_subtitle(now: DateTime<Local>) -> String {
    format!("Generated on {}", now.format("%d %b %Y, %H:%M"))
}

impl RegionCapture for BufferCapture {
    fn capture(&self, region: &ResultsRegion, scale: u32) -> BudgetResult<Snapshot> {
        let buf = self.render_buffer(region)?;
        let snapshot = rasterize(&buf, scale)?;
        debug!(
            width = snapshot.width(),
            height = snapshot.height(),
            scale,
            "results region captured"
        );
        Ok(snapshot)
    }
}

/// Paint every buffer cell into an RGB image
pub fn rasterize(buf: &Buffer, scale: u32) -> BudgetResult<Snapshot> {
    if scale == 0 {
        return Err(BudgetError::Capture("scale must be at least 1".into()));
    }

    let area = buf.area;
    if area.width == 0 || area.height == 0 {
        return Err(BudgetError::Capture("results region is empty".into()));
    }

    let cell_w = CELL_WIDTH * scale;
    let cell_h = CELL_HEIGHT * scale;
    let mut image = RgbImage::from_pixel(
        u32::from(area.width) * cell_w,
        u32::from(area.height) * cell_h,
        PAPER,
    );

    let columns = usize::from(area.width);
    for (index, cell) in buf.content.iter().enumerate() {
        let origin_x = (index % columns) as u32 * cell_w;
        let origin_y = (index / columns) as u32 * cell_h;
        let fg = resolve(cell.fg, INK);
        let bg = resolve(cell.bg, PAPER);

        let mut paint = |x: u32, y: u32, color: Rgb<u8>| {
            image.put_pixel(origin_x + x, origin_y + y, color);
        };

        let symbol = cell.symbol().chars().next().unwrap_or(' ');
        match symbol {
            '█' => fill(&mut paint, cell_w, 0, cell_h, fg),
            '▀' => {
                fill(&mut paint, cell_w, 0, cell_h / 2, fg);
                fill(&mut paint, cell_w, cell_h / 2, cell_h, bg);
            }
            '▄' => {
                fill(&mut paint, cell_w, 0, cell_h / 2, bg);
                fill(&mut paint, cell_w, cell_h / 2, cell_h, fg);
            }
            _ => {
                if bg != PAPER {
                    fill(&mut paint, cell_w, 0, cell_h, bg);
                }
                if let Some(glyph) = glyph(symbol) {
                    draw_glyph(&mut paint, &glyph, scale, fg);
                }
            }
        }
    }

    Ok(image)
}

fn fill<F: FnMut(u32, u32, Rgb<u8>)>(paint: &mut F, width: u32, top: u32, bottom: u32, color: Rgb<u8>) {
    for y in top..bottom {
        for x in 0..width {
            paint(x, y, color);
        }
    }
}

/// Draw an 8x8 glyph stretched to the 8x16 cell, bit 0 is the leftmost pixel
fn draw_glyph<F: FnMut(u32, u32, Rgb<u8>)>(paint: &mut F, glyph: &[u8; 8], scale: u32, color: Rgb<u8>) {
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..8u32 {
            if bits & (1 << col) == 0 {
                continue;
            }
            for dy in 0..2 * scale {
                for dx in 0..scale {
                    paint(col * scale + dx, row as u32 * 2 * scale + dy, color);
                }
            }
        }
    }
}

/// Bitmap for a character, if the font (or the local additions) has one
fn glyph(c: char) -> Option<[u8; 8]> {
    let code = c as usize;
    match c {
        ' ' => None,
        '₹' => Some([0x3F, 0x08, 0x3F, 0x08, 0x07, 0x0C, 0x18, 0x30]),
        '€' => Some([0x38, 0x44, 0x1F, 0x04, 0x1F, 0x44, 0x38, 0x00]),
        '■' => Some([0x00, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x00]),
        '•' => Some([0x00, 0x00, 0x18, 0x3C, 0x3C, 0x18, 0x00, 0x00]),
        _ if code < 0x80 => Some(BASIC_LEGACY[code]),
        _ if (0xA0..0x100).contains(&code) => Some(LATIN_LEGACY[code - 0xA0]),
        _ if (0x2500..0x2580).contains(&code) => Some(BOX_LEGACY[code - 0x2500]),
        _ => None,
    }
}

/// Map a terminal color onto the light page palette
fn resolve(color: Color, fallback: Rgb<u8>) -> Rgb<u8> {
    match color {
        Color::Reset => fallback,
        Color::Rgb(r, g, b) => Rgb([r, g, b]),
        Color::Black => Rgb([0x00, 0x00, 0x00]),
        Color::Red | Color::LightRed => Rgb([0xDC, 0x26, 0x26]),
        Color::Green | Color::LightGreen => Rgb([0x16, 0xA3, 0x4A]),
        Color::Yellow | Color::LightYellow => Rgb([0xCA, 0x8A, 0x04]),
        Color::Blue | Color::LightBlue => Rgb([0x25, 0x63, 0xEB]),
        Color::Magenta | Color::LightMagenta => Rgb([0xC0, 0x26, 0xD3]),
        Color::Cyan | Color::LightCyan => Rgb([0x08, 0x91, 0xB2]),
        Color::Gray | Color::DarkGray => Rgb([0x6B, 0x72, 0x80]),
        // White text would vanish on paper
        Color::White => INK,
        Color::Indexed(_) => fallback,
    }
}
