//! Results panel
//!
//! Draws a `ResultsRegion` as summary cards, a labeled pie chart with a
//! legend, the category list, and the quick tips. The panel is a plain
//! `Widget` so the same drawing code feeds both the screen and the PDF
//! capture.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Cell, Paragraph, Row, Table, Widget,
    },
};

use crate::models::RgbColor;
use crate::presenter::{slice_at, CardTone, LabelAnchor, PieSlice, ResultsRegion};

/// Rows used by the title block
const TITLE_HEIGHT: u16 = 2;
/// Rows used by the summary cards
const CARDS_HEIGHT: u16 = 4;
/// Rows used by the pie chart at its natural size
const CHART_HEIGHT: u16 = 16;
/// Seven category rows plus borders
const CATEGORIES_HEIGHT: u16 = 9;
/// Four tips plus borders
const TIPS_HEIGHT: u16 = 6;
/// Footer line with the export hint
const FOOTER_HEIGHT: u16 = 1;

/// Width the legend column takes next to the pie
const LEGEND_WIDTH: u16 = 22;

/// Height the panel needs to draw every section at full size
pub const PANEL_HEIGHT: u16 =
    TITLE_HEIGHT + CARDS_HEIGHT + CHART_HEIGHT + CATEGORIES_HEIGHT + TIPS_HEIGHT + FOOTER_HEIGHT;

/// Narrowest width the panel is laid out for
pub const MIN_PANEL_WIDTH: u16 = 60;

/// Convert a palette color into a terminal color
pub fn to_color(color: RgbColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

fn tone_color(tone: CardTone) -> Color {
    match tone {
        CardTone::Income => Color::Rgb(0x25, 0x63, 0xEB),
        CardTone::Debt => Color::Rgb(0xDC, 0x26, 0x26),
        CardTone::Available => Color::Rgb(0x16, 0xA3, 0x4A),
    }
}

/// The results panel widget
pub struct ResultsPanel<'a> {
    region: &'a ResultsRegion,
    subtitle: Option<String>,
    footer: Option<String>,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(region: &'a ResultsRegion) -> Self {
        Self {
            region,
            subtitle: None,
            footer: None,
        }
    }

    /// Line shown under the title (e.g. a generation timestamp)
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Hint line at the bottom of the panel
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(Span::styled(
            "Your Budget Breakdown",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if let Some(subtitle) = &self.subtitle {
            lines.push(Line::from(Span::styled(
                subtitle.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for (card, column) in self.region.summary_cards().iter().zip(columns.iter()) {
            let color = tone_color(card.tone);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color));

            let text = vec![
                Line::from(Span::styled(
                    card.formatted.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(card.label),
            ];

            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(block)
                .render(*column, buf);
        }
    }

    fn render_chart(&self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(LEGEND_WIDTH)])
            .split(area);

        let slices = self.region.pie_slices();
        render_pie(&slices, columns[0], buf);
        render_legend(&slices, columns[1], buf);
    }

    fn render_categories(&self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self
            .region
            .category_rows()
            .into_iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(Span::styled("■", Style::default().fg(to_color(row.color)))),
                    Cell::from(row.label),
                    Cell::from(Line::from(row.formatted).alignment(Alignment::Right)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(2),
            Constraint::Min(18),
            Constraint::Length(16),
        ];

        let block = Block::default()
            .title(" Categories ")
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        Widget::render(Table::new(rows, widths).block(block), area, buf);
    }

    fn render_tips(&self, area: Rect, buf: &mut Buffer) {
        let amber = Color::Rgb(0xCA, 0x8A, 0x04);
        let lines: Vec<Line> = self
            .region
            .tips()
            .iter()
            .map(|tip| Line::from(format!("• {}", tip)))
            .collect();

        let block = Block::default()
            .title(" Quick Tips ")
            .title_style(Style::default().fg(amber).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(amber));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let footer_height = if self.footer.is_some() {
            FOOTER_HEIGHT
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Length(CARDS_HEIGHT),
                Constraint::Min(8),
                Constraint::Length(CATEGORIES_HEIGHT),
                Constraint::Length(TIPS_HEIGHT),
                Constraint::Length(footer_height),
            ])
            .split(area);

        self.render_title(chunks[0], buf);
        self.render_cards(chunks[1], buf);
        self.render_chart(chunks[2], buf);
        self.render_categories(chunks[3], buf);
        self.render_tips(chunks[4], buf);

        if let Some(footer) = &self.footer {
            Paragraph::new(Line::from(Span::styled(
                footer.clone(),
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center)
            .render(chunks[5], buf);
        }
    }
}

/// Draw the pie with labels placed outside each wedge
///
/// Canvas units are one cell wide and half a cell tall, so a circle in
/// canvas units looks round on a terminal with 1:2 cells.
fn render_pie(slices: &[PieSlice], area: Rect, buf: &mut Buffer) {
    if slices.is_empty() || area.width < 4 || area.height < 4 {
        Paragraph::new("Nothing to chart: available income is zero")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .render(area, buf);
        return;
    }

    let half_width = f64::from(area.width) / 2.0;
    let half_height = f64::from(area.height);
    let radius = (half_height - 2.0).min(half_width / 3.0).max(1.0);
    // Shift left to leave room for right-hand labels
    let cx = -half_width * 0.1;
    let cy = 0.0;
    let label_offset = (radius * 0.25).max(1.5);

    let mut wedges: Vec<(Color, Vec<(f64, f64)>)> = slices
        .iter()
        .map(|slice| (to_color(slice.color), Vec::new()))
        .collect();

    let step = 0.5;
    let mut y = -radius;
    while y <= radius {
        let mut x = -radius;
        while x <= radius {
            if x * x + y * y <= radius * radius {
                let angle = y.atan2(x).to_degrees();
                if let Some(slice) = slice_at(slices, angle) {
                    wedges[slice.category.index()].1.push((cx + x, cy + y));
                }
            }
            x += step;
        }
        y += step;
    }

    let labels: Vec<(f64, f64, Line<'static>)> = slices
        .iter()
        .filter(|slice| slice.sweep > 0.0)
        .map(|slice| {
            let placement = slice.label_placement(cx, cy, radius, label_offset);
            let width = slice.label.chars().count() as f64;
            let x = match placement.anchor {
                LabelAnchor::Start => placement.x,
                LabelAnchor::End => placement.x - width,
            };
            let line = Line::from(Span::styled(
                slice.label.clone(),
                Style::default().fg(to_color(slice.color)),
            ));
            (x, placement.y, line)
        })
        .collect();

    Canvas::default()
        .marker(Marker::HalfBlock)
        .x_bounds([-half_width, half_width])
        .y_bounds([-half_height, half_height])
        .paint(|ctx| {
            for (color, coords) in &wedges {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: *color,
                });
            }
            for (x, y, line) in &labels {
                ctx.print(*x, *y, line.clone());
            }
        })
        .render(area, buf);
}

fn render_legend(slices: &[PieSlice], area: Rect, buf: &mut Buffer) {
    let mut lines = vec![Line::from("")];
    for slice in slices {
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(to_color(slice.color))),
            Span::raw(slice.category.label()),
        ]));
    }

    Paragraph::new(lines).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, FinancialInput};
    use crate::presenter::BudgetView;

    fn region(salary: f64, loan: f64) -> ResultsRegion {
        let mut view = BudgetView::with_input(FinancialInput::new(salary, loan, 0.0));
        view.compute();
        view.results_region(Currency::Usd).unwrap()
    }

    fn buffer_text(buf: &Buffer) -> String {
        let width = buf.area.width as usize;
        buf.content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_panel_renders_all_sections() {
        let region = region(5000.0, 800.0);
        let area = Rect::new(0, 0, 100, PANEL_HEIGHT);
        let mut buf = Buffer::empty(area);
        ResultsPanel::new(&region)
            .footer("[e] Download as PDF")
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Your Budget Breakdown"));
        assert!(text.contains("$3,750"));
        assert!(text.contains("Available Income"));
        assert!(text.contains("Remaining"));
        assert!(text.contains("Quick Tips"));
        assert!(text.contains("Download as PDF"));
    }

    #[test]
    fn test_panel_with_zero_available_income() {
        let region = region(1000.0, 750.0);
        let area = Rect::new(0, 0, 80, PANEL_HEIGHT);
        let mut buf = Buffer::empty(area);
        ResultsPanel::new(&region).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("Nothing to chart"));
    }

    #[test]
    fn test_pie_uses_palette_colors() {
        let region = region(5000.0, 800.0);
        let area = Rect::new(0, 0, 60, CHART_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_pie(&region.pie_slices(), area, &mut buf);

        let housing = to_color(crate::models::Category::Housing.color());
        assert!(buf
            .content
            .iter()
            .any(|cell| cell.fg == housing || cell.bg == housing));
    }
}
