//! Status bar view
//!
//! Shows the active currency, the export state, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const HINTS: &str = " Tab:Next  Enter:Calculate  e:Export PDF  ?:Help  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let currency = app.currency();
    let mut spans = vec![Span::styled(
        format!(" {} {} ", currency.symbol(), currency.code()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    if app.export_slot.is_busy() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "Exporting...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let left_len: usize = spans.iter().map(|s| s.width()).sum();
    let padding_len = usize::from(area.width).saturating_sub(left_len + HINTS.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
