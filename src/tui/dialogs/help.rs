//! Help dialog
//!
//! Lists the keyboard shortcuts and how the plan is derived

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use std::path::Path;

use crate::config::logging::LOG_FILE;
use crate::export::EXPORT_FILE_NAME;
use crate::models::{Category, NET_INCOME_RATIO};
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let log_file = app.paths.log_dir().join(LOG_FILE);
    let export_dir = app.settings.export_dir();
    let paragraph = Paragraph::new(help_lines(&export_dir, &log_file))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Key bindings, the allocation rules, and where files go
fn help_lines(export_dir: &Path, log_file: &Path) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Keys"),
        Line::from(""),
        key_line("Tab/Down", "Next field"),
        key_line("S-Tab/Up", "Previous field"),
        key_line("0-9 .", "Type into the field"),
        key_line("Backspace", "Delete a character"),
        key_line("Enter", "Calculate budget"),
        key_line("e", "Export results as PDF"),
        key_line("?", "Show/hide help"),
        key_line("q/Esc", "Quit"),
        Line::from(""),
        heading("How the plan is built"),
        Line::from(""),
        Line::from(format!(
            "  Net income is {:.0}% of salary; the loan payment is taken from it.",
            NET_INCOME_RATIO * 100.0
        )),
        Line::from("  What is left is split as:"),
    ];

    for category in Category::all() {
        lines.push(Line::from(format!(
            "  {:>4.0}%  {}",
            category.ratio() * 100.0,
            category.label()
        )));
    }

    lines.push(Line::from(""));
    lines.push(heading("Files"));
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "  PDF:  {}",
        export_dir.join(EXPORT_FILE_NAME).display()
    )));
    lines.push(Line::from(format!("  Log:  {}", log_file.display())));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_category() {
        let text: String = help_lines(Path::new("."), Path::new("logs/budget-brain.log"))
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains("Net income is 75% of salary"));
        assert!(text.contains("30%  Housing & Rent"));
        assert!(text.contains("5%  Remaining"));
    }

    #[test]
    fn test_help_shows_file_locations() {
        let text: String = help_lines(Path::new("/tmp/out"), Path::new("/tmp/logs/budget-brain.log"))
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains("PDF:  /tmp/out/budget-breakdown.pdf"));
        assert!(text.contains("Log:  /tmp/logs/budget-brain.log"));
    }
}
