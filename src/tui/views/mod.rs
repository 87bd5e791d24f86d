//! TUI Views module
//!
//! Contains the input form, the results panel, and the status bar.

pub mod form;
pub mod results;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;
use results::ResultsPanel;

/// Hint drawn at the bottom of the results panel
pub const EXPORT_HINT: &str = "Press e to save this breakdown as budget-breakdown.pdf";

/// Shown in place of the results until the first calculation
pub const EMPTY_RESULTS_TEXT: &str = "Enter your monthly salary and press Enter to see how to split it \
     across housing, food, transportation, savings, investment, entertainment, and remaining.";

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    form::render(frame, app, layout.form);
    render_results(frame, app, layout.results);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(44, 4, layout.results);
        frame.render_widget(NotificationWidget::new(notification), area);
    }

    if app.active_dialog == ActiveDialog::Help {
        dialogs::help::render(frame, app);
    }
}

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    match app.results_region() {
        Some(region) => {
            let footer = if app.export_slot.is_busy() {
                "Generating PDF..."
            } else {
                EXPORT_HINT
            };
            frame.render_widget(ResultsPanel::new(&region).footer(footer), area);
        }
        None => render_empty_results(frame, area),
    }
}

/// Shown until the first successful calculation
fn render_empty_results(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Your Budget Breakdown ");

    let text = Paragraph::new(EMPTY_RESULTS_TEXT)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::DarkGray))
        .block(block);

    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::config::settings::Settings;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn screen_text(app: &App) -> String {
        let backend = TestBackend::new(120, 45);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_state_before_calculation() {
        let temp_dir = TempDir::new().unwrap();
        let app = App::new(
            BudgetPaths::with_base_dir(temp_dir.path().to_path_buf()),
            Settings::default(),
        );

        let text = screen_text(&app);
        assert!(text.contains("Enter your monthly salary"));
        assert!(text.contains("Monthly Salary"));
    }

    #[test]
    fn test_empty_state_names_every_category() {
        for category in crate::models::Category::all() {
            let first_word = category.label().split_whitespace().next().unwrap_or_default();
            assert!(
                EMPTY_RESULTS_TEXT.contains(&first_word.to_lowercase()),
                "missing {}",
                first_word
            );
        }
    }

    #[test]
    fn test_results_after_calculation() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = App::new(
            BudgetPaths::with_base_dir(temp_dir.path().to_path_buf()),
            Settings::default(),
        );
        for c in "5000".chars() {
            app.insert_char(c);
        }
        app.calculate();

        let text = screen_text(&app);
        assert!(text.contains("Your Budget Breakdown"));
        assert!(text.contains("₹3,750"));
        assert!(text.contains("Press e to save"));
    }
}
