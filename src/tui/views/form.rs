//! Input form view
//!
//! Three numeric fields and the Calculate button.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::InputField;
use crate::tui::app::App;

/// Render the input form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Budget Brain ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Intro
            Constraint::Length(3), // Salary
            Constraint::Length(3), // Loan payment
            Constraint::Length(3), // Interest rate
            Constraint::Length(1),
            Constraint::Length(3), // Calculate
            Constraint::Min(0),    // Note
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("Your monthly figures").style(Style::default().fg(Color::Gray)),
        chunks[0],
    );

    let symbol = app.currency().symbol();
    for (field, chunk) in InputField::ALL.into_iter().zip(&chunks[1..4]) {
        let (prefix, suffix) = match field {
            InputField::InterestRate => ("", " %"),
            _ => (symbol, ""),
        };
        frame.render_widget(app.input(field).view(prefix, suffix), *chunk);
    }

    render_calculate_button(frame, app.can_calculate(), chunks[5]);

    frame.render_widget(
        Paragraph::new("The interest rate is recorded but does not change the plan.")
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::DarkGray)),
        chunks[6],
    );
}

/// Draw the Calculate button, greyed out while it cannot run
fn render_calculate_button(frame: &mut Frame, enabled: bool, area: Rect) {
    let color = if enabled { Color::Green } else { Color::DarkGray };
    let label = if enabled {
        "Calculate Budget (Enter)"
    } else {
        "Enter a salary to calculate"
    };

    let button = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(button, area);
}
