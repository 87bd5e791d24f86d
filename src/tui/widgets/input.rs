//! Numeric input widget
//!
//! A boxed form field with a label, an optional unit prefix or suffix, and a
//! block cursor while focused.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// A single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (byte offset; content is ASCII)
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Shown while the field is empty and unfocused
    pub placeholder: String,
    /// Title of the surrounding box
    pub label: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.content.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    /// Widget drawing this input with a unit marker
    pub fn view<'a>(&'a self, prefix: &'a str, suffix: &'a str) -> TextInputView<'a> {
        TextInputView {
            input: self,
            prefix,
            suffix,
        }
    }
}

/// Renders a `TextInput` inside a rounded box
pub struct TextInputView<'a> {
    input: &'a TextInput,
    prefix: &'a str,
    suffix: &'a str,
}

impl Widget for TextInputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let input = self.input;
        let border_color = if input.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                format!(" {} ", input.label),
                Style::default().fg(border_color),
            ));

        let unit = Style::default().fg(Color::DarkGray);
        let mut spans = vec![Span::styled(self.prefix, unit)];

        if input.content.is_empty() && !input.focused {
            spans.push(Span::styled(
                input.placeholder.as_str(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ));
        } else if input.focused {
            let cursor = Style::default().fg(Color::Black).bg(Color::Cyan);
            let (before, rest) = input.content.split_at(input.cursor.min(input.content.len()));
            spans.push(Span::raw(before));
            match rest.chars().next() {
                Some(c) => {
                    spans.push(Span::styled(c.to_string(), cursor));
                    spans.push(Span::raw(&rest[c.len_utf8()..]));
                }
                None => spans.push(Span::styled(" ", cursor)),
            }
        } else {
            spans.push(Span::raw(input.content.as_str()));
        }

        spans.push(Span::styled(self.suffix, unit));

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "125".chars() {
            input.insert(c);
        }
        input.move_left();
        input.backspace();

        assert_eq!(input.value(), "15");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut input = TextInput::new();
        input.move_left();
        input.backspace();
        assert_eq!(input.cursor, 0);

        input.insert('7');
        input.move_right();
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_render_shows_placeholder_and_prefix() {
        let input = TextInput::new().label("Monthly Salary").placeholder("50000");
        let area = Rect::new(0, 0, 24, 3);
        let mut buf = Buffer::empty(area);
        input.view("$", "").render(area, &mut buf);

        let width = usize::from(area.width);
        let row: String = buf.content[width..2 * width]
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(row.contains("$50000"));
    }
}
