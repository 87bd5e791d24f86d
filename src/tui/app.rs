//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the budget view, the raw text of each form field, pending notifications,
//! and the export slot.

use chrono::Local;
use tracing::{debug, warn};

use crate::config::paths::BudgetPaths;
use crate::config::settings::Settings;
use crate::error::BudgetError;
use crate::export::{generated_subtitle, BufferCapture, ExportSlot, ExportStart, PageComposer};
use crate::models::{Currency, InputField};
use crate::presenter::{BudgetView, ResultsRegion};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Shown whenever an export cannot be completed
pub const EXPORT_FAILED_MESSAGE: &str = "Could not generate PDF, try again";

/// Shown when an export is requested while one is running
pub const EXPORT_BUSY_MESSAGE: &str = "Export already in progress";

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App {
    /// Paths configuration, shown in the help dialog
    pub paths: BudgetPaths,

    /// Application settings
    pub settings: Settings,

    /// Input record and current allocation
    pub view: BudgetView,

    /// Form field with keyboard focus
    pub focused_field: InputField,

    /// Raw text of each form field, in `InputField::ALL` order
    pub inputs: [TextInput; 3],

    /// Toasts waiting to be shown
    pub notifications: NotificationQueue,

    /// Background PDF export
    pub export_slot: ExportSlot,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Whether the app should quit
    pub should_quit: bool,
}

fn field_index(field: InputField) -> usize {
    match field {
        InputField::Salary => 0,
        InputField::LoanPayment => 1,
        InputField::InterestRate => 2,
    }
}

impl App {
    /// Create a new App instance
    pub fn new(paths: BudgetPaths, settings: Settings) -> Self {
        let inputs = InputField::ALL.map(|field| {
            TextInput::new()
                .label(field.label())
                .placeholder(field.placeholder())
                .focused(field == InputField::Salary)
        });

        Self {
            paths,
            settings,
            view: BudgetView::new(),
            focused_field: InputField::Salary,
            inputs,
            notifications: NotificationQueue::new(),
            export_slot: ExportSlot::new(),
            active_dialog: ActiveDialog::default(),
            should_quit: false,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn currency(&self) -> Currency {
        self.settings.currency
    }

    /// The results region to draw, once a budget has been calculated
    pub fn results_region(&self) -> Option<ResultsRegion> {
        self.view.results_region(self.currency())
    }

    pub fn input(&self, field: InputField) -> &TextInput {
        &self.inputs[field_index(field)]
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        &mut self.inputs[field_index(self.focused_field)]
    }

    fn set_focus(&mut self, field: InputField) {
        self.focused_field = field;
        for (input, candidate) in self.inputs.iter_mut().zip(InputField::ALL) {
            input.focused = candidate == field;
        }
    }

    /// Move focus to the next form field
    pub fn focus_next(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    /// Move focus to the previous form field
    pub fn focus_prev(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    /// Type a character into the focused field
    ///
    /// Only digits and the decimal point are accepted; a keystroke that would
    /// make the field unparsable is dropped.
    pub fn insert_char(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }

        self.focused_input_mut().insert(c);
        if let Err(e) = self.sync_focused_field() {
            debug!(error = %e, "keystroke rejected");
            self.focused_input_mut().backspace();
        }
    }

    /// Delete the character before the cursor in the focused field
    pub fn backspace(&mut self) {
        self.focused_input_mut().backspace();
        if let Err(e) = self.sync_focused_field() {
            self.notifications.push(Notification::warning(e.to_string()));
        }
    }

    pub fn cursor_left(&mut self) {
        self.focused_input_mut().move_left();
    }

    pub fn cursor_right(&mut self) {
        self.focused_input_mut().move_right();
    }

    /// Push the focused field's text into the input record
    fn sync_focused_field(&mut self) -> Result<(), BudgetError> {
        let field = self.focused_field;
        let text = self.input(field).value().to_string();
        self.view.set_field_text(field, &text)
    }

    /// Whether the Calculate action is enabled
    pub fn can_calculate(&self) -> bool {
        self.view.can_compute()
    }

    /// Run the allocator on the current form values
    pub fn calculate(&mut self) {
        if !self.view.compute() {
            debug!("calculate declined, keeping previous results");
        }
    }

    /// Start exporting the results panel; a no-op before the first calculation
    pub fn request_export(&mut self) {
        let capture = BufferCapture::new().subtitle(generated_subtitle(Local::now()));
        let outcome = self.export_slot.start(
            self.results_region(),
            capture,
            PageComposer::default(),
            self.settings.export_dir(),
        );

        match outcome {
            Ok(ExportStart::Started) => {
                self.notifications.push(Notification::info("Generating PDF..."));
            }
            Ok(ExportStart::NothingToExport) => {
                debug!("export requested before any calculation");
            }
            Err(BudgetError::ExportInProgress) => {
                self.notifications.push(Notification::warning(EXPORT_BUSY_MESSAGE));
            }
            Err(e) => {
                warn!(error = %e, "export could not start");
                self.notifications.push(Notification::error(EXPORT_FAILED_MESSAGE));
            }
        }
    }

    /// Periodic housekeeping: expire toasts and collect a finished export
    pub fn on_tick(&mut self) {
        self.notifications.remove_expired();

        match self.export_slot.poll() {
            Some(Ok(path)) => {
                self.notifications
                    .push(Notification::success(format!("Saved {}", path.display())));
            }
            Some(Err(e)) => {
                warn!(error = %e, "export failed");
                self.notifications.push(Notification::error(EXPORT_FAILED_MESSAGE));
            }
            None => {}
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        let paths = BudgetPaths::with_base_dir(dir.path().to_path_buf());
        let settings = Settings {
            currency: Currency::Usd,
            export_dir: Some(dir.path().join("exports")),
            ..Settings::default()
        };
        App::new(paths, settings)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.insert_char(c);
        }
    }

    #[test]
    fn test_typing_updates_input_record() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        type_text(&mut app, "5000");
        app.focus_next();
        type_text(&mut app, "800");

        assert_eq!(app.view.input().salary, 5000.0);
        assert_eq!(app.view.input().loan_payment, 800.0);
        assert_eq!(app.input(InputField::Salary).value(), "5000");
        assert!(app.input(InputField::LoanPayment).focused);
        assert!(!app.input(InputField::Salary).focused);
    }

    #[test]
    fn test_rejects_non_numeric_keystrokes() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        type_text(&mut app, "1a2.5.");
        assert_eq!(app.input(InputField::Salary).value(), "12.5");
        assert_eq!(app.view.input().salary, 12.5);
    }

    #[test]
    fn test_backspace_to_empty_reads_zero() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        type_text(&mut app, "42");
        app.backspace();
        app.backspace();
        assert_eq!(app.view.input().salary, 0.0);
        assert!(!app.can_calculate());
    }

    #[test]
    fn test_calculate_requires_salary() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        app.calculate();
        assert!(app.results_region().is_none());
        assert!(app.notifications.is_empty());

        type_text(&mut app, "5000");
        app.calculate();
        let region = app.results_region().unwrap();
        assert_eq!(region.allocation.housing, 1125.0);
    }

    #[test]
    fn test_zero_salary_keeps_previous_results() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        type_text(&mut app, "5000");
        app.calculate();
        app.backspace();
        app.backspace();
        app.backspace();
        app.backspace();
        app.calculate();

        assert_eq!(app.results_region().unwrap().allocation.housing, 1125.0);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_export_before_calculate_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        app.request_export();
        assert!(!app.export_slot.is_busy());
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_export_completes_on_tick() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        type_text(&mut app, "5000");
        app.calculate();
        app.request_export();
        assert!(app.export_slot.is_busy());

        for _ in 0..500 {
            app.on_tick();
            if !app.export_slot.is_busy() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }

        assert!(!app.export_slot.is_busy());
        assert!(app
            .notifications
            .iter()
            .any(|n| n.message.starts_with("Saved ") && n.message.ends_with("budget-breakdown.pdf")));
        assert!(temp_dir.path().join("exports/budget-breakdown.pdf").exists());
    }

    #[test]
    fn test_second_export_while_busy_warns() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_in(&temp_dir);

        type_text(&mut app, "5000");
        app.calculate();
        app.request_export();
        app.request_export();

        // The first result is only collected on a tick, so the slot is still held
        assert!(app
            .notifications
            .iter()
            .any(|n| n.message == EXPORT_BUSY_MESSAGE));
        app.export_slot.wait();
    }
}
