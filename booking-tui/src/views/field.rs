//! Single-line text input backed by `tui-input`

use crossterm::event::{Event, KeyEvent};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub label: &'static str,
    pub input: Input,
    /// Render as `*` (passwords)
    pub masked: bool,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            input: Input::default(),
            masked: false,
        }
    }

    pub fn masked(label: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::new(label)
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().trim().is_empty()
    }

    /// Replace the content; the cursor is kept when nothing changed
    pub fn set(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.input.value() != value {
            self.input = Input::new(value);
        }
    }

    /// Feed a key press; returns the raw value after editing
    pub fn edit(&mut self, key: KeyEvent) -> String {
        self.input.handle_event(&Event::Key(key));
        self.input.value().to_string()
    }

    /// Text as it should be drawn
    pub fn display(&self) -> String {
        if self.masked {
            "*".repeat(self.input.value().chars().count())
        } else {
            self.input.value().to_string()
        }
    }
}
