//! Editing state for live mode
//!
//! Holds the current input line and turns key events into edits. Every edit
//! re-interprets the line, so the result panel always matches the input.

use codepeek_core::{interpret, Interpretation};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The input changed; redraw
    Edited,
    /// Nothing to do
    Ignored,
    /// Leave live mode
    Quit,
}

/// Input line plus the interpretation of its current contents
#[derive(Debug, Clone)]
pub struct LiveState {
    input: String,
    interpretation: Interpretation,
}

impl LiveState {
    /// Create an empty state
    pub fn new() -> Self {
        let input = String::new();
        let interpretation = interpret(&input);
        Self {
            input,
            interpretation,
        }
    }

    /// Current input line
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Interpretation of the current input line
    pub fn interpretation(&self) -> &Interpretation {
        &self.interpretation
    }

    /// Append a character
    pub fn insert(&mut self, ch: char) {
        self.input.push(ch);
        self.refresh();
    }

    /// Remove the last character; returns false when the line was empty
    pub fn backspace(&mut self) -> bool {
        let removed = self.input.pop().is_some();
        if removed {
            self.refresh();
        }
        removed
    }

    /// Clear the whole line
    pub fn clear(&mut self) {
        self.input.clear();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.interpretation = interpret(&self.input);
    }

    /// Apply one key event
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        // Windows also reports releases
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Ignored;
        }

        // AltGr arrives as CONTROL | ALT and produces ordinary characters
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Esc => KeyOutcome::Quit,
            KeyCode::Char('c') | KeyCode::Char('d') if ctrl => KeyOutcome::Quit,
            KeyCode::Char('u') if ctrl => {
                self.clear();
                KeyOutcome::Edited
            }
            KeyCode::Char(_) if ctrl => KeyOutcome::Ignored,
            KeyCode::Char(ch) => {
                self.insert(ch);
                KeyOutcome::Edited
            }
            KeyCode::Tab => {
                self.insert('\t');
                KeyOutcome::Edited
            }
            KeyCode::Backspace => {
                if self.backspace() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

impl Default for LiveState {
    fn default() -> Self {
        Self::new()
    }
}
