//! Key bindings.
//!
//! Translates terminal key events into editor actions, keeping every
//! shortcut in one table so bindings can be read and tested in one place.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gapedit_view::EditCommand;

/// Action requested by a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Run a command against the document
    Edit(EditCommand),
    Undo,
    Redo,
    /// Write the document to its file
    Save,
    Quit,
}

impl KeyAction {
    /// Parse a key event. Returns `None` for unbound keys and releases.
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let action = match (key.code, key.modifiers) {
            // Ctrl shortcuts
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => Self::Quit,
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => Self::Save,
            (KeyCode::Char('z'), KeyModifiers::CONTROL) => Self::Undo,
            (KeyCode::Char('y'), KeyModifiers::CONTROL) => Self::Redo,
            (KeyCode::Char('j'), KeyModifiers::CONTROL) => Self::Edit(EditCommand::JoinLines),

            // Navigation
            (KeyCode::Left, KeyModifiers::NONE) => Self::Edit(EditCommand::CharLeft),
            (KeyCode::Right, KeyModifiers::NONE) => Self::Edit(EditCommand::CharRight),
            (KeyCode::Left, KeyModifiers::CONTROL) => Self::Edit(EditCommand::WordLeft),
            (KeyCode::Right, KeyModifiers::CONTROL) => Self::Edit(EditCommand::WordRight),
            (KeyCode::Up, KeyModifiers::NONE) => Self::Edit(EditCommand::LineUp),
            (KeyCode::Down, KeyModifiers::NONE) => Self::Edit(EditCommand::LineDown),
            (KeyCode::PageUp, KeyModifiers::NONE) => Self::Edit(EditCommand::PageUp),
            (KeyCode::PageDown, KeyModifiers::NONE) => Self::Edit(EditCommand::PageDown),
            (KeyCode::Home, KeyModifiers::NONE) => Self::Edit(EditCommand::LineStart),
            (KeyCode::End, KeyModifiers::NONE) => Self::Edit(EditCommand::LineEnd),

            // Editing
            (KeyCode::Enter, KeyModifiers::NONE) => Self::Edit(EditCommand::InsertNewLine),
            (KeyCode::Backspace, KeyModifiers::NONE) => Self::Edit(EditCommand::DeleteBackwards),
            (KeyCode::Delete, KeyModifiers::NONE) => Self::Edit(EditCommand::Delete),
            (KeyCode::Tab, KeyModifiers::NONE) => Self::Edit(EditCommand::Insert('\t')),
            (KeyCode::Char(ch), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                Self::Edit(EditCommand::Insert(ch))
            }

            _ => return None,
        };
        Some(action)
    }
}

/// Map a key event to an action
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    KeyAction::from_key_event(key)
}
