//! Editing engine for gapedit.
//!
//! A [`TextView`] couples the character buffer, its line index, the caret
//! and a [`ScrollView`]. It is changed only through [`EditCommand`]s, each
//! of which returns its own inverse; [`Document`] records those inverses
//! in a [`History`] for undo and redo.

mod command;
mod document;
mod history;
mod scroll_view;
mod text_view;

pub use command::EditCommand;
pub use document::Document;
pub use history::History;
pub use scroll_view::{ScrollMotion, ScrollView};
pub use text_view::TextView;
