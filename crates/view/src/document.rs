use std::io;

use gapedit_buffer::{LineEnding, Position, Result, Span};

use crate::{EditCommand, History, TextView};

/// A text view with tracked execution: every edit can be undone and redone.
#[derive(Debug, Clone)]
pub struct Document {
    view: TextView,
    history: History,
    line_ending: LineEnding,
    /// Line ending that overrides detection on load
    forced_line_ending: Option<LineEnding>,
}

impl Document {
    /// Empty document keeping at most `history_limit` undo steps
    pub fn new(history_limit: usize) -> Self {
        Self {
            view: TextView::new(),
            history: History::with_capacity(history_limit),
            line_ending: LineEnding::default(),
            forced_line_ending: None,
        }
    }

    /// Always write `line_ending`, whatever loaded files use
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self.forced_line_ending = Some(line_ending);
        self
    }

    /// Replace the whole content. The viewport size is kept; history is cleared.
    pub fn load(&mut self, content: &str) {
        let scroll_view = self.view.scroll_view();
        self.view = TextView::from_text(content);
        self.view
            .resize_scroll_view(scroll_view.lines, scroll_view.columns);
        self.line_ending = self
            .forced_line_ending
            .or_else(|| LineEnding::detect(content))
            .unwrap_or_default();
        self.history.clear();
        gapedit_logger::debug(format!(
            "Loaded {} lines ({} chars)",
            self.view.line_count(),
            self.view.char_count()
        ));
    }

    /// Execute `command` and record its inverse.
    pub fn execute(&mut self, command: &EditCommand) -> Result<()> {
        let inverse = command.execute(&mut self.view).inspect_err(|e| {
            gapedit_logger::error(format!("{} failed: {}", command, e));
        })?;
        self.history.record(inverse);
        Ok(())
    }

    /// Undo the most recent edit. Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> Result<bool> {
        let Some(command) = self.history.pop_undo() else {
            return Ok(false);
        };
        gapedit_logger::debug(format!("Undo: {}", command));
        let redo = command.execute(&mut self.view)?;
        self.history.push_redo(redo);
        Ok(true)
    }

    /// Redo the most recently undone edit. Returns `false` when there was nothing to redo.
    pub fn redo(&mut self) -> Result<bool> {
        let Some(command) = self.history.pop_redo() else {
            return Ok(false);
        };
        gapedit_logger::debug(format!("Redo: {}", command));
        let undo = command.execute(&mut self.view)?;
        self.history.push_undo(undo);
        Ok(true)
    }

    /// Write the content with the document line ending. History is cleared.
    pub fn write_to<W: io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.to_text().as_bytes())?;
        writer.flush()?;
        self.history.clear();
        Ok(())
    }

    pub fn to_text(&self) -> String {
        self.view.to_text(self.line_ending)
    }

    pub fn view(&self) -> &TextView {
        &self.view
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn caret(&self) -> Position {
        self.view.caret()
    }

    pub fn line_count(&self) -> usize {
        self.view.line_count()
    }

    pub fn line_length(&self, line: usize) -> Result<usize> {
        self.view.line_length(line)
    }

    pub fn line_span(&self, line: usize) -> Result<Span> {
        self.view.line_span(line)
    }

    pub fn line_text(&self, line: usize) -> Result<String> {
        self.view.line_text(line)
    }

    pub fn visible_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.view.visible_lines()
    }

    pub fn resize_scroll_view(&mut self, lines: usize, columns: usize) {
        self.view.resize_scroll_view(lines, columns);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(1000)
    }
}
