use gapedit_buffer::{GapBuffer, LineEnding, LineMarkers, Position, Result, Span};

use crate::{ScrollMotion, ScrollView};

/// Mutable document text with a line index, a caret, and a viewport.
///
/// The character buffer and the line markers are always updated together.
/// Edit commands are the only intended mutators; drivers read state back
/// after each command instead of subscribing to changes.
#[derive(Debug, Clone)]
pub struct TextView {
    /// Document characters. Line breaks are not stored.
    text: GapBuffer<char>,
    /// Extent of every line within `text`
    lines: LineMarkers,
    caret: Position,
    /// Column vertical moves try to return to
    desired_column: Option<usize>,
    scroll_view: ScrollView,
}

impl TextView {
    /// Empty document with a single empty line
    pub fn new() -> Self {
        Self {
            text: GapBuffer::new(),
            lines: LineMarkers::new(),
            caret: Position::BUFFER_START,
            desired_column: None,
            scroll_view: ScrollView::default(),
        }
    }

    /// Document initialized from `content`.
    ///
    /// Lines are split on `\n`; a `\r` right before it is dropped. A
    /// trailing line break yields a final empty line.
    pub fn from_text(content: &str) -> Self {
        let mut chars = Vec::with_capacity(content.len());
        let mut lengths = Vec::new();
        for line in content.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let before = chars.len();
            chars.extend(line.chars());
            lengths.push(chars.len() - before);
        }

        Self {
            text: GapBuffer::from_vec(chars),
            lines: LineMarkers::from_line_lengths(lengths),
            caret: Position::BUFFER_START,
            desired_column: None,
            scroll_view: ScrollView::default(),
        }
    }

    pub fn caret(&self) -> Position {
        self.caret
    }

    pub fn desired_column(&self) -> Option<usize> {
        self.desired_column
    }

    pub fn scroll_view(&self) -> ScrollView {
        self.scroll_view
    }

    /// Change the viewport size; the top-left corner stays put.
    ///
    /// The caret may end up outside the view until its next motion.
    pub fn resize_scroll_view(&mut self, lines: usize, columns: usize) {
        self.scroll_view = self.scroll_view.resize(lines, columns);
    }

    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    pub fn last_line(&self) -> usize {
        self.lines.last_line()
    }

    pub fn line_length(&self, line: usize) -> Result<usize> {
        self.lines.length(line)
    }

    pub fn line_span(&self, line: usize) -> Result<Span> {
        self.lines.span(line)
    }

    /// Number of characters in the document, line breaks excluded
    pub fn char_count(&self) -> usize {
        self.text.count()
    }

    pub fn line_markers(&self) -> &LineMarkers {
        &self.lines
    }

    /// Content of `line` without its line break
    pub fn line_text(&self, line: usize) -> Result<String> {
        let span = self.lines.span(line)?;
        Ok(self.text.range(span)?.collect())
    }

    /// Character at a buffer index
    pub fn char_at(&self, index: usize) -> Result<char> {
        self.text.get(index).copied()
    }

    /// Buffer index of the caret
    pub fn caret_buffer_index(&self) -> Result<usize> {
        self.lines.buffer_index(self.caret)
    }

    /// Whole document with lines joined by `line_ending`
    pub fn to_text(&self, line_ending: LineEnding) -> String {
        let mut out = String::with_capacity(self.text.count() + self.line_count());
        for (i, span) in self.lines.spans().enumerate() {
            if i > 0 {
                out.push_str(line_ending.as_str());
            }
            if let Ok(chars) = self.text.range(span) {
                out.extend(chars);
            }
        }
        out
    }

    /// Lines inside the viewport, clipped to its columns.
    ///
    /// Lazily produces only the on-screen slice.
    pub fn visible_lines(&self) -> impl Iterator<Item = String> + '_ {
        let view = self.scroll_view;
        let end = view.line_end().min(self.line_count());
        (view.line_start..end).map(move |line| self.visible_slice(line, view))
    }

    fn visible_slice(&self, line: usize, view: ScrollView) -> String {
        let Ok(span) = self.lines.span(line) else {
            return String::new();
        };
        let start = (span.start() + view.column_start).min(span.end());
        let end = (start + view.columns).min(span.end());
        self.text
            .range(Span::new(start, end))
            .map(|chars| chars.collect())
            .unwrap_or_default()
    }

    /// Check that the line index covers the character buffer exactly
    pub fn is_consistent(&self) -> bool {
        self.lines.check_contiguous(self.text.count())
            && self.lines.buffer_index(self.caret).is_ok()
    }

    // Primitive mutations used by edit commands

    /// Insert `ch` at the caret. The caret itself does not move.
    pub(crate) fn insert_char(&mut self, ch: char) -> Result<()> {
        let index = self.caret_buffer_index()?;
        self.text.insert_at(index, ch)?;
        self.lines.insert(self.caret)
    }

    /// Delete the character under the caret and return it.
    pub(crate) fn delete_char(&mut self) -> Result<char> {
        let index = self.caret_buffer_index()?;
        // Validate against the line first: the character after the line end
        // belongs to the next line.
        self.lines.delete(self.caret)?;
        self.text.delete_at(index)
    }

    /// Split the caret line at the caret
    pub(crate) fn split_line(&mut self) -> Result<()> {
        self.lines.split(self.caret)
    }

    /// Join the caret line with the next one
    pub(crate) fn join_line(&mut self) -> Result<()> {
        self.lines.join(self.caret)
    }

    /// Move the caret to a validated position
    pub(crate) fn set_caret(&mut self, caret: Position) -> Result<()> {
        self.lines.buffer_index(caret)?;
        self.caret = caret;
        Ok(())
    }

    pub(crate) fn clear_desired_column(&mut self) {
        self.desired_column = None;
    }

    /// Move to `line`, aiming for the sticky desired column.
    pub(crate) fn move_caret_to_line(&mut self, line: usize) -> Result<()> {
        let desired = *self.desired_column.get_or_insert(self.caret.column);
        let column = desired.min(self.lines.length(line)?);
        self.set_caret(Position::at(line, column))
    }

    pub(crate) fn scroll(&mut self, motion: ScrollMotion) {
        self.scroll_view = self.scroll_view.reconcile(self.caret, motion);
    }
}

impl Default for TextView {
    fn default() -> Self {
        Self::new()
    }
}
