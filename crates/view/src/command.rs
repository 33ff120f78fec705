//! Reversible edit commands.
//!
//! Executing a command mutates a [`TextView`] and returns the command that
//! exactly undoes the mutation. Compound edits are built by chaining
//! primitives with [`EditCommand::then`]; the inverse of a chain is the
//! chain of the inverses in reverse order.

use std::fmt;

use gapedit_buffer::{Position, Result};

use crate::{ScrollMotion, TextView};

/// Operation over a [`TextView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Identity
    NoOp,
    /// Insert a character at the caret and advance past it
    Insert(char),
    /// Delete the character under the caret, or join with the next line at line end
    Delete,
    /// Delete the character before the caret, or join with the previous line at line start
    DeleteBackwards,
    /// Break the line at the caret and move to the start of the new line
    InsertNewLine,
    /// Break the line at the caret without moving the caret
    SplitLines,
    /// Merge the caret line with the next one
    JoinLines,
    /// Move the caret to a position
    SetCaret(Position),
    CharLeft,
    CharRight,
    WordLeft,
    WordRight,
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    LineStart,
    LineEnd,
    /// Run the first command, then the second
    Chain(Box<EditCommand>, Box<EditCommand>),
}

use EditCommand::*;

impl EditCommand {
    /// Sequence `self` before `next`.
    ///
    /// `NoOp` on either side is dropped, and back-to-back caret moves
    /// collapse into the later one, so inverses of inverses do not grow.
    pub fn then(self, next: EditCommand) -> EditCommand {
        match (self, next) {
            (NoOp, next) => next,
            (first, NoOp) => first,
            (SetCaret(_), SetCaret(position)) => SetCaret(position),
            (Chain(first, last), SetCaret(position)) if matches!(*last, SetCaret(_)) => {
                Chain(first, Box::new(SetCaret(position)))
            }
            (SetCaret(_), Chain(first, rest)) if matches!(*first, SetCaret(_)) => {
                Chain(first, rest)
            }
            (first, next) => Chain(Box::new(first), Box::new(next)),
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, NoOp)
    }

    /// Perform the command and return its inverse.
    ///
    /// Boundary cases (start or end of buffer, first or last line) are
    /// no-ops. An error means the command was handed an impossible caret or
    /// position. A chain whose second half fails undoes its first half
    /// before returning the error, so a failed command leaves the view as
    /// it found it.
    pub fn execute(&self, view: &mut TextView) -> Result<EditCommand> {
        match self {
            NoOp => Ok(NoOp),
            Insert('\n') => insert_new_line(view),
            Insert(ch) => insert(view, *ch),
            Delete => delete(view),
            DeleteBackwards => delete_backwards(view),
            InsertNewLine => insert_new_line(view),
            SplitLines => split_lines(view),
            JoinLines => join_lines(view),
            SetCaret(position) => set_caret(view, *position),
            CharLeft => char_left(view),
            CharRight => char_right(view),
            WordLeft => word_left(view),
            WordRight => word_right(view),
            LineUp => line_up(view),
            LineDown => line_down(view),
            PageUp => page_up(view),
            PageDown => page_down(view),
            LineStart => line_start(view),
            LineEnd => line_end(view),
            Chain(first, second) => {
                let undo_first = first.execute(view)?;
                match second.execute(view) {
                    Ok(undo_second) => Ok(undo_second.then(undo_first)),
                    Err(e) => {
                        // Roll back the half that ran
                        if let Err(rollback) = undo_first.execute(view) {
                            gapedit_logger::error(format!(
                                "Rolling back {} failed: {}",
                                first, rollback
                            ));
                        }
                        Err(e)
                    }
                }
            }
        }
    }
}

fn insert(view: &mut TextView, ch: char) -> Result<EditCommand> {
    let caret = view.caret();
    view.clear_desired_column();
    view.insert_char(ch)?;
    view.set_caret(caret.with_column(caret.column + 1))?;
    view.scroll(ScrollMotion::Line);
    Ok(SetCaret(caret).then(Delete))
}

fn delete(view: &mut TextView) -> Result<EditCommand> {
    let caret = view.caret();
    view.clear_desired_column();
    if caret.column < view.line_length(caret.line)? {
        let deleted = view.delete_char()?;
        view.scroll(ScrollMotion::Line);
        // Anchored: the caret may have moved by the time this runs
        Ok(SetCaret(caret)
            .then(Insert(deleted))
            .then(SetCaret(caret)))
    } else if caret.line < view.last_line() {
        join_lines(view)
    } else {
        Ok(NoOp)
    }
}

fn delete_backwards(view: &mut TextView) -> Result<EditCommand> {
    let caret = view.caret();
    let target = if caret.column > 0 {
        caret.with_column(caret.column - 1)
    } else if let Some(previous) = caret.previous_line() {
        Position::at(previous, view.line_length(previous)?)
    } else {
        return Ok(NoOp);
    };

    view.set_caret(target)?;
    view.scroll(ScrollMotion::Line);
    let undo = delete(view)?;
    Ok(undo.then(SetCaret(caret)))
}

fn insert_new_line(view: &mut TextView) -> Result<EditCommand> {
    let caret = view.caret();
    view.clear_desired_column();
    let undo = split_lines(view)?;
    view.set_caret(caret.next_line())?;
    view.scroll(ScrollMotion::Line);
    Ok(undo)
}

fn split_lines(view: &mut TextView) -> Result<EditCommand> {
    let caret = view.caret();
    view.split_line()?;
    Ok(SetCaret(caret).then(JoinLines))
}

fn join_lines(view: &mut TextView) -> Result<EditCommand> {
    let caret = view.caret();
    if caret.line >= view.last_line() {
        return Ok(NoOp);
    }

    let split_at = Position::at(caret.line, view.line_length(caret.line)?);
    view.join_line()?;
    Ok(SetCaret(split_at).then(SplitLines).then(SetCaret(caret)))
}

fn set_caret(view: &mut TextView, position: Position) -> Result<EditCommand> {
    let previous = view.caret();
    view.set_caret(position)?;
    view.clear_desired_column();
    view.scroll(ScrollMotion::Line);
    Ok(SetCaret(previous))
}

fn char_left(view: &mut TextView) -> Result<EditCommand> {
    view.clear_desired_column();
    let caret = view.caret();
    if caret.column > 0 {
        view.set_caret(caret.with_column(caret.column - 1))?;
    } else if let Some(previous) = caret.previous_line() {
        view.set_caret(Position::at(previous, view.line_length(previous)?))?;
    }
    view.scroll(ScrollMotion::Line);
    Ok(NoOp)
}

fn char_right(view: &mut TextView) -> Result<EditCommand> {
    view.clear_desired_column();
    let caret = view.caret();
    if caret.column < view.line_length(caret.line)? {
        view.set_caret(caret.with_column(caret.column + 1))?;
    } else if caret.line < view.last_line() {
        view.set_caret(caret.next_line())?;
    }
    view.scroll(ScrollMotion::Line);
    Ok(NoOp)
}

/// Skip whitespace to the left, then the word before it.
fn word_left(view: &mut TextView) -> Result<EditCommand> {
    view.clear_desired_column();
    let caret = view.caret();
    if caret.column > 0 {
        let start = view.caret_buffer_index()?;
        let min = view.line_span(caret.line)?.start();
        let mut i = start;
        while i > min && view.char_at(i - 1)?.is_whitespace() {
            i -= 1;
        }
        while i > min && !view.char_at(i - 1)?.is_whitespace() {
            i -= 1;
        }
        view.set_caret(caret.with_column(caret.column - (start - i)))?;
    } else if let Some(previous) = caret.previous_line() {
        view.set_caret(Position::at(previous, view.line_length(previous)?))?;
    }
    view.scroll(ScrollMotion::Line);
    Ok(NoOp)
}

/// Skip the word under the caret, then the whitespace after it.
fn word_right(view: &mut TextView) -> Result<EditCommand> {
    view.clear_desired_column();
    let caret = view.caret();
    let span = view.line_span(caret.line)?;
    if caret.column < span.len() {
        let start = view.caret_buffer_index()?;
        let max = span.end();
        let mut i = start;
        while i < max && !view.char_at(i)?.is_whitespace() {
            i += 1;
        }
        while i < max && view.char_at(i)?.is_whitespace() {
            i += 1;
        }
        view.set_caret(caret.with_column(caret.column + (i - start)))?;
    } else if caret.line < view.last_line() {
        view.set_caret(caret.next_line())?;
    }
    view.scroll(ScrollMotion::Line);
    Ok(NoOp)
}

fn line_up(view: &mut TextView) -> Result<EditCommand> {
    if let Some(previous) = view.caret().previous_line() {
        view.move_caret_to_line(previous)?;
    }
    view.scroll(ScrollMotion::Line);
    Ok(NoOp)
}

fn line_down(view: &mut TextView) -> Result<EditCommand> {
    let caret = view.caret();
    if caret.line < view.last_line() {
        view.move_caret_to_line(caret.line + 1)?;
    }
    view.scroll(ScrollMotion::Line);
    Ok(NoOp)
}

fn page_up(view: &mut TextView) -> Result<EditCommand> {
    let caret = view.caret();
    let target = caret.line.saturating_sub(view.scroll_view().lines);
    if target != caret.line {
        view.move_caret_to_line(target)?;
    }
    view.scroll(ScrollMotion::PageUp);
    Ok(NoOp)
}

fn page_down(view: &mut TextView) -> Result<EditCommand> {
    let caret = view.caret();
    let target = (caret.line + view.scroll_view().lines).min(view.last_line());
    if target != caret.line {
        view.move_caret_to_line(target)?;
    }
    view.scroll(ScrollMotion::PageDown);
    Ok(NoOp)
}

fn line_start(view: &mut TextView) -> Result<EditCommand> {
    view.clear_desired_column();
    let caret = view.caret();
    view.set_caret(caret.with_column(0))?;
    view.scroll(ScrollMotion::Line);
    Ok(NoOp)
}

fn line_end(view: &mut TextView) -> Result<EditCommand> {
    view.clear_desired_column();
    let caret = view.caret();
    view.set_caret(caret.with_column(view.line_length(caret.line)?))?;
    view.scroll(ScrollMotion::Line);
    Ok(NoOp)
}

impl fmt::Display for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoOp => write!(f, "NoOp"),
            Insert(ch) => write!(f, "Insert({:?})", ch),
            Delete => write!(f, "Delete"),
            DeleteBackwards => write!(f, "DeleteBackwards"),
            InsertNewLine => write!(f, "InsertNewLine"),
            SplitLines => write!(f, "SplitLines"),
            JoinLines => write!(f, "JoinLines"),
            SetCaret(position) => write!(f, "SetCaret({})", position),
            CharLeft => write!(f, "CharLeft"),
            CharRight => write!(f, "CharRight"),
            WordLeft => write!(f, "WordLeft"),
            WordRight => write!(f, "WordRight"),
            LineUp => write!(f, "LineUp"),
            LineDown => write!(f, "LineDown"),
            PageUp => write!(f, "PageUp"),
            PageDown => write!(f, "PageDown"),
            LineStart => write!(f, "LineStart"),
            LineEnd => write!(f, "LineEnd"),
            Chain(first, second) => write!(f, "{} -> {}", first, second),
        }
    }
}
