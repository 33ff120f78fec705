use crate::EditCommand;

/// Undo/redo stacks of inverse commands
#[derive(Debug, Clone)]
pub struct History {
    /// Commands that undo the most recent edits
    undo_stack: Vec<EditCommand>,
    /// Commands that redo undone edits
    redo_stack: Vec<EditCommand>,
    /// Maximum number of undo steps
    max_size: usize,
}

impl History {
    /// Create a new history
    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    /// Create history with specified size
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Record the inverse of a freshly executed command.
    ///
    /// The redo stack always resets, even for `NoOp` (a motion): redo only
    /// applies right after undo.
    pub fn record(&mut self, inverse: EditCommand) {
        self.redo_stack.clear();
        self.push_undo(inverse);
    }

    /// Push onto the undo stack without touching redo
    pub fn push_undo(&mut self, command: EditCommand) {
        if command.is_noop() {
            return;
        }
        self.undo_stack.push(command);

        // Limit history size
        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    pub fn push_redo(&mut self, command: EditCommand) {
        if !command.is_noop() {
            self.redo_stack.push(command);
        }
    }

    pub fn pop_undo(&mut self) -> Option<EditCommand> {
        self.undo_stack.pop()
    }

    pub fn pop_redo(&mut self) -> Option<EditCommand> {
        self.redo_stack.pop()
    }

    /// Check if undo is possible
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is possible
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Clear history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
