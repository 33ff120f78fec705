use std::fmt;

/// Logical (line, column) coordinate in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number (0-based)
    pub line: usize,
    /// Column in characters (0-based)
    pub column: usize,
}

impl Position {
    pub const BUFFER_START: Position = Position { line: 0, column: 0 };

    /// Create position at specified line and column
    pub fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn with_line(self, line: usize) -> Self {
        Self { line, ..self }
    }

    pub fn with_column(self, column: usize) -> Self {
        Self { column, ..self }
    }

    /// Start of the following line
    pub fn next_line(self) -> Self {
        Self::at(self.line + 1, 0)
    }

    /// Line above, if any. Column is kept as-is.
    pub fn previous_line(self) -> Option<usize> {
        self.line.checked_sub(1)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.column.cmp(&other.column),
            other => other,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ln {}, Col {}", self.line, self.column)
    }
}
