//! Gap buffer storage and line indexing for gapedit.
//!
//! Provides the value types the editing engine is built from: [`Span`]
//! intervals, a generic [`GapBuffer`], [`Position`] coordinates, and
//! [`LineMarkers`], an index of line extents over a character buffer.

mod error;
mod gap_buffer;
mod line_markers;
mod position;
mod span;

pub use error::{BufferError, Result};
pub use gap_buffer::GapBuffer;
pub use line_markers::LineMarkers;
pub use position::Position;
pub use span::Span;

/// Line ending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum LineEnding {
    LF,   // Unix \n
    CRLF, // Windows \r\n
}

impl LineEnding {
    /// Line break of the platform we are running on
    pub fn platform() -> Self {
        if cfg!(windows) {
            LineEnding::CRLF
        } else {
            LineEnding::LF
        }
    }

    /// Guess the line ending used by `text`
    pub fn detect(text: &str) -> Option<Self> {
        if text.contains("\r\n") {
            Some(LineEnding::CRLF)
        } else if text.contains('\n') {
            Some(LineEnding::LF)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::LF => "\n",
            LineEnding::CRLF => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::platform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_line_ending() {
        assert_eq!(LineEnding::detect("a\r\nb"), Some(LineEnding::CRLF));
        assert_eq!(LineEnding::detect("a\nb"), Some(LineEnding::LF));
        assert_eq!(LineEnding::detect("ab"), None);
    }
}
