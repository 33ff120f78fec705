use thiserror::Error;

use crate::{Position, Span};

/// Precondition violations reported by the buffer types.
///
/// None of these are recoverable inside the engine: they mean the caller
/// passed an index or position that does not exist in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Content index outside `[0, count)` (or `[0, count]` for insertion)
    #[error("index {index} out of range for buffer of {count} elements")]
    IndexOutOfRange { index: usize, count: usize },

    /// Gap still empty after growth; capacity bookkeeping is broken
    #[error("no space left in gap (capacity {capacity})")]
    NoSpace { capacity: usize },

    /// Line or column outside the document
    #[error("position {position} out of range")]
    PositionOutOfRange { position: Position },

    /// Span with `start > end`, or a split/join that would produce one
    #[error("invalid span {span:?}")]
    InvalidSpan { span: Span },
}

pub type Result<T> = std::result::Result<T, BufferError>;
