use std::ops::Range;

use crate::{BufferError, Result};

/// Half-open interval `[start, end)`.
///
/// Used both as the gap descriptor of a [`GapBuffer`](crate::GapBuffer) and
/// as the extent of a line. All mutators return a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span.
    ///
    /// # Panics
    ///
    /// If `start` exceeds `end`. Use [`Span::try_new`] for unchecked input.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "span start {} past end {}", start, end);
        Self { start, end }
    }

    /// Checked constructor
    pub fn try_new(start: usize, end: usize) -> Result<Self> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(BufferError::InvalidSpan {
                span: Self { start, end },
            })
        }
    }

    /// Zero-length span at `index`
    pub fn empty_at(index: usize) -> Self {
        Self::new(index, index)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if `index` lies in `[start, end)`
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// New span with `start` moved by `delta`
    pub fn move_start(self, delta: isize) -> Self {
        Self::new(offset(self.start, delta), self.end)
    }

    /// New span with `end` moved by `delta`
    pub fn move_end(self, delta: isize) -> Self {
        Self::new(self.start, offset(self.end, delta))
    }

    /// New span with both ends moved by `delta`
    pub fn shift(self, delta: isize) -> Self {
        Self::new(offset(self.start, delta), offset(self.end, delta))
    }

    /// Divide into `[start, index)` and `[index, end)`.
    ///
    /// The two halves partition the original exactly.
    pub fn split(self, index: usize) -> Result<(Self, Self)> {
        if index < self.start || index > self.end {
            return Err(BufferError::InvalidSpan {
                span: Self {
                    start: index,
                    end: self.end,
                },
            });
        }
        Ok((Self::new(self.start, index), Self::new(index, self.end)))
    }

    /// Merge two adjacent spans. `left.end` must equal `right.start`.
    pub fn join(left: Self, right: Self) -> Result<Self> {
        if left.end != right.start {
            return Err(BufferError::InvalidSpan {
                span: Self {
                    start: left.end,
                    end: right.start,
                },
            });
        }
        Ok(Self::new(left.start, right.end))
    }

    /// Translate a content index (which ignores this span when it is a gap)
    /// into an index into the backing storage.
    pub fn to_buffer_index(&self, content_index: usize) -> usize {
        if content_index >= self.start {
            content_index + self.len()
        } else {
            content_index
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

fn offset(value: usize, delta: isize) -> usize {
    value
        .checked_add_signed(delta)
        .unwrap_or_else(|| panic!("span bound {} moved by {} below zero", value, delta))
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
