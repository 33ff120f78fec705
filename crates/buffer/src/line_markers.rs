use crate::{BufferError, GapBuffer, Position, Result, Span};

/// Index of logical lines over a character buffer.
///
/// Entry `i` is the extent of line `i` inside the character buffer. Line
/// breaks are not stored as characters: two adjacent spans simply meet.
/// Invariants: at least one line; `line[i].end == line[i + 1].start`;
/// `line[0].start == 0` and the last line ends at the character count.
#[derive(Debug, Clone)]
pub struct LineMarkers {
    markers: GapBuffer<Span>,
}

impl LineMarkers {
    /// A single empty line
    pub fn new() -> Self {
        Self::from_line_lengths([0])
    }

    /// Build contiguous markers for lines of the given lengths, in order.
    ///
    /// An empty iterator still yields one empty line.
    pub fn from_line_lengths(lengths: impl IntoIterator<Item = usize>) -> Self {
        let mut spans = Vec::new();
        let mut start = 0;
        for len in lengths {
            spans.push(Span::new(start, start + len));
            start += len;
        }
        if spans.is_empty() {
            spans.push(Span::empty_at(0));
        }
        Self {
            markers: GapBuffer::from_vec(spans),
        }
    }

    pub fn line_count(&self) -> usize {
        self.markers.count()
    }

    /// Index of the last line
    pub fn last_line(&self) -> usize {
        self.line_count() - 1
    }

    pub fn span(&self, line: usize) -> Result<Span> {
        self.markers.get(line).copied()
    }

    pub fn start(&self, line: usize) -> Result<usize> {
        Ok(self.span(line)?.start())
    }

    pub fn end(&self, line: usize) -> Result<usize> {
        Ok(self.span(line)?.end())
    }

    pub fn length(&self, line: usize) -> Result<usize> {
        Ok(self.span(line)?.len())
    }

    /// Character buffer index of `position`.
    ///
    /// The column may equal the line length (caret after the last character).
    pub fn buffer_index(&self, position: Position) -> Result<usize> {
        let span = self
            .markers
            .get(position.line)
            .map_err(|_| BufferError::PositionOutOfRange { position })?;
        if position.column > span.len() {
            return Err(BufferError::PositionOutOfRange { position });
        }
        Ok(span.start() + position.column)
    }

    /// Record that one character was inserted at `position`.
    pub fn insert(&mut self, position: Position) -> Result<()> {
        self.buffer_index(position)?;
        self.resize_line(position.line, 1)
    }

    /// Record that the character at `position` was deleted.
    pub fn delete(&mut self, position: Position) -> Result<()> {
        let span = self.span_at(position)?;
        if position.column >= span.len() {
            return Err(BufferError::PositionOutOfRange { position });
        }
        self.resize_line(position.line, -1)
    }

    /// Divide the line at `position` into two lines.
    pub fn split(&mut self, position: Position) -> Result<()> {
        let index = self.buffer_index(position)?;
        let (first, second) = self.span_at(position)?.split(index)?;
        self.markers.set(position.line, first)?;
        self.markers.insert_at(position.line + 1, second)
    }

    /// Merge the line at `position` with the line after it.
    pub fn join(&mut self, position: Position) -> Result<()> {
        let first = self.span_at(position)?;
        let second = self
            .markers
            .get(position.line + 1)
            .copied()
            .map_err(|_| BufferError::PositionOutOfRange { position })?;
        self.markers.set(position.line, Span::join(first, second)?)?;
        self.markers.delete_at(position.line + 1)?;
        Ok(())
    }

    /// Iterate over all line spans in order
    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        self.markers.iter().copied()
    }

    /// Check the contiguity invariants against a character count.
    pub fn check_contiguous(&self, char_count: usize) -> bool {
        let mut expected_start = 0;
        for span in self.spans() {
            if span.start() != expected_start {
                return false;
            }
            expected_start = span.end();
        }
        self.line_count() > 0 && expected_start == char_count
    }

    fn span_at(&self, position: Position) -> Result<Span> {
        self.markers
            .get(position.line)
            .copied()
            .map_err(|_| BufferError::PositionOutOfRange { position })
    }

    /// Grow or shrink `line` by `delta` and shift every later line.
    fn resize_line(&mut self, line: usize, delta: isize) -> Result<()> {
        let span = self.span(line)?;
        self.markers.set(line, span.move_end(delta))?;
        for i in line + 1..self.line_count() {
            let span = self.span(i)?;
            self.markers.set(i, span.shift(delta))?;
        }
        Ok(())
    }
}

impl Default for LineMarkers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(markers: &LineMarkers) -> Vec<(usize, usize)> {
        markers.spans().map(|s| (s.start(), s.end())).collect()
    }

    #[test]
    fn test_empty_buffer_index() {
        let markers = LineMarkers::new();
        assert_eq!(markers.line_count(), 1);
        assert_eq!(markers.buffer_index(Position::at(0, 0)).unwrap(), 0);
    }

    #[test]
    fn test_one_insert_buffer_index() {
        let mut markers = LineMarkers::new();
        markers.insert(Position::at(0, 0)).unwrap();
        assert_eq!(markers.buffer_index(Position::at(0, 1)).unwrap(), 1);
        assert_eq!(markers.length(0).unwrap(), 1);
    }

    #[test]
    fn test_from_line_lengths() {
        let markers = LineMarkers::from_line_lengths([3, 0, 2]);
        assert_eq!(spans(&markers), vec![(0, 3), (3, 3), (3, 5)]);
        assert!(markers.check_contiguous(5));

        let empty = LineMarkers::from_line_lengths(std::iter::empty());
        assert_eq!(spans(&empty), vec![(0, 0)]);
    }

    #[test]
    fn test_insert_shifts_later_lines() {
        let mut markers = LineMarkers::from_line_lengths([2, 3, 1]);
        markers.insert(Position::at(1, 3)).unwrap();
        assert_eq!(spans(&markers), vec![(0, 2), (2, 6), (6, 7)]);
        assert!(markers.check_contiguous(7));
    }

    #[test]
    fn test_delete_shifts_later_lines() {
        let mut markers = LineMarkers::from_line_lengths([2, 3, 1]);
        markers.delete(Position::at(0, 1)).unwrap();
        assert_eq!(spans(&markers), vec![(0, 1), (1, 4), (4, 5)]);
        // Nothing under the caret at end of line
        assert!(markers.delete(Position::at(0, 1)).is_err());
    }

    #[test]
    fn test_split_partitions_line() {
        let mut markers = LineMarkers::from_line_lengths([5, 2]);
        markers.split(Position::at(0, 2)).unwrap();
        assert_eq!(spans(&markers), vec![(0, 2), (2, 5), (5, 7)]);

        // Splitting at the end yields an empty trailing line
        markers.split(Position::at(2, 2)).unwrap();
        assert_eq!(spans(&markers), vec![(0, 2), (2, 5), (5, 7), (7, 7)]);
        assert!(markers.check_contiguous(7));
    }

    #[test]
    fn test_join_merges_with_next() {
        let mut markers = LineMarkers::from_line_lengths([2, 3, 1]);
        markers.join(Position::at(0, 2)).unwrap();
        assert_eq!(spans(&markers), vec![(0, 5), (5, 6)]);
        markers.join(Position::at(0, 0)).unwrap();
        assert_eq!(spans(&markers), vec![(0, 6)]);
        // No line after the last one
        assert_eq!(
            markers.join(Position::at(0, 6)),
            Err(BufferError::PositionOutOfRange {
                position: Position::at(0, 6)
            })
        );
    }

    #[test]
    fn test_position_out_of_range() {
        let markers = LineMarkers::from_line_lengths([2]);
        assert!(markers.buffer_index(Position::at(0, 3)).is_err());
        assert!(markers.buffer_index(Position::at(1, 0)).is_err());
        assert!(markers.span(1).is_err());
    }

    #[test]
    fn test_contiguity_under_mixed_edits() {
        let mut markers = LineMarkers::new();
        let mut count = 0;
        for _ in 0..4 {
            markers.insert(Position::at(0, 0)).unwrap();
            count += 1;
        }
        markers.split(Position::at(0, 2)).unwrap();
        markers.insert(Position::at(1, 2)).unwrap();
        count += 1;
        markers.split(Position::at(1, 1)).unwrap();
        markers.delete(Position::at(2, 0)).unwrap();
        count -= 1;
        markers.join(Position::at(0, 2)).unwrap();
        assert_eq!(markers.line_count(), 2);
        assert!(markers.check_contiguous(count));
    }

    #[test]
    fn test_new_grows_from_single_line() {
        let mut markers = LineMarkers::new();
        assert_eq!(spans(&markers), vec![(0, 0)]);
        for count in 0..5 {
            markers.split(Position::at(count, 0)).unwrap();
            assert!(markers.check_contiguous(0));
        }
        assert_eq!(markers.line_count(), 6);
    }
}
