//! Gap buffer for efficient editing near a moving cursor.
//!
//! The backing store is laid out as `[pre-gap content | gap | post-gap content]`.
//! Edits happen at the gap edge, so a run of keystrokes at the same place
//! costs O(1) each; moving the gap to a new index costs O(distance moved).

use crate::{BufferError, Result, Span};

const DEFAULT_CAPACITY: usize = 256;

/// Resizable sequence of `T` with a single movable gap.
#[derive(Debug, Clone)]
pub struct GapBuffer<T> {
    /// Backing storage, including the gap slots
    data: Vec<T>,
    /// Unused region of `data`
    gap: Span,
}

impl<T: Copy + Default> GapBuffer<T> {
    /// Create an empty buffer with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty buffer whose gap fills `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![T::default(); capacity],
            gap: Span::new(0, capacity),
        }
    }

    /// Create a buffer holding exactly `content`; the gap is empty and sits at the end.
    pub fn from_vec(content: Vec<T>) -> Self {
        let len = content.len();
        Self {
            data: content,
            gap: Span::empty_at(len),
        }
    }

    /// Number of elements the backing store holds before it has to grow
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of content elements
    pub fn count(&self) -> usize {
        self.capacity() - self.gap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Element at content index `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.data[self.gap.to_buffer_index(index)])
    }

    /// Overwrite the element at content index `index`
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        let physical = self.gap.to_buffer_index(index);
        self.data[physical] = value;
        Ok(())
    }

    /// Insert `value` so that `get(index) == value` afterwards.
    ///
    /// Valid for `0 <= index <= count`. Amortized O(1) at the gap.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.count() {
            return Err(BufferError::IndexOutOfRange {
                index,
                count: self.count(),
            });
        }

        self.move_gap_to(index);
        if self.gap.is_empty() {
            self.grow(1);
        }
        if self.gap.is_empty() {
            return Err(BufferError::NoSpace {
                capacity: self.capacity(),
            });
        }

        self.data[self.gap.start()] = value;
        self.gap = self.gap.move_start(1);
        Ok(())
    }

    /// Remove and return the element at `index`.
    ///
    /// The slot is absorbed into the gap; its stale value is not cleared.
    pub fn delete_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        self.move_gap_to(index);
        let removed = self.data[self.gap.end()];
        self.gap = self.gap.move_end(1);
        Ok(removed)
    }

    /// Drop all content, keeping the allocation
    pub fn clear(&mut self) {
        self.gap = Span::new(0, self.capacity());
    }

    /// Iterate over all content elements in order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data[..self.gap.start()]
            .iter()
            .chain(self.data[self.gap.end()..].iter())
    }

    /// Iterate over the content elements covered by `span`
    pub fn range(&self, span: Span) -> Result<impl Iterator<Item = &T> + '_> {
        if span.end() > self.count() {
            return Err(BufferError::IndexOutOfRange {
                index: span.end(),
                count: self.count(),
            });
        }

        let gap_start = self.gap.start();
        let gap_len = self.gap.len();
        let left = &self.data[span.start().min(gap_start)..span.end().min(gap_start)];
        let right = &self.data
            [span.start().max(gap_start) + gap_len..span.end().max(gap_start) + gap_len];
        Ok(left.iter().chain(right.iter()))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.count() {
            Ok(())
        } else {
            Err(BufferError::IndexOutOfRange {
                index,
                count: self.count(),
            })
        }
    }

    /// Slide the gap so it starts at content index `index` (`index <= count`).
    fn move_gap_to(&mut self, index: usize) {
        let gap_start = self.gap.start();
        let gap_end = self.gap.end();

        if index < gap_start {
            // Content [index, gap_start) moves to just before gap_end
            let distance = gap_start - index;
            self.data.copy_within(index..gap_start, gap_end - distance);
            self.gap = self.gap.shift(-(distance as isize));
        } else if index > gap_start {
            // Content [gap_end, gap_end + distance) moves to gap_start
            let distance = index - gap_start;
            self.data
                .copy_within(gap_end..gap_end + distance, gap_start);
            self.gap = self.gap.shift(distance as isize);
        }
    }

    /// Grow the backing store by `max(50%, needed)` keeping the gap where it is.
    fn grow(&mut self, min_gap: usize) {
        let old_capacity = self.capacity();
        let new_capacity = (old_capacity + old_capacity / 2).max(self.count() + min_gap);
        let added = new_capacity - old_capacity;

        let mut data = Vec::with_capacity(new_capacity);
        data.extend_from_slice(&self.data[..self.gap.start()]);
        data.resize(self.gap.end() + added, T::default());
        data.extend_from_slice(&self.data[self.gap.end()..]);

        self.gap = self.gap.move_end(added as isize);
        self.data = data;

        gapedit_logger::debug(format!(
            "Gap buffer grew from {} to {} slots",
            old_capacity, new_capacity
        ));
    }
}

impl<T: Copy + Default> Default for GapBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(gb: &GapBuffer<char>) -> String {
        gb.iter().collect()
    }

    #[test]
    fn test_new_buffer_count() {
        let gb = GapBuffer::<char>::with_capacity(1024);
        assert_eq!(gb.count(), 0);
        assert!(gb.is_empty());
    }

    #[test]
    fn test_insert_into_new_buffer() {
        let mut gb = GapBuffer::new();
        gb.insert_at(0, 'a').unwrap();
        assert_eq!(gb.count(), 1);
        assert_eq!(*gb.get(0).unwrap(), 'a');
    }

    #[test]
    fn test_insert_left_of_gap() {
        let mut gb = GapBuffer::new();
        gb.insert_at(0, 'a').unwrap();
        gb.insert_at(1, 'c').unwrap();
        gb.insert_at(1, 'b').unwrap();
        assert_eq!(content(&gb), "abc");
    }

    #[test]
    fn test_insert_right_of_gap() {
        let mut gb = GapBuffer::new();
        gb.insert_at(0, 'b').unwrap(); // "b^"
        gb.insert_at(1, 'd').unwrap(); // "bd^"
        gb.insert_at(0, 'a').unwrap(); // "a^bd"
        gb.insert_at(2, 'c').unwrap(); // "abc^d"
        assert_eq!(content(&gb), "abcd");
    }

    #[test]
    fn test_insert_grows_full_buffer() {
        let mut gb = GapBuffer::with_capacity(2);
        gb.insert_at(0, 'a').unwrap();
        gb.insert_at(1, 'c').unwrap();
        assert_eq!(gb.capacity(), 2);

        gb.insert_at(1, 'b').unwrap();

        assert!(gb.capacity() > 2);
        assert_eq!(*gb.get(0).unwrap(), 'a');
        assert_eq!(*gb.get(1).unwrap(), 'b');
        assert_eq!(*gb.get(2).unwrap(), 'c');
    }

    #[test]
    fn test_grow_from_zero_capacity() {
        let mut gb = GapBuffer::with_capacity(0);
        for (i, ch) in "hello".chars().enumerate() {
            gb.insert_at(i, ch).unwrap();
        }
        assert_eq!(content(&gb), "hello");
    }

    #[test]
    fn test_grow_from_exact_content() {
        let mut gb = GapBuffer::from_vec("wrd".chars().collect());
        assert_eq!(gb.capacity(), 3);
        gb.insert_at(1, 'o').unwrap();
        assert_eq!(content(&gb), "word");
    }

    #[test]
    fn test_delete() {
        let mut gb = GapBuffer::new();
        gb.insert_at(0, 'a').unwrap();
        gb.insert_at(1, 'c').unwrap();
        gb.insert_at(1, 'b').unwrap();

        assert_eq!(gb.delete_at(0).unwrap(), 'a');
        assert_eq!(content(&gb), "bc");
        assert_eq!(gb.delete_at(1).unwrap(), 'c');
        assert_eq!(content(&gb), "b");
    }

    #[test]
    fn test_out_of_range() {
        let mut gb = GapBuffer::from_vec(vec!['x']);
        assert_eq!(
            gb.get(1),
            Err(BufferError::IndexOutOfRange { index: 1, count: 1 })
        );
        assert!(gb.insert_at(2, 'y').is_err());
        assert!(gb.delete_at(1).is_err());
        assert!(gb.set(5, 'z').is_err());
        // Failed calls leave content alone
        assert_eq!(content(&gb), "x");
    }

    #[test]
    fn test_set() {
        let mut gb = GapBuffer::from_vec("cat".chars().collect());
        gb.insert_at(1, '-').unwrap();
        gb.set(3, 'r').unwrap();
        assert_eq!(content(&gb), "c-ar");
    }

    #[test]
    fn test_range_across_gap() {
        let mut gb = GapBuffer::with_capacity(16);
        for (i, ch) in "abcdef".chars().enumerate() {
            gb.insert_at(i, ch).unwrap();
        }
        // Put the gap in the middle
        gb.insert_at(3, 'X').unwrap();
        gb.delete_at(3).unwrap();

        let all: String = gb.range(Span::new(0, 6)).unwrap().collect();
        assert_eq!(all, "abcdef");
        let across: String = gb.range(Span::new(1, 5)).unwrap().collect();
        assert_eq!(across, "bcde");
        let before: String = gb.range(Span::new(0, 2)).unwrap().collect();
        assert_eq!(before, "ab");
        let after: String = gb.range(Span::new(4, 6)).unwrap().collect();
        assert_eq!(after, "ef");
        assert_eq!(gb.range(Span::new(2, 2)).unwrap().count(), 0);
        assert!(gb.range(Span::new(4, 7)).is_err());
    }

    #[test]
    fn test_clear() {
        let mut gb = GapBuffer::from_vec("abc".chars().collect());
        gb.clear();
        assert_eq!(gb.count(), 0);
        gb.insert_at(0, 'z').unwrap();
        assert_eq!(content(&gb), "z");
    }

    /// Replays a deterministic pseudo-random edit sequence against both the
    /// gap buffer and a plain `Vec`, comparing after every step.
    #[test]
    fn test_matches_vec_model() {
        let mut gb = GapBuffer::with_capacity(4);
        let mut model: Vec<u32> = Vec::new();
        let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
        let mut next = move || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (seed >> 33) as usize
        };

        let mut inserts = 0usize;
        let mut deletes = 0usize;
        for step in 0..2000u32 {
            let roll = next();
            if model.is_empty() || roll % 3 != 0 {
                let index = next() % (model.len() + 1);
                gb.insert_at(index, step).unwrap();
                model.insert(index, step);
                inserts += 1;
            } else {
                let index = next() % model.len();
                assert_eq!(gb.delete_at(index).unwrap(), model.remove(index));
                deletes += 1;
            }

            assert_eq!(gb.count(), inserts - deletes);
            if step % 97 == 0 {
                for (i, expected) in model.iter().enumerate() {
                    assert_eq!(gb.get(i).unwrap(), expected);
                }
            }
        }
        assert_eq!(gb.iter().copied().collect::<Vec<_>>(), model);
    }
}
