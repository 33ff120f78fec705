use std::fmt;

use gapedit_buffer::Position;

/// Kind of caret motion a scroll reconciliation follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMotion {
    /// Caret moved by a line or less: slide just enough to show it
    Line,
    /// Caret moved a page up
    PageUp,
    /// Caret moved a page down
    PageDown,
}

/// Visible window of the document
///
/// A plain value: it holds no reference to a caret and is recomputed from
/// the caret after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollView {
    /// First visible line (0-based)
    pub line_start: usize,
    /// First visible column
    pub column_start: usize,
    /// Number of visible lines
    pub lines: usize,
    /// Number of visible columns
    pub columns: usize,
}

impl ScrollView {
    /// Create a view at the top-left corner. Extents are at least 1.
    pub fn new(lines: usize, columns: usize) -> Self {
        Self {
            line_start: 0,
            column_start: 0,
            lines: lines.max(1),
            columns: columns.max(1),
        }
    }

    /// Change the extent, keeping the top-left corner in place
    pub fn resize(self, lines: usize, columns: usize) -> Self {
        Self {
            lines: lines.max(1),
            columns: columns.max(1),
            ..self
        }
    }

    /// First line below the view (exclusive)
    pub fn line_end(&self) -> usize {
        self.line_start + self.lines
    }

    /// First column right of the view (exclusive)
    pub fn column_end(&self) -> usize {
        self.column_start + self.columns
    }

    pub fn is_line_visible(&self, line: usize) -> bool {
        line >= self.line_start && line < self.line_end()
    }

    pub fn is_column_visible(&self, column: usize) -> bool {
        column >= self.column_start && column < self.column_end()
    }

    pub fn is_visible(&self, position: Position) -> bool {
        self.is_line_visible(position.line) && self.is_column_visible(position.column)
    }

    /// Recompute the window so `caret` stays visible after `motion`.
    pub fn reconcile(self, caret: Position, motion: ScrollMotion) -> Self {
        let vertical = match motion {
            ScrollMotion::Line => self.line_scroll(caret),
            ScrollMotion::PageDown => self.page_down_scroll(caret),
            ScrollMotion::PageUp => self.page_up_scroll(caret),
        };
        vertical.horizontal_scroll(caret)
    }

    /// Slide by exactly the overshoot so the caret sits on the edge.
    fn line_scroll(self, caret: Position) -> Self {
        let line_start = if caret.line < self.line_start {
            caret.line
        } else if caret.line >= self.line_end() {
            caret.line + 1 - self.lines
        } else {
            self.line_start
        };
        Self { line_start, ..self }
    }

    fn page_down_scroll(self, caret: Position) -> Self {
        if caret.line >= self.line_end() + self.lines {
            // Still below after a full page (view shrank): caret becomes the bottom line
            Self {
                line_start: caret.line + 1 - self.lines,
                ..self
            }
        } else if caret.line >= self.line_end() {
            Self {
                line_start: self.line_end(),
                ..self
            }
        } else {
            self.line_scroll(caret)
        }
    }

    fn page_up_scroll(self, caret: Position) -> Self {
        if caret.line + self.lines < self.line_start {
            // More than a page above: caret becomes the top line
            Self {
                line_start: caret.line,
                ..self
            }
        } else if caret.line < self.line_start {
            Self {
                line_start: self.line_start.saturating_sub(self.lines),
                ..self
            }
        } else {
            self.line_scroll(caret)
        }
    }

    /// Keep a pad of `columns / 5` on the side the caret approaches from.
    fn horizontal_scroll(self, caret: Position) -> Self {
        let pad = self.columns / 5;
        let column_start = if caret.column < self.column_start {
            caret.column.saturating_sub(pad)
        } else if caret.column >= self.column_end() {
            (caret.column + pad)
                .saturating_sub(self.columns)
                .max(caret.column + 1 - self.columns)
        } else {
            self.column_start
        };
        Self {
            column_start,
            ..self
        }
    }

    /// Position of `position` relative to the view's top-left corner,
    /// or `None` when it is outside the view.
    pub fn position_in_view(&self, position: Position) -> Option<Position> {
        if !self.is_visible(position) {
            return None;
        }
        Some(Position::at(
            position.line - self.line_start,
            position.column - self.column_start,
        ))
    }
}

impl Default for ScrollView {
    fn default() -> Self {
        Self::new(24, 80)
    }
}

impl fmt::Display for ScrollView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.line_start, self.column_start, self.lines, self.columns
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at(line_start: usize, column_start: usize) -> ScrollView {
        ScrollView {
            line_start,
            column_start,
            ..ScrollView::new(24, 80)
        }
    }

    #[test]
    fn test_visibility() {
        let view = ScrollView::new(24, 80);
        assert!(view.is_line_visible(0));
        assert!(view.is_line_visible(23));
        assert!(!view.is_line_visible(24));
        assert!(view.is_column_visible(79));
        assert!(!view.is_column_visible(80));
    }

    #[test]
    fn test_line_down_never_overshoots() {
        let mut view = ScrollView::new(24, 80);
        for line in 1..=30 {
            view = view.reconcile(Position::at(line, 0), ScrollMotion::Line);
            assert_eq!(view.line_start, (line + 1).saturating_sub(24));
            assert_eq!(view.line_end() - 1, line.max(23));
        }
        assert_eq!(view.line_start, 7); // 30 - 23
    }

    #[test]
    fn test_line_up_slides_by_overshoot() {
        let view = view_at(10, 0).reconcile(Position::at(9, 0), ScrollMotion::Line);
        assert_eq!(view.line_start, 9);
        let view = view_at(10, 0).reconcile(Position::at(3, 0), ScrollMotion::Line);
        assert_eq!(view.line_start, 3);
    }

    #[test]
    fn test_caret_inside_band_keeps_view() {
        let view = view_at(10, 5);
        assert_eq!(view.reconcile(Position::at(20, 30), ScrollMotion::Line), view);
        assert_eq!(view.reconcile(Position::at(20, 30), ScrollMotion::PageDown), view);
        assert_eq!(view.reconcile(Position::at(20, 30), ScrollMotion::PageUp), view);
    }

    #[test]
    fn test_page_down_slides_one_page() {
        let view = view_at(0, 0).reconcile(Position::at(30, 0), ScrollMotion::PageDown);
        assert_eq!(view.line_start, 24);
    }

    #[test]
    fn test_page_down_jumps_when_far_below() {
        let view = view_at(0, 0).reconcile(Position::at(100, 0), ScrollMotion::PageDown);
        assert_eq!(view.line_start, 77);
        assert!(view.is_line_visible(100));
        assert_eq!(view.line_end() - 1, 100);
    }

    #[test]
    fn test_page_up_slides_one_page_clamped() {
        let view = view_at(30, 0).reconcile(Position::at(20, 0), ScrollMotion::PageUp);
        assert_eq!(view.line_start, 6);
        let view = view_at(10, 0).reconcile(Position::at(0, 0), ScrollMotion::PageUp);
        assert_eq!(view.line_start, 0);
    }

    #[test]
    fn test_page_up_jumps_when_far_above() {
        let view = view_at(100, 0).reconcile(Position::at(5, 0), ScrollMotion::PageUp);
        assert_eq!(view.line_start, 5);
    }

    #[test]
    fn test_horizontal_scroll_right_with_pad() {
        let view = ScrollView::new(24, 80).reconcile(Position::at(0, 100), ScrollMotion::Line);
        // pad = 16: 100 - 80 + 16
        assert_eq!(view.column_start, 36);
        assert!(view.is_column_visible(100));
    }

    #[test]
    fn test_horizontal_scroll_left_with_pad() {
        let view = view_at(0, 50).reconcile(Position::at(0, 40), ScrollMotion::Line);
        assert_eq!(view.column_start, 24);
        let view = view_at(0, 50).reconcile(Position::at(0, 10), ScrollMotion::Line);
        assert_eq!(view.column_start, 0);
    }

    #[test]
    fn test_horizontal_scroll_narrow_view_keeps_caret_visible() {
        // columns / 5 == 0
        let view = ScrollView::new(5, 4).reconcile(Position::at(0, 4), ScrollMotion::Line);
        assert_eq!(view.column_start, 1);
        assert!(view.is_column_visible(4));
    }

    #[test]
    fn test_resize_keeps_corner() {
        let view = view_at(12, 7).resize(10, 40);
        assert_eq!(view.line_start, 12);
        assert_eq!(view.column_start, 7);
        assert_eq!(view.lines, 10);
        assert_eq!(view.columns, 40);
        assert_eq!(view_at(0, 0).resize(0, 0).lines, 1);
    }

    #[test]
    fn test_position_in_view() {
        let view = view_at(10, 5);
        assert_eq!(
            view.position_in_view(Position::at(15, 10)),
            Some(Position::at(5, 5))
        );
        assert_eq!(view.position_in_view(Position::at(2, 10)), None);
        assert_eq!(view.to_string(), "(10, 5, 24, 80)");
    }
}
