//! Viewport windowing
//!
//! Each axis is windowed independently. A [`TablePart`] is computed by walking
//! element extents (row heights or column widths) from an anchor end until the
//! window is full; every element costs its extent plus one border cell, and
//! the window also needs one outer border. At most one edge element is cut
//! short, and the cut is recorded so the renderer can show its head (trailing
//! edge) or tail (leading edge). A cut element loses the border on its cut
//! side.

use super::model::Table;

/// Per-element extents along one axis
pub trait Extents {
    fn count(&self) -> usize;
    fn extent(&self, index: usize) -> usize;
}

impl Extents for [usize] {
    fn count(&self) -> usize {
        self.len()
    }

    fn extent(&self, index: usize) -> usize {
        self[index]
    }
}

/// Heights of the visible rows, in display order
pub struct RowExtents<'a> {
    table: &'a Table,
    visible: &'a [usize],
}

impl<'a> RowExtents<'a> {
    pub fn new(table: &'a Table, visible: &'a [usize]) -> Self {
        Self { table, visible }
    }
}

impl Extents for RowExtents<'_> {
    fn count(&self) -> usize {
        self.visible.len()
    }

    fn extent(&self, index: usize) -> usize {
        self.table.row_height(self.visible[index])
    }
}

/// Widths of all columns
pub struct ColumnExtents<'a> {
    table: &'a Table,
}

impl<'a> ColumnExtents<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self { table }
    }
}

impl Extents for ColumnExtents<'_> {
    fn count(&self) -> usize {
        self.table.column_count()
    }

    fn extent(&self, index: usize) -> usize {
        self.table.column_width(index)
    }
}

/// Which end of a [`TablePart`] the walk started from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Anchor {
    /// Walked forward from `first`
    #[default]
    First,
    /// Walked backward from `last`
    Last,
}

impl Anchor {
    fn step(self, index: usize, count: usize) -> Option<usize> {
        match self {
            Anchor::First => (index + 1 < count).then_some(index + 1),
            Anchor::Last => index.checked_sub(1),
        }
    }

    fn flipped(self) -> Self {
        match self {
            Anchor::First => Anchor::Last,
            Anchor::Last => Anchor::First,
        }
    }
}

/// Visible range of one axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TablePart {
    /// First visible index (inclusive)
    pub first: usize,
    /// Last visible index (inclusive)
    pub last: usize,
    /// Edge element that only partly fits, if any; always `first` or `last`
    pub truncated: Option<usize>,
    /// Visible cells of the truncated element
    pub size: usize,
    pub anchor: Anchor,
}

/// Visible sub-range of one field along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPart {
    /// Offset of the first visible line / character
    pub start: usize,
    /// Number of visible lines / characters
    pub size: usize,
}

impl TablePart {
    /// Walk from `start` towards the far end given by `anchor` until `window`
    /// cells are used up.
    pub fn update<E: Extents + ?Sized>(
        &mut self,
        extents: &E,
        start: usize,
        anchor: Anchor,
        window: usize,
    ) {
        let count = extents.count();
        self.anchor = anchor;
        self.truncated = None;
        self.size = 0;
        if count == 0 {
            self.first = 0;
            self.last = 0;
            return;
        }

        let start = start.min(count - 1);
        let mut precursor = 0;
        let mut index = start;
        let end = loop {
            let sum = precursor + extents.extent(index) + 1;
            // Exactly enough room left for the closing border
            if window.checked_sub(1) == Some(sum) {
                break index;
            }
            if sum >= window {
                self.truncated = Some(index);
                self.size = window.saturating_sub(precursor + 1);
                break index;
            }
            precursor = sum;
            match anchor.step(index, count) {
                Some(next) => index = next,
                None => break index,
            }
        };

        (self.first, self.last) = match anchor {
            Anchor::First => (start, end),
            Anchor::Last => (end, start),
        };
    }

    /// Re-walk after a window size change, flipping the anchor when the old
    /// one would leave the window stuck to the wrong edge.
    pub fn adjust_dir_on_resize<E: Extents + ?Sized>(&mut self, extents: &E, window: usize) {
        let start = match self.anchor {
            Anchor::First => self.first,
            Anchor::Last => self.last,
        };
        self.update(extents, start, self.anchor, window);
        self.settle(extents, window);
    }

    /// Scroll so that `index` is inside `[first, last]` and not truncated
    pub fn ensure_visible<E: Extents + ?Sized>(
        &mut self,
        extents: &E,
        index: usize,
        window: usize,
    ) {
        let count = extents.count();
        if count == 0 {
            return;
        }
        let index = index.min(count - 1);

        if self.is_index_before_first(index) {
            self.update(extents, index, Anchor::First, window);
            self.settle(extents, window);
        } else if self.is_index_after_last(index) {
            self.update(extents, index, Anchor::Last, window);
            self.settle(extents, window);
        }
    }

    /// Flip the anchor once if the walk ran off the far end while elements on
    /// the anchor side are still hidden.
    fn settle<E: Extents + ?Sized>(&mut self, extents: &E, window: usize) {
        let count = extents.count();
        if count == 0 {
            return;
        }
        let last_index = count - 1;
        let flip = match self.anchor {
            Anchor::Last => {
                self.first == 0
                    && self.is_fully_visible(0)
                    && !self.is_fully_visible(last_index)
            }
            Anchor::First => {
                self.last == last_index
                    && self.is_fully_visible(last_index)
                    && !self.is_fully_visible(0)
            }
        };
        if !flip {
            return;
        }

        let anchor = self.anchor.flipped();
        let start = match anchor {
            Anchor::First => 0,
            Anchor::Last => last_index,
        };
        tracing::trace!(?anchor, "viewport anchor flipped");
        self.update(extents, start, anchor, window);
    }

    /// Strictly before `first`, or the truncated `first` itself
    pub fn is_index_before_first(&self, index: usize) -> bool {
        index < self.first || (index == self.first && self.truncated == Some(index))
    }

    /// Strictly after `last`, or the truncated `last` itself
    pub fn is_index_after_last(&self, index: usize) -> bool {
        index > self.last || (index == self.last && self.truncated == Some(index))
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.first..=self.last).contains(&index)
    }

    pub fn is_fully_visible(&self, index: usize) -> bool {
        self.contains(index) && self.truncated != Some(index)
    }

    /// Leading element cut short: its tail is shown and its leading border
    /// falls outside the window
    pub fn is_first_truncated(&self) -> bool {
        self.truncated == Some(self.first) && self.first != self.last
    }

    /// Trailing element cut short: its head is shown and there is no closing
    /// border
    pub fn is_last_truncated(&self) -> bool {
        self.truncated == Some(self.last) && !self.is_first_truncated()
    }

    /// Visible sub-range of an element of extent `full` at `index`
    pub fn field_part(&self, index: usize, full: usize) -> FieldPart {
        if self.truncated != Some(index) {
            return FieldPart {
                start: 0,
                size: full,
            };
        }
        if index == self.first && self.first != self.last {
            // Leading edge: show the tail
            FieldPart {
                start: full.saturating_sub(self.size),
                size: self.size,
            }
        } else {
            FieldPart {
                start: 0,
                size: self.size,
            }
        }
    }

    /// Number of elements shown in full
    pub fn fully_visible_count(&self) -> usize {
        let span = self.last - self.first + 1;
        span - usize::from(self.truncated.is_some())
    }
}

/// Both axes plus the window they were computed for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableViewport {
    pub rows: TablePart,
    pub columns: TablePart,
    /// Table area height in cells
    pub height: usize,
    /// Table area width in cells
    pub width: usize,
}

/// Shape of a border junction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Junction {
    Corner,
    Tee,
    Cross,
}

/// Position of a border line within the drawn grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    Inner,
    End,
}

pub fn corner_glyph(is_row_extreme: bool, is_col_extreme: bool) -> Junction {
    match (is_row_extreme, is_col_extreme) {
        (true, true) => Junction::Corner,
        (true, false) | (false, true) => Junction::Tee,
        (false, false) => Junction::Cross,
    }
}

/// Box-drawing character where a horizontal border line (`row_edge`) meets a
/// vertical one (`col_edge`)
pub fn junction_char(row_edge: Edge, col_edge: Edge) -> char {
    match corner_glyph(row_edge != Edge::Inner, col_edge != Edge::Inner) {
        Junction::Corner => match (row_edge, col_edge) {
            (Edge::Start, Edge::Start) => '┌',
            (Edge::Start, _) => '┐',
            (_, Edge::Start) => '└',
            _ => '┘',
        },
        Junction::Tee => match (row_edge, col_edge) {
            (Edge::Start, _) => '┬',
            (Edge::End, _) => '┴',
            (_, Edge::Start) => '├',
            _ => '┤',
        },
        Junction::Cross => '┼',
    }
}
