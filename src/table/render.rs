//! Screen layout of the visible table
//!
//! Turns the two [`TablePart`]s into cell offsets: where each border line
//! sits, where each visible field starts, and which slice of the field is
//! shown. Painting is left to the caller.

use super::model::TableState;
use super::viewport::{Edge, Extents, FieldPart, TablePart};
use super::width::slice_columns;

/// One visible element along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Row or column index (visible-row space for rows)
    pub index: usize,
    /// Offset of the first content cell from the window edge
    pub offset: usize,
    pub part: FieldPart,
}

/// One border line along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub offset: usize,
    /// `Start` / `End` only for the table's own outer borders
    pub edge: Edge,
}

/// Slots and borders along one axis, in screen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisLayout {
    pub slots: Vec<Slot>,
    pub borders: Vec<Border>,
    /// Cells covered, borders included
    pub extent: usize,
}

impl AxisLayout {
    pub fn new<E: Extents + ?Sized>(part: &TablePart, extents: &E) -> Self {
        let count = extents.count();
        let mut layout = AxisLayout::default();
        if count == 0 {
            return layout;
        }

        let edge_after = |index: usize| {
            if index + 1 == count {
                Edge::End
            } else {
                Edge::Inner
            }
        };

        let mut offset = 0;
        if !part.is_first_truncated() {
            let edge = if part.first == 0 {
                Edge::Start
            } else {
                Edge::Inner
            };
            layout.borders.push(Border { offset, edge });
            offset += 1;
        }

        for index in part.first..=part.last {
            let field_part = part.field_part(index, extents.extent(index));
            layout.slots.push(Slot {
                index,
                offset,
                part: field_part,
            });
            offset += field_part.size;

            if index == part.last && part.is_last_truncated() {
                break;
            }
            layout.borders.push(Border {
                offset,
                edge: edge_after(index),
            });
            offset += 1;
        }

        layout.extent = offset;
        layout
    }

    /// Border at `offset`, if any
    pub fn border_at(&self, offset: usize) -> Option<Edge> {
        self.borders
            .iter()
            .find(|b| b.offset == offset)
            .map(|b| b.edge)
    }
}

/// Layout of both axes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableLayout {
    pub rows: AxisLayout,
    pub columns: AxisLayout,
}

/// Everything needed to paint one visible field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleCell<'a> {
    /// Visible row index
    pub row: usize,
    pub col: usize,
    pub text: &'a str,
    /// Screen position of the first shown character
    pub x: usize,
    pub y: usize,
    /// Lines shown
    pub row_part: FieldPart,
    /// Cells shown per line
    pub col_part: FieldPart,
    pub is_header: bool,
    pub is_cursor: bool,
}

impl VisibleCell<'_> {
    /// The shown slice of each shown line
    pub fn visible_lines(&self) -> impl Iterator<Item = String> + '_ {
        let col_part = self.col_part;
        self.text
            .split('\n')
            .skip(self.row_part.start)
            .take(self.row_part.size)
            .map(move |line| slice_columns(line, col_part.start, col_part.size))
    }
}

impl TableState {
    pub fn layout(&self) -> TableLayout {
        TableLayout {
            rows: AxisLayout::new(&self.viewport.rows, &self.row_extents()),
            columns: AxisLayout::new(&self.viewport.columns, &self.column_extents()),
        }
    }

    /// Every visible (row, column) pair with its screen position and slices
    pub fn visible_cells<'a>(&'a self, layout: &TableLayout) -> Vec<VisibleCell<'a>> {
        let mut cells = Vec::with_capacity(layout.rows.slots.len() * layout.columns.slots.len());
        for row in &layout.rows.slots {
            let is_header = self.is_header_row(row.index);
            for col in &layout.columns.slots {
                let is_cursor = self.cursor.visible
                    && self.cursor.row == row.index
                    && self.cursor.col == col.index;
                cells.push(VisibleCell {
                    row: row.index,
                    col: col.index,
                    text: self.field(row.index, col.index).text(),
                    x: col.offset,
                    y: row.offset,
                    row_part: row.part,
                    col_part: col.part,
                    is_header,
                    is_cursor,
                });
            }
        }
        cells
    }
}
