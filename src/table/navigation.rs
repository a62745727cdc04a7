//! Cursor navigation
//!
//! Every movement ends in `ensure_cursor_visible`, so the cursor cell is
//! always inside both viewport parts and never the truncated edge.

use super::model::TableState;

/// Direction for find-next-match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

impl TableState {
    /// Move the cursor by delta (clamped to the table)
    pub fn move_cursor(&mut self, delta_row: isize, delta_col: isize) {
        if self.is_empty() {
            return;
        }
        let max_row = self.visible_row_count() - 1;
        let max_col = self.column_count() - 1;
        self.cursor.row = self.cursor.row.saturating_add_signed(delta_row).min(max_row);
        self.cursor.col = self.cursor.col.saturating_add_signed(delta_col).min(max_col);
        self.ensure_cursor_visible();
    }

    pub fn move_to_first_row(&mut self) {
        self.cursor.row = 0;
        self.ensure_cursor_visible();
    }

    pub fn move_to_last_row(&mut self) {
        self.cursor.row = self.visible_row_count().saturating_sub(1);
        self.ensure_cursor_visible();
    }

    /// First column in the current row
    pub fn move_to_row_start(&mut self) {
        self.cursor.col = 0;
        self.ensure_cursor_visible();
    }

    /// Last column in the current row
    pub fn move_to_row_end(&mut self) {
        self.cursor.col = self.column_count().saturating_sub(1);
        self.ensure_cursor_visible();
    }

    /// Rows moved by one page: the fully visible rows less `overlap`
    fn page_size(&self, overlap: usize) -> usize {
        if self.is_empty() {
            return 1;
        }
        self.viewport
            .rows
            .fully_visible_count()
            .saturating_sub(overlap)
            .max(1)
    }

    pub fn page_down(&mut self, overlap: usize) {
        let page = self.page_size(overlap);
        self.move_cursor(page as isize, 0);
    }

    pub fn page_up(&mut self, overlap: usize) {
        let page = self.page_size(overlap);
        self.move_cursor(-(page as isize), 0);
    }

    /// Move to the next field (row-major, wrapping) matching the active
    /// filter. Returns false when there is no filter or no match.
    pub fn find_next_match(&mut self, direction: SearchDirection) -> bool {
        if self.is_empty() || !self.filter().is_active() {
            return false;
        }

        let columns = self.column_count();
        let total = self.visible_row_count() * columns;
        let current = self.cursor.row * columns + self.cursor.col;

        let found = (1..=total)
            .map(|step| match direction {
                SearchDirection::Forward => (current + step) % total,
                SearchDirection::Backward => (current + total - step) % total,
            })
            .map(|cell| (cell / columns, cell % columns))
            .find(|&(row, col)| {
                !self.is_header_row(row) && self.filter().matches(self.field(row, col).text())
            });

        match found {
            Some((row, col)) => {
                self.cursor.row = row;
                self.cursor.col = col;
                self.ensure_cursor_visible();
                true
            }
            None => false,
        }
    }
}
