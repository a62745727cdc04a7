//! Table data model types
//!
//! One owned row store plus an index mapping for the rows currently shown.
//! Filtering and sorting only ever rewrite the mapping.

use super::filter::{self, Filter};
use super::header;
use super::sort::{self, Sort, SortDirection};
use super::viewport::{Anchor, ColumnExtents, RowExtents, TableViewport};
use super::width::display_width;

/// One cell's text, with its display extent cached
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    text: String,
    /// Terminal cells taken by the longest line
    width: usize,
    /// Number of lines (an empty field still has one)
    height: usize,
}

impl Field {
    pub fn new(text: String) -> Self {
        let mut width = 0;
        let mut height = 0;
        for line in text.split('\n') {
            width = width.max(display_width(line));
            height += 1;
        }
        Self {
            text,
            width,
            height,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Iterate the field's lines (always at least one)
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// Rectangular matrix of fields with per-column widths and per-row heights
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Vec<Field>>,
    columns: usize,
    column_widths: Vec<usize>,
    row_heights: Vec<usize>,
}

impl Table {
    /// Empty table with storage reserved for `rows` rows of `columns` fields
    pub fn with_shape(rows: usize, columns: usize) -> Self {
        Self {
            rows: Vec::with_capacity(rows),
            columns,
            column_widths: vec![1; columns],
            row_heights: Vec::with_capacity(rows),
        }
    }

    /// Append a row, folding its fields into the width/height maxima.
    ///
    /// The row must have exactly `column_count()` fields.
    pub fn push_row(&mut self, row: Vec<Field>) {
        debug_assert_eq!(row.len(), self.columns, "ragged row");

        let mut height = 1;
        for (width, field) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(field.width());
            height = height.max(field.height());
        }
        self.row_heights.push(height);
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn field(&self, row: usize, col: usize) -> &Field {
        &self.rows[row][col]
    }

    pub fn row(&self, row: usize) -> &[Field] {
        &self.rows[row]
    }

    pub fn column_width(&self, col: usize) -> usize {
        self.column_widths[col]
    }

    pub fn row_height(&self, row: usize) -> usize {
        self.row_heights[row]
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    pub fn row_heights(&self) -> &[usize] {
        &self.row_heights
    }
}

/// Selection cursor in visible row / column space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
    /// False while an overlay (the filter prompt) has focus
    pub visible: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            visible: true,
        }
    }
}

/// Interactive state over one loaded table
#[derive(Debug, Clone)]
pub struct TableState {
    table: Table,
    /// Whether row 0 is treated as a header
    show_header: bool,
    /// Indices into `table` of the rows currently shown, in display order
    visible: Vec<usize>,
    filter: Filter,
    sort: Sort,
    pub cursor: Cursor,
    pub viewport: TableViewport,
}

impl TableState {
    pub fn new(table: Table, show_header: bool) -> Self {
        let visible = (0..table.row_count()).collect();
        Self {
            table,
            show_header,
            visible,
            filter: Filter::default(),
            sort: Sort::default(),
            cursor: Cursor::default(),
            viewport: TableViewport::default(),
        }
    }

    /// Build state with the header flag decided by [`header::has_header`]
    pub fn with_detected_header(table: Table) -> Self {
        let show_header = header::has_header(&table);
        tracing::debug!(show_header, "header detection");
        Self::new(table, show_header)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn show_header(&self) -> bool {
        self.show_header
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }

    /// Visible row mapping (indices into the full table)
    pub fn visible_rows(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_row_count(&self) -> usize {
        self.visible.len()
    }

    pub fn column_count(&self) -> usize {
        self.table.column_count()
    }

    /// No visible cells at all (empty file, or a filter matched nothing)
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() || self.table.column_count() == 0
    }

    /// Field at a visible row
    pub fn field(&self, row: usize, col: usize) -> &Field {
        self.table.field(self.visible[row], col)
    }

    /// Height of a visible row
    pub fn row_height(&self, row: usize) -> usize {
        self.table.row_height(self.visible[row])
    }

    /// Whether a visible row is the header row
    pub fn is_header_row(&self, row: usize) -> bool {
        self.show_header && self.visible.get(row) == Some(&0)
    }

    pub(crate) fn row_extents(&self) -> RowExtents<'_> {
        RowExtents::new(&self.table, &self.visible)
    }

    pub(crate) fn column_extents(&self) -> ColumnExtents<'_> {
        ColumnExtents::new(&self.table)
    }

    /// Drop filter and sort, show every row in file order and put the cursor
    /// on the first cell
    pub fn reset(&mut self) {
        self.filter = Filter::default();
        self.sort = Sort::default();
        self.visible = (0..self.table.row_count()).collect();
        self.cursor.row = 0;
        self.cursor.col = 0;
        self.reset_viewport();
    }

    /// Replace the current filter and recompute the visible rows.
    ///
    /// An empty filter string is a [`reset`](Self::reset): sort is dropped
    /// too and rows return to file order. Otherwise the cursor lands on the
    /// first matching field, or on (0, 0) if nothing matched.
    pub fn apply_filter(&mut self, filter: Filter) {
        if !filter.is_active() {
            tracing::debug!("empty filter, view reset");
            self.reset();
            return;
        }
        self.filter = filter;
        self.rebuild_visible();

        let (row, col) = filter::first_match(self, &self.filter).unwrap_or((0, 0));
        self.cursor.row = row;
        self.cursor.col = col;
        tracing::debug!(
            filter = self.filter.text(),
            visible = self.visible.len(),
            "filter applied"
        );
        self.reset_viewport();
    }

    /// Toggle sorting: the active column + direction switches sorting off,
    /// anything else (re)sorts by that column.
    pub fn apply_sort(&mut self, column: usize, direction: SortDirection) {
        if column >= self.table.column_count() {
            return;
        }
        self.sort = self.sort.toggled(column, direction);
        self.rebuild_visible();
        self.clamp_cursor();
        self.reset_viewport();
    }

    /// Switch header treatment of row 0; filter and sort are re-applied
    pub fn set_show_header(&mut self, show_header: bool) {
        if self.show_header == show_header {
            return;
        }
        self.show_header = show_header;
        self.rebuild_visible();
        self.clamp_cursor();
        self.reset_viewport();
    }

    /// Swap in a freshly parsed table in one step.
    ///
    /// Filter and sort settings are kept and re-applied to the new rows.
    pub fn replace_table(&mut self, table: Table, show_header: bool) {
        self.table = table;
        self.show_header = show_header;
        if self.sort.column >= self.table.column_count() {
            self.sort = Sort::default();
        }
        self.rebuild_visible();
        self.cursor.row = 0;
        self.cursor.col = 0;
        self.reset_viewport();
    }

    /// Recompute the mapping: filter first, then sort what survived
    fn rebuild_visible(&mut self) {
        self.visible = if self.filter.is_active() {
            filter::filtered_rows(&self.table, &self.filter, self.show_header)
        } else {
            (0..self.table.row_count()).collect()
        };

        if self.sort.active {
            let skip = usize::from(self.show_header && self.visible.first() == Some(&0));
            sort::sort_rows(
                &self.table,
                &mut self.visible[skip..],
                self.sort.column,
                self.sort.direction,
            );
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor.row = self.cursor.row.min(self.visible.len().saturating_sub(1));
        self.cursor.col = self
            .cursor
            .col
            .min(self.table.column_count().saturating_sub(1));
    }

    /// Re-anchor the row window at the top, re-walk the columns, then bring
    /// the cursor into view
    fn reset_viewport(&mut self) {
        let rows = RowExtents::new(&self.table, &self.visible);
        let columns = ColumnExtents::new(&self.table);
        let (height, width) = (self.viewport.height, self.viewport.width);
        self.viewport.rows.update(&rows, 0, Anchor::First, height);
        self.viewport.columns.adjust_dir_on_resize(&columns, width);
        self.ensure_cursor_visible();
    }

    /// Scroll whichever axis needs it so the cursor cell is fully shown
    pub fn ensure_cursor_visible(&mut self) {
        let rows = RowExtents::new(&self.table, &self.visible);
        let columns = ColumnExtents::new(&self.table);
        let (height, width) = (self.viewport.height, self.viewport.width);
        self.viewport
            .rows
            .ensure_visible(&rows, self.cursor.row, height);
        self.viewport
            .columns
            .ensure_visible(&columns, self.cursor.col, width);
    }

    /// New window size in character cells (table area only)
    pub fn resize(&mut self, height: usize, width: usize) {
        self.viewport.height = height;
        self.viewport.width = width;

        let rows = RowExtents::new(&self.table, &self.visible);
        let columns = ColumnExtents::new(&self.table);
        self.viewport.rows.adjust_dir_on_resize(&rows, height);
        self.viewport.columns.adjust_dir_on_resize(&columns, width);
        self.ensure_cursor_visible();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse;

    fn state(content: &str, show_header: bool) -> TableState {
        TableState::new(parse(content, ',').unwrap(), show_header)
    }

    fn visible_first_column(state: &TableState) -> Vec<String> {
        (0..state.visible_row_count())
            .map(|r| state.field(r, 0).text().to_string())
            .collect()
    }

    #[test]
    fn test_field_metrics() {
        let field = Field::new("ab\nabcd\n".to_string());
        assert_eq!(field.width(), 4);
        assert_eq!(field.height(), 3);
        assert_eq!(field.lines().collect::<Vec<_>>(), vec!["ab", "abcd", ""]);

        let empty = Field::new(String::new());
        assert_eq!(empty.width(), 0);
        assert_eq!(empty.height(), 1);
    }

    #[test]
    fn test_push_row_updates_maxima() {
        let mut table = Table::with_shape(2, 2);
        table.push_row(vec![Field::new("abc".into()), Field::new(String::new())]);
        table.push_row(vec![Field::new("a\nb".into()), Field::new("xy".into())]);

        assert_eq!(table.column_widths(), &[3, 2]);
        assert_eq!(table.row_heights(), &[1, 2]);
    }

    #[test]
    fn test_new_state_identity_mapping() {
        let state = state("a\nb\nc\n", false);
        assert_eq!(state.visible_rows(), &[0, 1, 2]);
        assert_eq!(state.cursor, Cursor::default());
    }

    #[test]
    fn test_filter_keeps_header_and_matches() {
        let mut state = state(
            "name,city\nann,oslo\nbob,bergen\ncid,bergenhus\ndan,bergen\neve,rome\n",
            true,
        );
        state.apply_filter(Filter::new("bergen", true));

        assert_eq!(state.visible_row_count(), 4);
        assert_eq!(state.visible_rows(), &[0, 2, 3, 4]);
        assert!(state.is_header_row(0));
        // Cursor on the first match, not the header
        assert_eq!((state.cursor.row, state.cursor.col), (1, 1));
    }

    #[test]
    fn test_filter_without_matches_drops_header() {
        let mut state = state("name\nann\nbob\n", true);
        state.apply_filter(Filter::new("zzz", true));

        assert_eq!(state.visible_row_count(), 0);
        assert!(state.is_empty());
        assert_eq!((state.cursor.row, state.cursor.col), (0, 0));
    }

    #[test]
    fn test_empty_filter_resets() {
        let mut state = state("a\nb\nc\n", false);
        state.apply_filter(Filter::new("b", true));
        assert_eq!(state.visible_rows(), &[1]);

        state.apply_filter(Filter::new("", true));
        assert_eq!(state.visible_rows(), &[0, 1, 2]);
        assert!(!state.filter().is_active());
    }

    #[test]
    fn test_empty_filter_drops_sort() {
        let mut state = state("3\n1\n2\n", false);
        state.apply_sort(0, SortDirection::Forward);
        state.apply_filter(Filter::new("1", true));
        assert_eq!(state.visible_rows(), &[1]);

        state.apply_filter(Filter::new("", true));
        assert_eq!(state.visible_rows(), &[0, 1, 2]);
        assert!(!state.sort().active);
        assert_eq!((state.cursor.row, state.cursor.col), (0, 0));
    }

    #[test]
    fn test_sort_then_filter_keeps_order() {
        let mut state = state("n\n3\n1\n2\n10\n", true);
        state.apply_sort(0, SortDirection::Forward);
        assert_eq!(visible_first_column(&state), vec!["n", "1", "2", "3", "10"]);

        state.apply_filter(Filter::new("1", true));
        assert_eq!(visible_first_column(&state), vec!["n", "1", "10"]);
    }

    #[test]
    fn test_sort_toggle_restores_file_order() {
        let mut state = state("3\n1\n2\n", false);
        state.apply_sort(0, SortDirection::Forward);
        assert_eq!(state.visible_rows(), &[1, 2, 0]);

        state.apply_sort(0, SortDirection::Forward);
        assert_eq!(state.visible_rows(), &[0, 1, 2]);
        assert!(!state.sort().active);
    }

    #[test]
    fn test_sort_out_of_range_column_ignored() {
        let mut state = state("3\n1\n", false);
        state.apply_sort(5, SortDirection::Forward);
        assert!(!state.sort().active);
    }

    #[test]
    fn test_toggle_header_reapplies_sort() {
        let mut state = state("b\nc\na\n", false);
        state.apply_sort(0, SortDirection::Forward);
        assert_eq!(visible_first_column(&state), vec!["a", "b", "c"]);

        state.set_show_header(true);
        assert_eq!(visible_first_column(&state), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_replace_table_reapplies_filter() {
        let mut state = state("a\nb\n", false);
        state.apply_filter(Filter::new("x", true));
        assert!(state.is_empty());

        state.replace_table(parse("x1\ny\nx2\n", ',').unwrap(), false);
        assert_eq!(state.visible_rows(), &[0, 2]);
        assert_eq!(state.cursor.row, 0);
    }
}
