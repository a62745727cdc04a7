//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::table::{SearchDirection, SortDirection, Table};

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Table messages (cursor motion, filter, sort, header)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMsg {
    // === Movement ===
    /// Move cursor one cell
    MoveCursor(Direction),
    PageUp,
    PageDown,
    FirstRow,
    LastRow,
    /// First column of the current row
    RowStart,
    /// Last column of the current row
    RowEnd,

    // === View ===
    /// Sort by `column`; the same column + direction again restores file order
    ToggleSort {
        column: usize,
        direction: SortDirection,
    },
    /// [`TableMsg::ToggleSort`] on the cursor's column
    ToggleSortAtCursor(SortDirection),
    /// Apply a filter string (empty clears the filter)
    SetFilter(String),
    ClearFilter,
    /// Jump to the next field containing the filter text
    FindNextMatch(SearchDirection),
    ToggleHeader,
    ToggleCaseSensitivity,
    /// Drop filter and sort and return to the first cell
    Reset,
}

/// Filter prompt messages (single-line text input)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMsg {
    /// Open the prompt, pre-filled with the active filter
    Open,
    InsertChar(char),
    DeleteBackward,
    /// Apply the prompt text as the filter and close
    Commit,
    /// Close without changing the filter
    Cancel,
}

/// App messages (window, file I/O, lifecycle)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Terminal resized (in character cells)
    Resize { cols: u16, rows: u16 },
    /// Re-read the file from disk
    Reload,
    /// Reload finished
    TableLoaded(Table),
    /// Reload failed; the old table stays
    LoadFailed(String),
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Table(TableMsg),
    Prompt(PromptMsg),
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn move_cursor(direction: Direction) -> Self {
        Msg::Table(TableMsg::MoveCursor(direction))
    }

    pub fn resize(cols: u16, rows: u16) -> Self {
        Msg::App(AppMsg::Resize { cols, rows })
    }
}
