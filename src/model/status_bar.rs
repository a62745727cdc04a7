//! Status line model - segments and layout
//!
//! The bottom screen line: file name and transient messages on the left,
//! filter, sort and cursor position on the right.

use super::AppModel;
use crate::table::{display_width, slice_columns, SortDirection};

/// Identifier for status line segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    FileName,
    /// Transient messages (e.g., "reloaded", parse errors on reload)
    StatusMessage,
    /// Active filter (e.g., "/bergen (i)")
    Filter,
    /// Active sort (e.g., "col 2 ▼")
    Sort,
    /// Cursor position (e.g., "row 4/120 col 2/7")
    CursorPosition,
}

/// Position of a segment in the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Left,
    Right,
}

/// A single segment in the status line; empty text hides it
#[derive(Debug, Clone)]
pub struct StatusSegment {
    pub id: SegmentId,
    pub position: SegmentPosition,
    pub text: String,
}

impl StatusSegment {
    fn new(id: SegmentId) -> Self {
        let position = match id {
            SegmentId::FileName | SegmentId::StatusMessage => SegmentPosition::Left,
            SegmentId::Filter | SegmentId::Sort | SegmentId::CursorPosition => {
                SegmentPosition::Right
            }
        };
        Self {
            id,
            position,
            text: String::new(),
        }
    }
}

/// The complete status line state
#[derive(Debug, Clone)]
pub struct StatusBar {
    segments: Vec<StatusSegment>,
    /// Spaces between segments
    pub separator_spacing: usize,
    /// Spaces on each side
    pub padding: usize,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            segments: [
                SegmentId::FileName,
                SegmentId::StatusMessage,
                SegmentId::Filter,
                SegmentId::Sort,
                SegmentId::CursorPosition,
            ]
            .into_iter()
            .map(StatusSegment::new)
            .collect(),
            separator_spacing: 2,
            padding: 1,
        }
    }

    pub fn segment(&self, id: SegmentId) -> Option<&StatusSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    pub fn update_segment(&mut self, id: SegmentId, text: String) {
        if let Some(segment) = self.segments.iter_mut().find(|s| s.id == id) {
            segment.text = text;
        }
    }

    fn joined(&self, position: SegmentPosition) -> String {
        let separator = " ".repeat(self.separator_spacing);
        self.segments
            .iter()
            .filter(|s| s.position == position && !s.text.is_empty())
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// Lay the segments out on a line exactly `width` cells wide.
    ///
    /// Right segments win when space is short; the left side is cut.
    pub fn layout(&self, width: usize) -> String {
        let left = self.joined(SegmentPosition::Left);
        let right = self.joined(SegmentPosition::Right);
        let pad = " ".repeat(self.padding);

        let right = format!("{}{}", right, pad);
        let right_width = display_width(&right);
        let left_room = width.saturating_sub(right_width);

        let mut line = slice_columns(&format!("{}{}", pad, left), 0, left_room);
        let used = display_width(&line);
        line.extend(std::iter::repeat(' ').take(left_room - used));
        let skip = right_width.saturating_sub(width);
        line.push_str(&slice_columns(&right, skip, right_width - skip));
        line
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Synchronize status line segments with the table state
pub fn sync_status_bar(model: &mut AppModel) {
    let file_name = model.file_name.clone();
    let message = model.status_message.clone().unwrap_or_default();

    let state = &model.table;
    let filter = state.filter();
    let filter_text = if filter.is_active() {
        let mut text = format!("/{}", filter.text());
        if !filter.case_sensitive() {
            text.push_str(" (i)");
        }
        text
    } else if !model.case_sensitive {
        "(i)".to_string()
    } else {
        String::new()
    };

    let sort = state.sort();
    let sort_text = if sort.active {
        let arrow = match sort.direction {
            SortDirection::Forward => '▲',
            SortDirection::Backward => '▼',
        };
        format!("col {} {}", sort.column + 1, arrow)
    } else {
        String::new()
    };

    let position_text = if state.is_empty() {
        format!("row 0/0 col 0/{}", state.column_count())
    } else {
        format!(
            "row {}/{} col {}/{}",
            state.cursor.row + 1,
            state.visible_row_count(),
            state.cursor.col + 1,
            state.column_count()
        )
    };

    let bar = &mut model.status_bar;
    bar.update_segment(SegmentId::FileName, file_name);
    bar.update_segment(SegmentId::StatusMessage, message);
    bar.update_segment(SegmentId::Filter, filter_text);
    bar.update_segment(SegmentId::Sort, sort_text);
    bar.update_segment(SegmentId::CursorPosition, position_text);
}
