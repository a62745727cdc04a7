//! Application model - the complete state of the viewer
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod prompt;
pub mod status_bar;

pub use prompt::FilterPrompt;
pub use status_bar::{sync_status_bar, SegmentId, SegmentPosition, StatusBar, StatusSegment};

use std::path::PathBuf;

use crate::config::HeaderMode;
use crate::table::TableState;

/// Lines reserved below the table for the status line / filter prompt
pub const STATUS_LINE_HEIGHT: usize = 1;

/// Where the table came from, kept for reloading
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub path: PathBuf,
    pub delimiter: char,
    pub header: HeaderMode,
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    pub table: TableState,
    /// Filter prompt; while open it has keyboard focus
    pub prompt: Option<FilterPrompt>,
    pub source: Option<Source>,
    /// Shown in the status line
    pub file_name: String,
    /// Case sensitivity for the next filter
    pub case_sensitive: bool,
    /// Rows kept from the previous page when paging
    pub page_overlap: usize,
    /// Transient status message, cleared by the next key
    pub status_message: Option<String>,
    pub status_bar: StatusBar,
    /// Terminal size in cells (columns, rows)
    pub window_size: (u16, u16),
}

impl AppModel {
    pub fn new(table: TableState) -> Self {
        let case_sensitive = table.filter().case_sensitive();
        let mut model = Self {
            table,
            prompt: None,
            source: None,
            file_name: "[stdin]".to_string(),
            case_sensitive,
            page_overlap: 0,
            status_message: None,
            status_bar: StatusBar::new(),
            window_size: (0, 0),
        };
        sync_status_bar(&mut model);
        model
    }

    /// Attach the file the table was read from
    pub fn with_source(mut self, source: Source) -> Self {
        self.file_name = source
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| source.path.display().to_string());
        self.source = Some(source);
        sync_status_bar(&mut self);
        self
    }

    /// Table area (height, width) in cells: the window less the status line
    pub fn table_area(&self) -> (usize, usize) {
        let (cols, rows) = self.window_size;
        (
            (rows as usize).saturating_sub(STATUS_LINE_HEIGHT),
            cols as usize,
        )
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.window_size = (cols, rows);
        let (height, width) = self.table_area();
        self.table.resize(height, width);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn is_prompt_open(&self) -> bool {
        self.prompt.is_some()
    }
}
