//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

/// Side effect requested by `update`, carried out by the runtime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Repaint the screen
    Redraw,
    /// Read and parse `path`; the result comes back as
    /// `AppMsg::TableLoaded` or `AppMsg::LoadFailed`
    LoadFile { path: PathBuf, delimiter: char },
    /// Leave the event loop
    Quit,
}

impl Cmd {
    pub fn is_quit(&self) -> bool {
        matches!(self, Cmd::Quit)
    }
}
