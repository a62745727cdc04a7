//! Runtime module - crossterm integration
//!
//! - `app` - event loop and command execution
//! - `input` - terminal event to message mapping
//! - `terminal` - raw mode / alternate screen session and frame output

pub mod app;
pub mod input;
pub mod terminal;

pub use app::{dispatch, run};
pub use terminal::{TerminalError, TerminalSession};
