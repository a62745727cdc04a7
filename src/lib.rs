//! csvview - terminal CSV viewer
//!
//! The table core (`table`) is pure data plus viewport arithmetic. The rest
//! follows the Elm Architecture: `messages` feed `update`, which mutates the
//! `model` and returns `commands`; `view` paints the model into a frame that
//! the crossterm `runtime` writes out.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod export;
pub mod load;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod table;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ViewerConfig;
pub use messages::Msg;
pub use model::AppModel;
