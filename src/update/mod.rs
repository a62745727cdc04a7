//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod prompt;
mod table;

use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg};
use crate::model::{sync_status_bar, AppModel};

pub use app::update_app;
pub use prompt::update_prompt;
pub use table::update_table;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    tracing::trace!(target: "message", msg = %msg_type_name(&msg), "processing");

    // Any user input dismisses the previous transient message
    if matches!(msg, Msg::Table(_) | Msg::Prompt(_)) {
        model.status_message = None;
    }

    let result = match msg {
        Msg::Table(m) => table::update_table(model, m),
        Msg::Prompt(m) => prompt::update_prompt(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    sync_status_bar(model);
    result
}

/// Short display name for a message, without payloads like loaded tables
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Table(m) => format!("Table::{:?}", m),
        Msg::Prompt(m) => format!("Prompt::{:?}", m),
        Msg::App(AppMsg::TableLoaded(_)) => "App::TableLoaded".to_string(),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
