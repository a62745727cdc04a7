//! Event loop
//!
//! One blocking read per iteration; each message is processed to completion,
//! including any command it triggers, before the next read.

use std::ops::ControlFlow;

use anyhow::Result;
use crossterm::event;

use crate::commands::Cmd;
use crate::load::read_table;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::update::update;
use crate::view::render;

use super::input::event_to_msg;
use super::terminal::{TerminalError, TerminalSession};

/// Run the viewer until the user quits
pub fn run(model: &mut AppModel) -> Result<()> {
    let mut session = TerminalSession::enter(&format!("csvview - {}", model.file_name))?;

    let (cols, rows) = session.size()?;
    dispatch(model, Msg::resize(cols, rows));

    loop {
        session.draw(&render(model))?;

        let event = event::read().map_err(|source| TerminalError::ReadEvent { source })?;
        let Some(msg) = event_to_msg(event, model.is_prompt_open()) else {
            continue;
        };
        if dispatch(model, msg).is_break() {
            tracing::info!("quit");
            return Ok(());
        }
    }
}

/// Apply `msg` and carry out the commands it produces
pub fn dispatch(model: &mut AppModel, msg: Msg) -> ControlFlow<()> {
    let mut next = update(model, msg);
    while let Some(cmd) = next.take() {
        next = match cmd {
            Cmd::None | Cmd::Redraw => None,
            Cmd::Quit => return ControlFlow::Break(()),
            Cmd::LoadFile { path, delimiter } => {
                let msg = match read_table(&path, delimiter) {
                    Ok(table) => AppMsg::TableLoaded(table),
                    Err(e) => AppMsg::LoadFailed(format!("{:#}", e)),
                };
                update(model, Msg::App(msg))
            }
        };
    }
    ControlFlow::Continue(())
}
