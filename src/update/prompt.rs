//! Filter prompt handlers
//!
//! While the prompt is open the table cursor is hidden; committing hands the
//! text to the table as a new filter.

use crate::commands::Cmd;
use crate::messages::{PromptMsg, TableMsg};
use crate::model::{AppModel, FilterPrompt};

use super::table::update_table;

pub fn update_prompt(model: &mut AppModel, msg: PromptMsg) -> Option<Cmd> {
    match msg {
        PromptMsg::Open => {
            model.prompt = Some(FilterPrompt::new(model.table.filter().text()));
            model.table.cursor.visible = false;
        }
        PromptMsg::InsertChar(ch) => model.prompt.as_mut()?.insert_char(ch),
        PromptMsg::DeleteBackward => model.prompt.as_mut()?.delete_backward(),
        PromptMsg::Commit => {
            let text = model.prompt.take()?.into_text();
            model.table.cursor.visible = true;
            return update_table(model, TableMsg::SetFilter(text));
        }
        PromptMsg::Cancel => {
            model.prompt.take()?;
            model.table.cursor.visible = true;
        }
    }
    Some(Cmd::Redraw)
}
