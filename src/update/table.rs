//! Table message handlers (navigation, filter, sort, header)

use crate::commands::Cmd;
use crate::messages::{Direction, TableMsg};
use crate::model::AppModel;
use crate::table::Filter;

/// Handle table messages
pub fn update_table(model: &mut AppModel, msg: TableMsg) -> Option<Cmd> {
    let state = &mut model.table;
    match msg {
        TableMsg::MoveCursor(direction) => {
            let (rows, cols) = match direction {
                Direction::Up => (-1, 0),
                Direction::Down => (1, 0),
                Direction::Left => (0, -1),
                Direction::Right => (0, 1),
            };
            state.move_cursor(rows, cols);
        }
        TableMsg::PageUp => state.page_up(model.page_overlap),
        TableMsg::PageDown => state.page_down(model.page_overlap),
        TableMsg::FirstRow => state.move_to_first_row(),
        TableMsg::LastRow => state.move_to_last_row(),
        TableMsg::RowStart => state.move_to_row_start(),
        TableMsg::RowEnd => state.move_to_row_end(),

        TableMsg::ToggleSort { column, direction } => state.apply_sort(column, direction),
        TableMsg::ToggleSortAtCursor(direction) => {
            let column = state.cursor.col;
            state.apply_sort(column, direction);
        }

        TableMsg::SetFilter(text) => {
            state.apply_filter(Filter::new(text, model.case_sensitive));
            if state.filter().is_active() && state.is_empty() {
                model.set_status("no matches");
            }
        }
        TableMsg::ClearFilter => {
            state.apply_filter(Filter::new(String::new(), model.case_sensitive));
        }
        TableMsg::FindNextMatch(direction) => {
            if !state.filter().is_active() {
                model.set_status("no filter");
            } else if !state.find_next_match(direction) {
                model.set_status("no matches");
            }
        }

        TableMsg::ToggleHeader => {
            let show = !state.show_header();
            state.set_show_header(show);
            tracing::debug!(show_header = show, "header toggled");
        }
        TableMsg::ToggleCaseSensitivity => {
            model.case_sensitive = !model.case_sensitive;
            if state.filter().is_active() {
                let filter = state.filter().with_case_sensitive(model.case_sensitive);
                state.apply_filter(filter);
            }
            model.set_status(if model.case_sensitive {
                "case-sensitive"
            } else {
                "case-insensitive"
            });
        }
        TableMsg::Reset => state.reset(),
    }
    Some(Cmd::Redraw)
}
