//! Terminal event to message mapping
//!
//! Table keys (vi-style letters plus the usual navigation keys):
//!
//! | key                  | action                         |
//! |----------------------|--------------------------------|
//! | arrows, `hjkl`       | move one cell                  |
//! | PgUp/PgDn, `^B`/`^F` | page                           |
//! | `g` / `G`            | first / last row               |
//! | Home/End, `0` / `$`  | first / last column            |
//! | `/`                  | filter prompt                  |
//! | `n` / `N`            | next / previous match          |
//! | `c`                  | clear filter                   |
//! | `s` / `S`            | sort column ascending / descending |
//! | `H`                  | toggle header                  |
//! | `i`                  | toggle case sensitivity        |
//! | `r` / `R`            | reset view / reload file       |
//! | `q`, Esc, `^C`       | quit                           |
//!
//! While the filter prompt is open every key goes to the prompt.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::messages::{AppMsg, Direction, Msg, PromptMsg, TableMsg};
use crate::table::{SearchDirection, SortDirection};

/// Map a terminal event to a message, if it means anything
pub fn event_to_msg(event: Event, prompt_open: bool) -> Option<Msg> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => key_to_msg(key, prompt_open),
        Event::Resize(cols, rows) => Some(Msg::resize(cols, rows)),
        _ => None,
    }
}

pub fn key_to_msg(key: KeyEvent, prompt_open: bool) -> Option<Msg> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Msg::App(AppMsg::Quit));
    }
    if prompt_open {
        return prompt_key(key.code).map(Msg::Prompt);
    }

    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Msg::move_cursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Msg::move_cursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Msg::move_cursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Msg::move_cursor(Direction::Right),
        KeyCode::Char('b') if ctrl => Msg::Table(TableMsg::PageUp),
        KeyCode::Char('f') if ctrl => Msg::Table(TableMsg::PageDown),
        KeyCode::PageUp => Msg::Table(TableMsg::PageUp),
        KeyCode::PageDown => Msg::Table(TableMsg::PageDown),
        KeyCode::Char('g') => Msg::Table(TableMsg::FirstRow),
        KeyCode::Char('G') => Msg::Table(TableMsg::LastRow),
        KeyCode::Home | KeyCode::Char('0') => Msg::Table(TableMsg::RowStart),
        KeyCode::End | KeyCode::Char('$') => Msg::Table(TableMsg::RowEnd),

        KeyCode::Char('/') => Msg::Prompt(PromptMsg::Open),
        KeyCode::Char('n') => Msg::Table(TableMsg::FindNextMatch(SearchDirection::Forward)),
        KeyCode::Char('N') => Msg::Table(TableMsg::FindNextMatch(SearchDirection::Backward)),
        KeyCode::Char('c') => Msg::Table(TableMsg::ClearFilter),
        KeyCode::Char('s') => Msg::Table(TableMsg::ToggleSortAtCursor(SortDirection::Forward)),
        KeyCode::Char('S') => Msg::Table(TableMsg::ToggleSortAtCursor(SortDirection::Backward)),
        KeyCode::Char('H') => Msg::Table(TableMsg::ToggleHeader),
        KeyCode::Char('i') => Msg::Table(TableMsg::ToggleCaseSensitivity),
        KeyCode::Char('r') => Msg::Table(TableMsg::Reset),
        KeyCode::Char('R') => Msg::App(AppMsg::Reload),

        KeyCode::Char('q') | KeyCode::Esc => Msg::App(AppMsg::Quit),
        _ => return None,
    };
    Some(msg)
}

fn prompt_key(code: KeyCode) -> Option<PromptMsg> {
    match code {
        KeyCode::Enter => Some(PromptMsg::Commit),
        KeyCode::Esc => Some(PromptMsg::Cancel),
        KeyCode::Backspace => Some(PromptMsg::DeleteBackward),
        KeyCode::Char(ch) => Some(PromptMsg::InsertChar(ch)),
        _ => None,
    }
}
