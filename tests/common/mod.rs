//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use csvview::messages::Msg;
use csvview::model::AppModel;
use csvview::table::{parse, TablePart, TableState};
use csvview::update::update;

/// Five rows, three columns; rows 1 and 3 hold a multi-line field
pub const FIXTURE: &str = "id,name,score\n\
    1,\"f11->\n\"\"d111\"\"\",7\n\
    2,plain,12345\n\
    \"multi\nline id\",x,3\n\
    abcdefghi,y,4\n";

/// Header plus five rows; "berry" appears in rows 2 to 4 only
pub const FRUIT: &str = "name,kind,price\n\
    apple,tree,3\n\
    strawberry,berry,5\n\
    blueberry,berry,7\n\
    raspberry,berry,6\n\
    banana,herb,2\n";

/// Unsorted numbers sharing a unit suffix
pub const PRICES: &str = "amount\n3 EUR\n0 EUR\n4 EUR\n1 EUR\n2 EUR\n";

pub fn test_state(content: &str, show_header: bool) -> TableState {
    TableState::new(parse(content, ',').unwrap(), show_header)
}

/// Model over `content` with the header detected, in an 80x24 terminal
pub fn test_model(content: &str) -> AppModel {
    let state = TableState::with_detected_header(parse(content, ',').unwrap());
    let mut model = AppModel::new(state);
    update(&mut model, Msg::resize(80, 24));
    model
}

/// `rows` x `cols` grid of short fields; every third row has a two-line
/// field in its first column
pub fn grid(rows: usize, cols: usize) -> String {
    let mut out = String::new();
    for r in 0..rows {
        let line: Vec<String> = (0..cols)
            .map(|c| {
                if c == 0 && r % 3 == 2 {
                    "\"ab\ncd\"".to_string()
                } else {
                    "x".repeat(1 + (r + c) % 4)
                }
            })
            .collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

pub fn column_text(state: &TableState, col: usize) -> Vec<String> {
    (0..state.visible_row_count())
        .map(|row| state.field(row, col).text().to_string())
        .collect()
}

/// `first <= index <= last` and `index` is not the truncated element
pub fn assert_fully_visible(part: &TablePart, index: usize, what: &str) {
    assert!(
        part.first <= index && index <= part.last,
        "{} {} outside {}..={}",
        what,
        index,
        part.first,
        part.last
    );
    assert_ne!(part.truncated, Some(index), "{} {} is truncated", what, index);
}

pub fn assert_cursor_visible(state: &TableState) {
    if state.is_empty() {
        return;
    }
    assert_fully_visible(&state.viewport.rows, state.cursor.row, "row");
    assert_fully_visible(&state.viewport.columns, state.cursor.col, "column");
}
