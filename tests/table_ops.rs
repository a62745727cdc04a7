//! Table tests - parsing, filtering, sorting, header handling

mod common;

use common::{column_text, test_model, test_state, FIXTURE, FRUIT, PRICES};
use csvview::messages::{Msg, PromptMsg, TableMsg};
use csvview::table::{display_width, has_header, parse, Filter, SortDirection};
use csvview::update::update;

// ========================================================================
// Parsing
// ========================================================================

#[test]
fn test_fixture_shape() {
    let table = parse(FIXTURE, ',').unwrap();

    assert_eq!(table.column_widths(), &[9, 6, 5]);
    assert_eq!(table.row_heights(), &[1, 2, 1, 2, 1]);
    assert_eq!(table.field(1, 1).text(), "f11->\n\"d111\"");
    assert_eq!(table.field(3, 0).text(), "multi\nline id");
}

#[test]
fn test_field_metrics_match_text() {
    let table = parse(FIXTURE, ',').unwrap();
    for row in 0..table.row_count() {
        for col in 0..table.column_count() {
            let field = table.field(row, col);
            let lines: Vec<&str> = field.text().split('\n').collect();
            let widest = lines.iter().map(|l| display_width(l)).max().unwrap();
            assert_eq!(field.width(), widest);
            assert_eq!(field.height(), lines.len());
        }
    }
}

#[test]
fn test_wide_characters_measured_in_cells() {
    let table = parse("日本,x\nab,y\n", ',').unwrap();
    assert_eq!(table.column_widths(), &[4, 1]);

    let table = parse("\"🙂\nok\",x\n", ',').unwrap();
    assert_eq!(table.field(0, 0).width(), 2);
    assert_eq!(table.row_heights(), &[2]);
}

#[test]
fn test_malformed_input_is_rejected() {
    assert!(parse("a,b\n1,2,3\n", ',').is_err());
    assert!(parse("\"a\"b,c\n", ',').is_err());
}

// ========================================================================
// Filtering
// ========================================================================

#[test]
fn test_filter_keeps_header_and_matching_rows() {
    let mut state = test_state(FRUIT, true);
    state.apply_filter(Filter::new("berry", true));

    assert_eq!(state.visible_row_count(), 4);
    assert_eq!(
        column_text(&state, 0),
        vec!["name", "strawberry", "blueberry", "raspberry"]
    );
    // Cursor lands on the first match, below the header
    assert_eq!((state.cursor.row, state.cursor.col), (1, 0));
}

#[test]
fn test_filter_with_no_match_is_not_an_error() {
    let mut state = test_state(FRUIT, true);
    state.apply_filter(Filter::new("kiwi", true));

    assert_eq!(state.visible_row_count(), 0);
    assert!(state.is_empty());
}

#[test]
fn test_empty_filter_clears() {
    let mut state = test_state(FRUIT, true);
    state.apply_filter(Filter::new("berry", true));
    state.apply_filter(Filter::new("", true));

    assert_eq!(state.visible_row_count(), 6);
    assert!(!state.filter().is_active());
}

#[test]
fn test_clear_filter_resets_sort_too() {
    let mut model = test_model(FRUIT);
    model.table.set_show_header(true);
    update(
        &mut model,
        Msg::Table(TableMsg::ToggleSort {
            column: 2,
            direction: SortDirection::Backward,
        }),
    );
    update(&mut model, Msg::Table(TableMsg::SetFilter("berry".into())));
    assert_eq!(
        column_text(&model.table, 0),
        vec!["name", "blueberry", "raspberry", "strawberry"]
    );

    update(&mut model, Msg::Table(TableMsg::ClearFilter));
    assert_eq!(
        column_text(&model.table, 0),
        vec!["name", "apple", "strawberry", "blueberry", "raspberry", "banana"]
    );
    assert!(!model.table.sort().active);
}

#[test]
fn test_filter_through_prompt() {
    let mut model = test_model(FRUIT);
    model.table.set_show_header(true);
    update(&mut model, Msg::Prompt(PromptMsg::Open));
    for ch in "BERRY".chars() {
        update(&mut model, Msg::Prompt(PromptMsg::InsertChar(ch)));
    }
    update(&mut model, Msg::Prompt(PromptMsg::Commit));
    assert_eq!(model.table.visible_row_count(), 0);
    assert_eq!(model.status_message.as_deref(), Some("no matches"));

    update(&mut model, Msg::Table(TableMsg::ToggleCaseSensitivity));
    assert_eq!(model.table.visible_row_count(), 4);
    assert!(!model.is_prompt_open());
    assert!(model.table.cursor.visible);
}

// ========================================================================
// Sorting
// ========================================================================

#[test]
fn test_sort_backward_then_toggle_back() {
    let mut state = test_state(PRICES, true);
    let original = column_text(&state, 0);

    state.apply_sort(0, SortDirection::Backward);
    assert_eq!(
        column_text(&state, 0),
        vec!["amount", "4 EUR", "3 EUR", "2 EUR", "1 EUR", "0 EUR"]
    );

    state.apply_sort(0, SortDirection::Backward);
    assert_eq!(column_text(&state, 0), original);
}

#[test]
fn test_sort_forward_unit_suffix_is_numeric() {
    let mut state = test_state("v\n10 kg\n9 kg\n100 kg\n", true);
    state.apply_sort(0, SortDirection::Forward);
    assert_eq!(column_text(&state, 0), vec!["v", "9 kg", "10 kg", "100 kg"]);
}

#[test]
fn test_sort_other_column_changes_order() {
    let mut state = test_state(FRUIT, true);
    state.apply_sort(2, SortDirection::Forward);
    let by_price = column_text(&state, 0);
    state.apply_sort(0, SortDirection::Forward);
    let by_name = column_text(&state, 0);

    assert_eq!(by_price[1], "banana");
    assert_eq!(by_name[1], "apple");
    assert_ne!(by_price, by_name);
}

#[test]
fn test_sort_applies_within_filter() {
    let mut state = test_state(FRUIT, true);
    state.apply_filter(Filter::new("berry", true));
    state.apply_sort(2, SortDirection::Backward);

    assert_eq!(
        column_text(&state, 0),
        vec!["name", "blueberry", "raspberry", "strawberry"]
    );

    state.reset();
    assert_eq!(state.visible_row_count(), 6);
    assert!(!state.sort().active);
}

#[test]
fn test_sort_without_header_moves_first_row() {
    let mut state = test_state(PRICES, false);
    state.apply_sort(0, SortDirection::Forward);
    // "amount" is not numeric, so the column sorts lexicographically
    assert_eq!(column_text(&state, 0)[5], "amount");
}

// ========================================================================
// Header detection
// ========================================================================

#[test]
fn test_header_detected_over_numeric_columns() {
    let table = parse("id,price,qty\n1,2.50,3\n2,10.00,4\n3,7.25,1\n", ',').unwrap();
    assert!(has_header(&table));
}

#[test]
fn test_toggle_header_message() {
    let mut model = test_model(PRICES);
    assert!(model.table.show_header());

    update(&mut model, Msg::Table(TableMsg::ToggleHeader));
    assert!(!model.table.show_header());
    assert!(!model.table.is_header_row(0));
}
