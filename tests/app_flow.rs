//! App flow tests - reload, export, startup configuration, status line

mod common;

use std::io::Write;
use std::ops::ControlFlow;

use common::{test_model, FRUIT, PRICES};
use csvview::cli::{CliArgs, StartupMode};
use csvview::config::{HeaderMode, ViewerConfig};
use csvview::export::export_to_path;
use csvview::load::{initial_state, read_table};
use csvview::messages::{AppMsg, Direction, Msg, TableMsg};
use csvview::model::{AppModel, Source};
use csvview::runtime::dispatch;
use csvview::table::SortDirection;
use csvview::view::render;

fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn model_for(path: &std::path::Path) -> AppModel {
    let table = read_table(path, ',').unwrap();
    let state = csvview::table::TableState::new(table, true);
    let mut model = AppModel::new(state).with_source(Source {
        path: path.to_path_buf(),
        delimiter: ',',
        header: HeaderMode::Always,
    });
    dispatch(&mut model, Msg::resize(60, 20));
    model
}

// ========================================================================
// Reload
// ========================================================================

#[test]
fn test_reload_swaps_table_and_keeps_sort() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "prices.csv", PRICES);
    let mut model = model_for(&path);

    dispatch(
        &mut model,
        Msg::Table(TableMsg::ToggleSort {
            column: 0,
            direction: SortDirection::Backward,
        }),
    );
    write_csv(&dir, "prices.csv", "amount\n7 EUR\n9 EUR\n8 EUR\n");

    let flow = dispatch(&mut model, Msg::App(AppMsg::Reload));
    assert_eq!(flow, ControlFlow::Continue(()));
    assert_eq!(model.table.visible_row_count(), 4);
    assert_eq!(model.table.field(1, 0).text(), "9 EUR");
    assert_eq!(model.status_message.as_deref(), Some("reloaded 4 rows"));
}

#[test]
fn test_failed_reload_keeps_old_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "prices.csv", PRICES);
    let mut model = model_for(&path);

    write_csv(&dir, "prices.csv", "a,b\n1,2,3\n");
    dispatch(&mut model, Msg::App(AppMsg::Reload));

    assert_eq!(model.table.visible_row_count(), 6);
    let status = model.status_message.clone().unwrap();
    assert!(status.starts_with("reload failed"), "{}", status);
}

#[test]
fn test_quit_breaks() {
    let mut model = test_model(FRUIT);
    assert_eq!(
        dispatch(&mut model, Msg::App(AppMsg::Quit)),
        ControlFlow::Break(())
    );
}

// ========================================================================
// Startup and export
// ========================================================================

#[test]
fn test_cli_filter_sort_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(&dir, "fruit.csv", FRUIT);
    let output = dir.path().join("out.csv");

    let args = CliArgs {
        path: Some(input.clone()),
        header: true,
        ignore_case: true,
        filter: Some("BERRY".into()),
        sort: Some(3),
        reverse: true,
        export: Some(output.clone()),
        ..Default::default()
    };
    let startup = args.into_config(&ViewerConfig::default()).unwrap();
    assert_eq!(startup.mode, StartupMode::Export(output.clone()));

    let table = read_table(&input, startup.delimiter).unwrap();
    let state = initial_state(table, &startup).unwrap();
    let rows = export_to_path(&state, startup.delimiter, &output).unwrap();

    assert_eq!(rows, 4);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "name,kind,price\nblueberry,berry,7\nraspberry,berry,6\nstrawberry,berry,5\n"
    );
}

#[test]
fn test_config_file_supplies_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    let saved = ViewerConfig {
        delimiter: Some(';'),
        case_sensitive: false,
        header: HeaderMode::Never,
        page_overlap: 2,
    };
    saved.save_to(&config_path).unwrap();

    let config = ViewerConfig::load_from(&config_path);
    assert_eq!(config, saved);

    let args = CliArgs {
        path: Some(dir.path().join("data.tsv")),
        ..Default::default()
    };
    let startup = args.into_config(&config).unwrap();
    // A delimiter set in the file wins over the .tsv extension
    assert_eq!(startup.delimiter, ';');
    assert_eq!(startup.header, HeaderMode::Never);
    assert!(!startup.case_sensitive);
    assert_eq!(startup.page_overlap, 2);
}

// ========================================================================
// Status line
// ========================================================================

#[test]
fn test_status_line_tracks_cursor_and_sort() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "prices.csv", PRICES);
    let mut model = model_for(&path);

    dispatch(&mut model, Msg::move_cursor(Direction::Down));
    dispatch(
        &mut model,
        Msg::Table(TableMsg::ToggleSortAtCursor(SortDirection::Forward)),
    );

    let frame = render(&model);
    let status = frame.row_text(frame.height() - 1);
    assert!(status.starts_with(" prices.csv"), "{:?}", status);
    assert!(status.contains("col 1 ▲"), "{:?}", status);
    assert!(status.contains("row 2/6 col 1/1"), "{:?}", status);
}
