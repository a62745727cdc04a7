//! App message handlers (file reloads, window events)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages (file reloads, window events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize { cols, rows } => {
            model.resize(cols, rows);
            Some(Cmd::Redraw)
        }

        AppMsg::Reload => match model.source.clone() {
            Some(source) => {
                model.set_status("reloading...");
                Some(Cmd::LoadFile {
                    path: source.path,
                    delimiter: source.delimiter,
                })
            }
            None => {
                model.set_status("nothing to reload");
                Some(Cmd::Redraw)
            }
        },

        AppMsg::TableLoaded(table) => {
            let show_header = match &model.source {
                Some(source) => source.header.resolve(&table),
                None => model.table.show_header(),
            };
            let rows = table.row_count();
            model.table.replace_table(table, show_header);
            tracing::info!(rows, "table reloaded");
            model.set_status(format!("reloaded {} rows", rows));
            Some(Cmd::Redraw)
        }

        AppMsg::LoadFailed(error) => {
            tracing::warn!(%error, "reload failed");
            model.set_status(format!("reload failed: {}", error));
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeaderMode;
    use crate::model::Source;
    use crate::table::{parse, Filter, TableState};
    use std::path::PathBuf;

    fn model_with_source() -> AppModel {
        let table = parse("n\n1\n2\n", ',').unwrap();
        AppModel::new(TableState::new(table, true)).with_source(Source {
            path: PathBuf::from("numbers.csv"),
            delimiter: ';',
            header: HeaderMode::Always,
        })
    }

    #[test]
    fn test_reload_requests_load() {
        let mut model = model_with_source();
        let cmd = update_app(&mut model, AppMsg::Reload);
        assert_eq!(
            cmd,
            Some(Cmd::LoadFile {
                path: PathBuf::from("numbers.csv"),
                delimiter: ';',
            })
        );
    }

    #[test]
    fn test_reload_without_source() {
        let mut model = AppModel::new(TableState::new(parse("a\n", ',').unwrap(), false));
        assert_eq!(update_app(&mut model, AppMsg::Reload), Some(Cmd::Redraw));
        assert_eq!(model.status_message.as_deref(), Some("nothing to reload"));
    }

    #[test]
    fn test_table_loaded_swaps_and_keeps_filter() {
        let mut model = model_with_source();
        model.resize(40, 10);
        model.table.apply_filter(Filter::new("1", true));

        let fresh = parse("n\n1\n2\n10\n", ',').unwrap();
        update_app(&mut model, AppMsg::TableLoaded(fresh));

        assert_eq!(model.table.table().row_count(), 4);
        assert!(model.table.show_header());
        assert_eq!(model.table.visible_rows(), &[0, 1, 3]);
        assert_eq!(model.status_message.as_deref(), Some("reloaded 4 rows"));
    }

    #[test]
    fn test_load_failure_keeps_table() {
        let mut model = model_with_source();
        update_app(&mut model, AppMsg::LoadFailed("line 3: bad quote".into()));
        assert_eq!(model.table.table().row_count(), 3);
        assert!(model.status_message.unwrap().contains("bad quote"));
    }

    #[test]
    fn test_quit() {
        let mut model = model_with_source();
        assert!(update_app(&mut model, AppMsg::Quit).unwrap().is_quit());
    }
}
