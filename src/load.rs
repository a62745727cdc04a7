//! Reading tables from disk

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cli::StartupConfig;
use crate::table::{parse, Filter, Table, TableState};

/// Read and parse `path`. The whole file must parse; there is no partial table.
pub fn read_table(path: &Path, delimiter: char) -> Result<Table> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let table = parse(&content, delimiter)
        .with_context(|| format!("malformed CSV in {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "table loaded"
    );
    Ok(table)
}

/// Table state as requested on the command line: header mode resolved, then
/// the initial filter and sort applied
pub fn initial_state(table: Table, startup: &StartupConfig) -> Result<TableState> {
    let show_header = startup.header.resolve(&table);
    tracing::debug!(header = ?startup.header, show_header, "header mode resolved");
    let mut state = TableState::new(table, show_header);

    if let Some(text) = &startup.filter {
        state.apply_filter(Filter::new(text.as_str(), startup.case_sensitive));
    }

    if let Some((column, direction)) = startup.sort {
        if column >= state.column_count() {
            bail!(
                "--sort column {} is out of range (the table has {} columns)",
                column + 1,
                state.column_count()
            );
        }
        state.apply_sort(column, direction);
    }

    Ok(state)
}
