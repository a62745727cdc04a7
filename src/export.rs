//! Headless export of the visible rows
//!
//! Writes exactly what the viewer would show: the filtered and sorted rows in
//! display order, header first when it is shown.

use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::table::TableState;

/// Write the visible rows of `state` as delimited text, returning the rows written
pub fn write_visible<W: io::Write>(state: &TableState, delimiter: char, out: W) -> Result<usize> {
    if !delimiter.is_ascii() {
        bail!("export needs an ASCII delimiter, got {:?}", delimiter);
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(false)
        .from_writer(out);

    for &row in state.visible_rows() {
        let record = state.table().row(row).iter().map(|field| field.text());
        writer.write_record(record).context("failed to write record")?;
    }
    writer.flush().context("failed to flush output")?;

    Ok(state.visible_row_count())
}

/// [`write_visible`] into a new file at `path`
pub fn export_to_path(state: &TableState, delimiter: char, path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let rows = write_visible(state, delimiter, io::BufWriter::new(file))
        .with_context(|| format!("failed to export to {}", path.display()))?;
    tracing::info!(rows, path = %path.display(), "exported visible rows");
    Ok(rows)
}
