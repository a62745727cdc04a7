//! First-row header detection
//!
//! Row 0 is taken for a header when its fields are statistical outliers
//! against the rows below: either much longer/shorter than usual, or with a
//! very different share of digits. Only the first few columns are examined.

use super::model::Table;

/// Rows sampled below row 0
const SAMPLE_ROWS: usize = 64;
/// Columns examined, and the number of votes needed
const MAX_COLUMNS: usize = 3;
/// Deviations from the mean (in standard deviations) that count as an outlier
const OUTLIER_SIGMAS: f64 = 3.0;

/// Decide whether row 0 of `table` is a header.
///
/// Each examined column may vote twice (length, digit ratio). Tables with two
/// rows or fewer have no sample to compare against and count as headed.
pub fn has_header(table: &Table) -> bool {
    if table.row_count() <= 2 {
        return true;
    }

    let columns = table.column_count().min(MAX_COLUMNS);
    let sample_end = table.row_count().min(SAMPLE_ROWS + 1);
    let mut votes = 0;

    for col in 0..columns {
        let first = table.field(0, col).text();
        let sample: Vec<&str> = (1..sample_end)
            .map(|row| table.field(row, col).text())
            .collect();

        for measure in [length as fn(&str) -> f64, digit_ratio] {
            if is_outlier(measure(first), sample.iter().map(|text| measure(text))) {
                votes += 1;
                if votes >= columns {
                    return true;
                }
            }
        }
    }

    false
}

fn length(text: &str) -> f64 {
    text.chars().count() as f64
}

fn digit_ratio(text: &str) -> f64 {
    let len = text.chars().count();
    if len == 0 {
        return 0.0;
    }
    let digits = text.chars().filter(char::is_ascii_digit).count();
    digits as f64 / len as f64
}

/// Whether `value` lies more than [`OUTLIER_SIGMAS`] population standard
/// deviations from the sample mean
fn is_outlier(value: f64, sample: impl Iterator<Item = f64>) -> bool {
    let sample: Vec<f64> = sample.collect();
    if sample.is_empty() {
        return false;
    }
    let n = sample.len() as f64;
    let mean = sample.iter().sum::<f64>() / n;
    let variance = sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (value - mean).abs() > OUTLIER_SIGMAS * variance.sqrt()
}
