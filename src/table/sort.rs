//! Column sorting
//!
//! A column sorts numerically when every non-empty cell starts with a number
//! and all of them share the same trailing text (a unit such as `kg` or `%`).
//! Anything else sorts lexicographically on the raw strings. Both orders are
//! stable in both directions.

use std::cmp::Ordering;

use super::model::Table;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Forward,
    Backward,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Forward => ordering,
            SortDirection::Backward => ordering.reverse(),
        }
    }
}

/// Sort state; inactive means file (or filtered) order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sort {
    pub active: bool,
    pub column: usize,
    pub direction: SortDirection,
}

impl Sort {
    /// Requesting the active column + direction again turns sorting off
    pub fn toggled(&self, column: usize, direction: SortDirection) -> Sort {
        if self.active && self.column == column && self.direction == direction {
            Sort::default()
        } else {
            Sort {
                active: true,
                column,
                direction,
            }
        }
    }
}

/// Split a leading decimal number off `text`, returning it with the rest.
///
/// Accepts leading whitespace, a sign, digits with an optional fraction, and
/// an exponent. Returns `None` when no digit is found.
pub fn parse_number_prefix(text: &str) -> Option<(f64, &str)> {
    let bytes = text.as_bytes();
    let mut start = 0;
    while start < bytes.len() && bytes[start].is_ascii_whitespace() {
        start += 1;
    }

    let mut end = start;
    if end < bytes.len() && matches!(bytes[end], b'+' | b'-') {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if end < bytes.len() && bytes[end] == b'.' {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    let value = text[start..end].parse::<f64>().ok()?;
    Some((value, &text[end..]))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Numeric sort keys for `rows`, or `None` if the column isn't numeric.
///
/// Empty cells get `f64::MAX` so they sort last going forward.
fn numeric_keys(table: &Table, rows: &[usize], column: usize) -> Option<Vec<f64>> {
    let mut suffix: Option<&str> = None;
    let mut keys = Vec::with_capacity(rows.len());

    for &row in rows {
        let text = table.field(row, column).text();
        if text.is_empty() {
            keys.push(f64::MAX);
            continue;
        }
        let (value, rest) = parse_number_prefix(text)?;
        match suffix {
            None => suffix = Some(rest),
            Some(expected) if expected != rest => return None,
            Some(_) => {}
        }
        keys.push(value);
    }

    Some(keys)
}

/// Stable-sort a slice of row indices by one column
pub(crate) fn sort_rows(
    table: &Table,
    rows: &mut [usize],
    column: usize,
    direction: SortDirection,
) {
    match numeric_keys(table, rows, column) {
        Some(keys) => {
            let mut keyed: Vec<(f64, usize)> =
                keys.into_iter().zip(rows.iter().copied()).collect();
            keyed.sort_by(|a, b| {
                direction.apply(a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal))
            });
            for (slot, (_, row)) in rows.iter_mut().zip(keyed) {
                *slot = row;
            }
        }
        None => {
            tracing::debug!(column, "column is not numeric, sorting lexicographically");
            rows.sort_by(|&a, &b| {
                let a = table.field(a, column).text();
                let b = table.field(b, column).text();
                direction.apply(a.cmp(b))
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse;

    fn sorted_column(content: &str, direction: SortDirection) -> Vec<String> {
        let table = parse(content, ',').unwrap();
        let mut rows: Vec<usize> = (0..table.row_count()).collect();
        sort_rows(&table, &mut rows, 0, direction);
        rows.iter()
            .map(|&r| table.field(r, 0).text().to_string())
            .collect()
    }

    #[test]
    fn test_parse_number_prefix() {
        assert_eq!(parse_number_prefix("42"), Some((42.0, "")));
        assert_eq!(parse_number_prefix("  -3.5kg"), Some((-3.5, "kg")));
        assert_eq!(parse_number_prefix("1e3 m"), Some((1000.0, " m")));
        assert_eq!(parse_number_prefix(".5%"), Some((0.5, "%")));
        assert_eq!(parse_number_prefix("7.x"), Some((7.0, "x")));
        // An `e` without exponent digits is part of the suffix
        assert_eq!(parse_number_prefix("2em"), Some((2.0, "em")));
        assert_eq!(parse_number_prefix("abc"), None);
        assert_eq!(parse_number_prefix("-"), None);
        assert_eq!(parse_number_prefix("."), None);
        assert_eq!(parse_number_prefix(""), None);
    }

    #[test]
    fn test_toggle() {
        let sort = Sort::default().toggled(1, SortDirection::Forward);
        assert!(sort.active);

        let off = sort.toggled(1, SortDirection::Forward);
        assert!(!off.active);

        let other = sort.toggled(1, SortDirection::Backward);
        assert!(other.active);
        assert_eq!(other.direction, SortDirection::Backward);
    }

    #[test]
    fn test_numeric_beats_lexicographic() {
        assert_eq!(
            sorted_column("10\n9\n100\n-1\n", SortDirection::Forward),
            vec!["-1", "9", "10", "100"]
        );
    }

    #[test]
    fn test_shared_suffix_is_numeric() {
        assert_eq!(
            sorted_column("10 kg\n9 kg\n100 kg\n", SortDirection::Forward),
            vec!["9 kg", "10 kg", "100 kg"]
        );
    }

    #[test]
    fn test_mixed_suffix_falls_back() {
        assert_eq!(
            sorted_column("10 kg\n9 lb\n100 kg\n", SortDirection::Forward),
            vec!["10 kg", "100 kg", "9 lb"]
        );
    }

    #[test]
    fn test_non_numeric_falls_back() {
        assert_eq!(
            sorted_column("pear\n10\napple\n", SortDirection::Forward),
            vec!["10", "apple", "pear"]
        );
    }

    #[test]
    fn test_empty_cells_last_forward_first_backward() {
        let content = "\"\",x\n3,x\n1,x\n";
        assert_eq!(sorted_column(content, SortDirection::Forward), vec!["1", "3", ""]);
        assert_eq!(sorted_column(content, SortDirection::Backward), vec!["", "3", "1"]);
    }

    #[test]
    fn test_ties_keep_file_order_both_ways() {
        let table = parse("1,a\n2,b\n1,c\n2,d\n", ',').unwrap();
        let mut rows: Vec<usize> = (0..4).collect();

        sort_rows(&table, &mut rows, 0, SortDirection::Forward);
        assert_eq!(rows, vec![0, 2, 1, 3]);

        let mut rows: Vec<usize> = (0..4).collect();
        sort_rows(&table, &mut rows, 0, SortDirection::Backward);
        assert_eq!(rows, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_backward_unit_column() {
        assert_eq!(
            sorted_column("0 EUR\n1 EUR\n2 EUR\n3 EUR\n4 EUR\n", SortDirection::Backward),
            vec!["4 EUR", "3 EUR", "2 EUR", "1 EUR", "0 EUR"]
        );
    }
}
