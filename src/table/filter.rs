//! Substring row filtering

use super::model::{Field, Table, TableState};

/// Substring filter; a row is kept when any of its fields contains the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    text: String,
    case_sensitive: bool,
    /// `text`, lowercased when matching case-insensitively
    needle: String,
}

impl Default for Filter {
    fn default() -> Self {
        Self::new(String::new(), true)
    }
}

impl Filter {
    pub fn new(text: impl Into<String>, case_sensitive: bool) -> Self {
        let text = text.into();
        let needle = if case_sensitive {
            text.clone()
        } else {
            text.to_lowercase()
        };
        Self {
            text,
            case_sensitive,
            needle,
        }
    }

    /// An empty filter string means no filtering
    pub fn is_active(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Same text, other case sensitivity
    pub fn with_case_sensitive(&self, case_sensitive: bool) -> Self {
        Self::new(self.text.clone(), case_sensitive)
    }

    pub fn matches(&self, haystack: &str) -> bool {
        if self.case_sensitive {
            haystack.contains(&self.needle)
        } else {
            haystack.to_lowercase().contains(&self.needle)
        }
    }

    pub fn row_matches(&self, row: &[Field]) -> bool {
        row.iter().any(|field| self.matches(field.text()))
    }
}

/// Original indices of the rows that pass `filter`, in file order.
///
/// With a header shown, row 0 is kept regardless of whether it matches, but
/// only if at least one other row does.
pub(crate) fn filtered_rows(table: &Table, filter: &Filter, show_header: bool) -> Vec<usize> {
    let skip = usize::from(show_header);
    let matched: Vec<usize> = (skip..table.row_count())
        .filter(|&row| filter.row_matches(table.row(row)))
        .collect();

    if show_header && !matched.is_empty() {
        std::iter::once(0).chain(matched).collect()
    } else {
        matched
    }
}

/// First visible (row, column) whose field matches, header row excluded
pub(crate) fn first_match(state: &TableState, filter: &Filter) -> Option<(usize, usize)> {
    (0..state.visible_row_count())
        .filter(|&row| !state.is_header_row(row))
        .find_map(|row| {
            (0..state.column_count())
                .find(|&col| filter.matches(state.field(row, col).text()))
                .map(|col| (row, col))
        })
}
