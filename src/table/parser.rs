//! Delimited text parsing
//!
//! A character-level state machine rather than a line split, since a quoted
//! field may span several physical lines. The source is scanned twice: once
//! to learn (and validate) the table's shape, once to fill a table that was
//! allocated to exactly that shape.

use thiserror::Error;

use super::model::{Field, Table};

/// Malformed input. Every variant aborts the load; there is no partial table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: expected {expected} fields, found {found}")]
    ColumnCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: unexpected {found:?} after closing quote")]
    InvalidQuote { line: usize, found: char },
    #[error("line {line}: quoted field is never closed")]
    UnterminatedQuote { line: usize },
}

impl ParseError {
    /// 1-based physical line the error was detected on
    pub fn line(&self) -> usize {
        match self {
            ParseError::ColumnCountMismatch { line, .. }
            | ParseError::InvalidQuote { line, .. }
            | ParseError::UnterminatedQuote { line } => *line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// At the start of a field, quoting not yet known
    FieldStart,
    Unescaped,
    Escaped,
}

/// Receiver of the scanner's structural events
trait FieldSink {
    fn push_char(&mut self, ch: char);
    fn end_field(&mut self);
    /// `line` is the physical line the record started on
    fn end_row(&mut self, line: usize) -> Result<(), ParseError>;
}

/// Parse `source` into a rectangular table.
///
/// Carriage returns are dropped everywhere, empty physical lines between
/// records are skipped, and a doubled quote inside a quoted field yields one
/// literal quote.
pub fn parse(source: &str, delimiter: char) -> Result<Table, ParseError> {
    let mut shape = ShapeCounter::default();
    scan(source, delimiter, &mut shape)?;

    let columns = shape.columns.unwrap_or(0);
    tracing::debug!(rows = shape.rows, columns, "table shape");

    let mut builder = TableBuilder::new(shape.rows, columns);
    scan(source, delimiter, &mut builder)?;
    Ok(builder.table)
}

fn scan<S: FieldSink>(source: &str, delimiter: char, sink: &mut S) -> Result<(), ParseError> {
    let mut chars = source.chars().filter(|&c| c != '\r').peekable();
    let mut state = State::FieldStart;
    let mut line = 1;
    let mut row_line = 1;
    // Whether the current record has produced anything yet (blank lines don't)
    let mut row_open = false;

    while let Some(ch) = chars.next() {
        match state {
            State::FieldStart => {
                if ch == '"' {
                    state = State::Escaped;
                    row_open = true;
                } else if ch == delimiter {
                    sink.end_field();
                    row_open = true;
                } else if ch == '\n' {
                    if row_open {
                        sink.end_field();
                        sink.end_row(row_line)?;
                        row_open = false;
                    }
                    line += 1;
                    row_line = line;
                } else {
                    sink.push_char(ch);
                    state = State::Unescaped;
                    row_open = true;
                }
            }
            State::Unescaped => {
                if ch == delimiter {
                    sink.end_field();
                    state = State::FieldStart;
                } else if ch == '\n' {
                    sink.end_field();
                    sink.end_row(row_line)?;
                    row_open = false;
                    state = State::FieldStart;
                    line += 1;
                    row_line = line;
                } else {
                    sink.push_char(ch);
                }
            }
            State::Escaped => {
                if ch != '"' {
                    if ch == '\n' {
                        line += 1;
                    }
                    sink.push_char(ch);
                    continue;
                }
                match chars.peek().copied() {
                    Some('"') => {
                        chars.next();
                        sink.push_char('"');
                    }
                    Some(next) if next == delimiter => {
                        chars.next();
                        sink.end_field();
                        state = State::FieldStart;
                    }
                    Some('\n') => {
                        chars.next();
                        sink.end_field();
                        sink.end_row(row_line)?;
                        row_open = false;
                        state = State::FieldStart;
                        line += 1;
                        row_line = line;
                    }
                    None => {
                        sink.end_field();
                        sink.end_row(row_line)?;
                        row_open = false;
                        state = State::FieldStart;
                    }
                    Some(found) => return Err(ParseError::InvalidQuote { line, found }),
                }
            }
        }
    }

    match state {
        State::Escaped => Err(ParseError::UnterminatedQuote { line: row_line }),
        State::Unescaped => {
            sink.end_field();
            sink.end_row(row_line)
        }
        State::FieldStart if row_open => {
            sink.end_field();
            sink.end_row(row_line)
        }
        State::FieldStart => Ok(()),
    }
}

/// First pass: counts rows and validates every row against row 0's width
#[derive(Debug, Default)]
struct ShapeCounter {
    columns: Option<usize>,
    rows: usize,
    fields_in_row: usize,
}

impl FieldSink for ShapeCounter {
    fn push_char(&mut self, _ch: char) {}

    fn end_field(&mut self) {
        self.fields_in_row += 1;
    }

    fn end_row(&mut self, line: usize) -> Result<(), ParseError> {
        let found = std::mem::take(&mut self.fields_in_row);
        match self.columns {
            None => self.columns = Some(found),
            Some(expected) if expected != found => {
                return Err(ParseError::ColumnCountMismatch {
                    line,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        self.rows += 1;
        Ok(())
    }
}

/// Second pass: copies field content into a pre-sized table
struct TableBuilder {
    table: Table,
    row: Vec<Field>,
    text: String,
}

impl TableBuilder {
    fn new(rows: usize, columns: usize) -> Self {
        Self {
            table: Table::with_shape(rows, columns),
            row: Vec::with_capacity(columns),
            text: String::new(),
        }
    }
}

impl FieldSink for TableBuilder {
    fn push_char(&mut self, ch: char) {
        self.text.push(ch);
    }

    fn end_field(&mut self) {
        self.row.push(Field::new(std::mem::take(&mut self.text)));
    }

    fn end_row(&mut self, _line: usize) -> Result<(), ParseError> {
        let capacity = self.table.column_count();
        let row = std::mem::replace(&mut self.row, Vec::with_capacity(capacity));
        self.table.push_row(row);
        Ok(())
    }
}
