//! Table engine
//!
//! Everything between the raw bytes of a delimited file and the cells the
//! renderer paints:
//! - Two-pass CSV parsing into a rectangular table of multi-line fields
//! - Filtered and sorted views over the rows (index mapping, no copies)
//! - First-row header detection
//! - Per-axis viewport windowing with edge truncation
//! - Screen layout of the visible fields and borders
//!
//! # Architecture
//!
//! ```text
//! TableState
//! ├── Table (owned fields, column widths, row heights)
//! ├── visible rows (indices into Table, after filter + sort)
//! ├── Filter / Sort
//! ├── Cursor (visible row, column)
//! └── TableViewport
//!         ├── rows: TablePart
//!         └── columns: TablePart
//! ```

mod filter;
mod header;
mod model;
mod navigation;
mod parser;
mod render;
mod sort;
mod viewport;
mod width;

pub use filter::Filter;
pub use header::has_header;
pub use model::{Cursor, Field, Table, TableState};
pub use navigation::SearchDirection;
pub use parser::{parse, ParseError};
pub use render::{AxisLayout, Border, Slot, TableLayout, VisibleCell};
pub use sort::{parse_number_prefix, Sort, SortDirection};
pub use viewport::{
    corner_glyph, junction_char, Anchor, Edge, Extents, FieldPart, Junction, TablePart,
    TableViewport,
};
pub use width::{char_width, display_width, slice_columns};
