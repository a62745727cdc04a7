//! View module - paints the model into a [`Frame`]
//!
//! Layout, top to bottom: the table grid (box-drawing borders, truncated
//! edge fields cut to their visible slice), then one status line that the
//! filter prompt replaces while it is open.

pub mod frame;

pub use frame::{Cell, Frame, Style};

use crate::model::AppModel;
use crate::table::{junction_char, TableState};

/// Render the whole screen for the current window size
pub fn render(model: &AppModel) -> Frame {
    let (cols, rows) = model.window_size;
    let mut frame = Frame::new(cols as usize, rows as usize);
    let (height, _) = model.table_area();

    draw_table(&mut frame, &model.table);
    if rows > 0 {
        draw_status_line(&mut frame, model, height);
    }
    frame
}

fn draw_table(frame: &mut Frame, state: &TableState) {
    let layout = state.layout();
    let (rows, columns) = (&layout.rows, &layout.columns);

    // Horizontal border lines, with junctions where vertical borders cross
    for border in &rows.borders {
        for x in 0..columns.extent {
            let ch = match columns.border_at(x) {
                Some(col_edge) => junction_char(border.edge, col_edge),
                None => '─',
            };
            frame.put(x, border.offset, ch, Style::Border);
        }
    }

    // Vertical border lines through the content rows
    for slot in &rows.slots {
        for y in slot.offset..slot.offset + slot.part.size {
            for border in &columns.borders {
                frame.put(border.offset, y, '│', Style::Border);
            }
        }
    }

    for cell in state.visible_cells(&layout) {
        let style = if cell.is_cursor {
            Style::Cursor
        } else if cell.is_header {
            Style::Header
        } else {
            Style::Normal
        };
        if style != Style::Normal {
            frame.fill(cell.x, cell.y, cell.col_part.size, cell.row_part.size, style);
        }
        for (i, line) in cell.visible_lines().enumerate() {
            frame.put_str(cell.x, cell.y + i, &line, style);
        }
    }
}

fn draw_status_line(frame: &mut Frame, model: &AppModel, y: usize) {
    let width = frame.width();
    match &model.prompt {
        Some(prompt) => {
            frame.fill(0, y, width, 1, Style::Prompt);
            let written = frame.put_str(0, y, &format!("/{}", prompt.text()), Style::Prompt);
            frame.caret = Some((written.min(width.saturating_sub(1)), y));
        }
        None => {
            let line = model.status_bar.layout(width);
            frame.put_str(0, y, &line, Style::Status);
        }
    }
}
