//! Terminal session: raw mode, alternate screen, frame output
//!
//! The mode guard restores the terminal when the session is dropped, so an
//! early return or a panic unwinding through the event loop still leaves a
//! usable shell behind.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use thiserror::Error;

use crate::view::{Frame, Style};

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("enable raw mode failed")]
    EnableRawMode {
        #[source]
        source: io::Error,
    },
    #[error("enter alternate screen failed")]
    EnterAlternateScreen {
        #[source]
        source: io::Error,
    },
    #[error("query terminal size failed")]
    Size {
        #[source]
        source: io::Error,
    },
    #[error("terminal draw failed")]
    Draw {
        #[source]
        source: io::Error,
    },
    #[error("read terminal event failed")]
    ReadEvent {
        #[source]
        source: io::Error,
    },
}

struct TerminalModeGuard;

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show, LeaveAlternateScreen);
    }
}

pub struct TerminalSession {
    stdout: io::Stdout,
    _mode_guard: TerminalModeGuard,
}

impl TerminalSession {
    pub fn enter(title: &str) -> Result<Self, TerminalError> {
        enable_raw_mode().map_err(|source| TerminalError::EnableRawMode { source })?;
        let mode_guard = TerminalModeGuard;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, SetTitle(title), Hide)
            .map_err(|source| TerminalError::EnterAlternateScreen { source })?;
        Ok(Self {
            stdout,
            _mode_guard: mode_guard,
        })
    }

    /// Current size as (columns, rows)
    pub fn size(&self) -> Result<(u16, u16), TerminalError> {
        terminal::size().map_err(|source| TerminalError::Size { source })
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<(), TerminalError> {
        write_frame(&mut self.stdout, frame).map_err(|source| TerminalError::Draw { source })
    }
}

/// Queue the whole frame, one attribute change per run of equal style
fn write_frame(out: &mut impl Write, frame: &Frame) -> io::Result<()> {
    queue!(out, Hide, Clear(ClearType::All))?;
    for y in 0..frame.height() {
        queue!(out, MoveTo(0, y as u16))?;
        let mut current: Option<Style> = None;
        let mut run = String::new();
        // The terminal advances two columns itself after a wide glyph
        for cell in frame.row(y).iter().filter(|c| !c.is_wide_tail()) {
            if current != Some(cell.style) {
                if let Some(style) = current {
                    flush_run(out, style, &run)?;
                }
                run.clear();
                current = Some(cell.style);
            }
            run.push(cell.ch);
        }
        if let Some(style) = current {
            flush_run(out, style, &run)?;
        }
    }
    queue!(out, SetAttribute(Attribute::Reset))?;
    if let Some((x, y)) = frame.caret {
        queue!(out, MoveTo(x as u16, y as u16), Show)?;
    }
    out.flush()
}

fn flush_run(out: &mut impl Write, style: Style, text: &str) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    match style {
        Style::Normal => {}
        Style::Border => queue!(out, SetAttribute(Attribute::Dim))?,
        Style::Header => queue!(out, SetAttribute(Attribute::Bold))?,
        Style::Cursor | Style::Status => queue!(out, SetAttribute(Attribute::Reverse))?,
        Style::Prompt => queue!(out, SetAttribute(Attribute::Bold))?,
    }
    queue!(out, Print(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_frame_emits_text() {
        let mut frame = Frame::new(5, 2);
        frame.put_str(0, 0, "ab", Style::Header);
        frame.put_str(0, 1, "cd", Style::Normal);

        let mut out = Vec::new();
        write_frame(&mut out, &frame).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("ab"));
        assert!(text.contains("cd   "));
    }

    #[test]
    fn test_write_frame_skips_wide_tails() {
        let mut frame = Frame::new(4, 1);
        frame.put_str(0, 0, "日x", Style::Normal);

        let mut out = Vec::new();
        write_frame(&mut out, &frame).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("日x "));
        assert!(!text.contains('\0'));
    }
}
