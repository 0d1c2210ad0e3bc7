//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Full-frame redraws into the alternate screen. At one small frame per
//! gravity tick there is nothing to gain from diffing, and a full encode
//! keeps the renderer trivially correct after resizes.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call even if `enter` failed midway.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Encode and flush one full frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full frame as a crossterm command sequence into `out`.
///
/// Style changes are only emitted when consecutive cells differ, which
/// keeps the escape-code volume small for large same-colored runs.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn encoded_frame_contains_the_cell_text() {
        let mut fb = FrameBuffer::new(3, 1);
        let style = CellStyle::default();
        fb.set(0, 0, Cell { ch: 'a', style });
        fb.set(1, 0, Cell { ch: 'b', style });
        fb.set(2, 0, Cell { ch: 'c', style });

        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        let encoded = String::from_utf8(out).unwrap();
        assert!(encoded.contains("abc"));
    }

    #[test]
    fn style_runs_are_not_re_emitted() {
        let mut fb = FrameBuffer::new(8, 1);
        let style = CellStyle {
            fg: Rgb::new(1, 2, 3),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        for x in 0..8 {
            fb.set(x, 0, Cell { ch: 'x', style });
        }

        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        let encoded = String::from_utf8(out).unwrap();
        // One foreground set for the whole run (plus the trailing reset).
        assert_eq!(encoded.matches("38;2;1;2;3").count(), 1);
    }
}
