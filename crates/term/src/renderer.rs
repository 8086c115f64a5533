//! TerminalRenderer: flushes a framebuffer to the real terminal.
//!
//! Frames are diffed against the previous one and only changed runs are sent.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::{anyhow, Result};
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

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

    /// Force the next draw to repaint everything (after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame so the caller can reuse
    /// the allocation for the next one.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            Some(mut prev) => {
                encode_full_into(fb, &mut self.buf)?;
                prev.resize(fb.width(), fb.height());
                prev
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
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

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut writer = RunWriter::new(out);
    for y in 0..fb.height() {
        writer.run(0, y, fb.row(y))?;
    }
    writer.finish()
}

/// Encode only the runs of glyphs that differ between `prev` and `next`.
///
/// Both buffers must have the same size. An unchanged frame encodes to nothing.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return Err(anyhow!(
            "frame size changed: {}x{} -> {}x{}",
            prev.width(),
            prev.height(),
            next.width(),
            next.height()
        ));
    }

    let mut writer = RunWriter::new(out);
    for y in 0..next.height() {
        let row = next.row(y);
        for run in changed_runs(prev.row(y), row) {
            writer.run(run.start as u16, y, &row[run])?;
        }
    }
    writer.finish()
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Queues positioned glyph runs, sending only the parts of the style that
/// differ from the glyph before.
struct RunWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> RunWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn run(&mut self, x: u16, y: u16, glyphs: &[Glyph]) -> Result<()> {
        if glyphs.is_empty() {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(x, y))?;
        for glyph in glyphs {
            self.set_style(glyph.style)?;
            self.out.queue(Print(glyph.ch))?;
        }
        Ok(())
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        let prev = self.style.replace(style);
        if prev == Some(style) {
            return Ok(());
        }

        // SGR 0 drops the colors too, so both are re-sent after it.
        let attrs_changed = prev.map_or(true, |p| (p.bold, p.dim) != (style.bold, style.dim));
        if attrs_changed {
            self.out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        if attrs_changed || prev.map(|p| p.fg) != Some(style.fg) {
            self.out.queue(SetForegroundColor(style.fg.into()))?;
        }
        if attrs_changed || prev.map(|p| p.bg) != Some(style.bg) {
            self.out.queue(SetBackgroundColor(style.bg.into()))?;
        }
        Ok(())
    }

    /// Restore the default style if anything was written.
    fn finish(self) -> Result<()> {
        let out = self.out;
        if self.style.is_some() {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

/// Column ranges where `prev` and `next` differ, each as long as possible.
fn changed_runs<'a>(
    prev: &'a [Glyph],
    next: &'a [Glyph],
) -> impl Iterator<Item = Range<usize>> + 'a {
    let differs = move |x: usize| prev.get(x) != next.get(x);
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < next.len() && !differs(x) {
            x += 1;
        }
        if x == next.len() {
            return None;
        }
        let start = x;
        while x < next.len() && differs(x) {
            x += 1;
        }
        Some(start..x)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(a: &FrameBuffer, b: &FrameBuffer, y: u16) -> Vec<Range<usize>> {
        changed_runs(a.row(y), b.row(y)).collect()
    }

    fn occurrences(bytes: &[u8], pattern: &str) -> usize {
        String::from_utf8_lossy(bytes).matches(pattern).count()
    }

    #[test]
    fn identical_rows_have_no_runs() {
        let a = FrameBuffer::new(4, 3);
        assert!(runs(&a, &a.clone(), 1).is_empty());
    }

    #[test]
    fn adjacent_changes_coalesce() {
        let a = FrameBuffer::new(6, 1);
        let mut b = a.clone();
        b.put_str(1, 0, "XYZ", CellStyle::default());
        b.put_char(5, 0, 'Q', CellStyle::default());
        assert_eq!(runs(&a, &b, 0), vec![1..4, 5..6]);
    }

    #[test]
    fn style_only_change_is_a_run() {
        let a = FrameBuffer::new(2, 1);
        let mut b = a.clone();
        b.put_char(0, 0, ' ', CellStyle::default().bold());
        assert_eq!(runs(&a, &b, 0), vec![0..1]);
    }

    #[test]
    fn one_style_is_sent_once() {
        let mut fb = FrameBuffer::new(5, 2);
        fb.put_str(0, 0, "hello", CellStyle::default());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        assert_eq!(occurrences(&out, "[38;2;"), 1);
        assert_eq!(occurrences(&out, "[48;2;"), 1);
    }

    #[test]
    fn background_change_keeps_foreground() {
        let mut fb = FrameBuffer::new(2, 1);
        let base = CellStyle::default();
        fb.put_char(1, 0, ' ', CellStyle::new(base.fg, Rgb::new(0, 0, 160)));
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        assert_eq!(occurrences(&out, "[38;2;"), 1);
        assert_eq!(occurrences(&out, "[48;2;"), 2);
    }

    #[test]
    fn attribute_change_resends_colors() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put_char(1, 0, '#', CellStyle::default().bold());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        assert_eq!(occurrences(&out, "[38;2;"), 2);
        assert_eq!(occurrences(&out, "[48;2;"), 2);
    }

    #[test]
    fn unchanged_frame_encodes_to_nothing() {
        let a = FrameBuffer::new(3, 3);
        let mut diff = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut diff).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn diff_rejects_size_mismatch() {
        let mut out = Vec::new();
        let err = encode_diff_into(&FrameBuffer::new(2, 2), &FrameBuffer::new(3, 2), &mut out);
        assert!(err.is_err());
    }
}
