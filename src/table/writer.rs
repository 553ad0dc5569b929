use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::config::TableSettings;

/// Buffers rows of cells and writes them column-aligned on [`flush`](Self::flush).
///
/// Each column is as wide as its widest cell (at least `min_width`) plus
/// `padding`. Every cell is padded, the last one included, so all rows of a
/// flushed block have the same display width.
pub struct ColumnWriter<W: Write> {
    out: W,
    padding: usize,
    min_width: usize,
    pad_char: char,
    rows: Vec<Vec<String>>,
}

impl<W: Write> ColumnWriter<W> {
    pub fn new(out: W, settings: &TableSettings) -> Self {
        Self {
            out,
            padding: settings.padding,
            min_width: settings.min_width,
            pad_char: settings.pad_char,
            rows: Vec::new(),
        }
    }

    pub fn write_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let w = cell.width();
                match widths.get_mut(i) {
                    Some(max) => *max = (*max).max(w),
                    None => widths.push(w),
                }
            }
        }
        widths
            .into_iter()
            .map(|w| w.max(self.min_width) + self.padding)
            .collect()
    }

    /// Write all buffered rows and clear the buffer.
    pub fn flush(&mut self) -> io::Result<()> {
        let widths = self.column_widths();
        let mut line = String::new();
        for row in self.rows.drain(..) {
            line.clear();
            for (cell, width) in row.iter().zip(&widths) {
                line.push_str(cell);
                let fill = width.saturating_sub(cell.width());
                line.extend(std::iter::repeat_n(self.pad_char, fill));
            }
            line.push('\n');
            self.out.write_all(line.as_bytes())?;
        }
        self.out.flush()
    }
}
