use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::config::TableSettings;
use crate::library::{Column, Track};

use super::writer::ColumnWriter;

/// Turns headers and already-ordered records into text on `out`.
pub trait Render {
    type Record;

    fn render(
        &self,
        out: &mut dyn Write,
        columns: &[Column],
        records: &[Self::Record],
    ) -> io::Result<()>;
}

/// One dash per display column of `header`.
pub fn divider(header: &str) -> String {
    "-".repeat(header.width())
}

/// Renders tracks as an aligned table. Holds no state between renders.
#[derive(Debug, Clone, Default)]
pub struct TrackTable {
    settings: TableSettings,
}

impl TrackTable {
    pub fn new(settings: TableSettings) -> Self {
        Self { settings }
    }
}

impl Render for TrackTable {
    type Record = Track;

    fn render(&self, out: &mut dyn Write, columns: &[Column], tracks: &[Track]) -> io::Result<()> {
        let mut tw = ColumnWriter::new(out, &self.settings);
        tw.write_row(columns.iter().map(|c| c.name()));
        tw.write_row(columns.iter().map(|c| divider(c.name())));
        for track in tracks {
            tw.write_row(columns.iter().map(|c| c.value(track).to_string()));
        }
        tw.flush()
    }
}
