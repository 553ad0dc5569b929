use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use super::duration::format_duration;
use super::model::Track;

/// A sortable, displayable column of the track table.
///
/// Variant order is the declared header order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    Artist,
    Album,
    Year,
    Length,
}

/// A borrowed field value, comparable within its column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(i64),
    Elapsed(Duration),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::Elapsed(d) => f.write_str(&format_duration(*d)),
        }
    }
}

struct ColumnDef {
    column: Column,
    name: &'static str,
    value: for<'a> fn(&'a Track) -> FieldValue<'a>,
}

fn title(t: &Track) -> FieldValue<'_> {
    FieldValue::Text(&t.title)
}

fn artist(t: &Track) -> FieldValue<'_> {
    FieldValue::Text(&t.artist)
}

fn album(t: &Track) -> FieldValue<'_> {
    FieldValue::Text(&t.album)
}

fn year(t: &Track) -> FieldValue<'_> {
    FieldValue::Int(t.year)
}

fn length(t: &Track) -> FieldValue<'_> {
    FieldValue::Elapsed(t.length)
}

// Indexed by `Column as usize`.
const COLUMNS: [ColumnDef; 5] = [
    ColumnDef {
        column: Column::Title,
        name: "Title",
        value: title,
    },
    ColumnDef {
        column: Column::Artist,
        name: "Artist",
        value: artist,
    },
    ColumnDef {
        column: Column::Album,
        name: "Album",
        value: album,
    },
    ColumnDef {
        column: Column::Year,
        name: "Year",
        value: year,
    },
    ColumnDef {
        column: Column::Length,
        name: "Length",
        value: length,
    },
];

impl Column {
    /// Every column, in header order.
    pub const ALL: [Column; 5] = [
        Column::Title,
        Column::Artist,
        Column::Album,
        Column::Year,
        Column::Length,
    ];

    /// Final comparison applied when every chosen key ties.
    pub const TIE_BREAK: Column = Column::Artist;

    fn def(self) -> &'static ColumnDef {
        &COLUMNS[self as usize]
    }

    /// Header text for this column.
    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn value(self, track: &Track) -> FieldValue<'_> {
        (self.def().value)(track)
    }

    /// Ascending comparison of two tracks on this column alone.
    ///
    /// Text compares by raw byte order, year as an integer and length by total
    /// elapsed time.
    pub fn compare(self, a: &Track, b: &Track) -> Ordering {
        self.value(a).cmp(&self.value(b))
    }

    /// Resolve a header name, ignoring case.
    pub fn from_header(name: &str) -> Option<Column> {
        COLUMNS
            .iter()
            .find(|def| def.name.eq_ignore_ascii_case(name))
            .map(|def| def.column)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Header names in declared order.
pub fn headers() -> Vec<&'static str> {
    Column::ALL.iter().map(|c| c.name()).collect()
}
