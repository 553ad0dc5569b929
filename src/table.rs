//! Aligned text tables.
//!
//! `writer` buffers cells and pads every column to its widest cell on flush;
//! `render` lays tracks out as a header row, a divider row and one row per
//! track.

mod render;
mod writer;

pub use render::{Render, TrackTable, divider};
pub use writer::ColumnWriter;
