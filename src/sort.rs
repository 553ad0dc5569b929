//! Cascading multi-key ordering of tracks.
//!
//! `keys` holds the priority stack of chosen columns; `sorter` owns the record
//! set and reorders it in place through the [`RecordOrder`] seam.

mod keys;
mod sorter;

pub use keys::KeyStack;
pub use sorter::{RecordOrder, TrackSorter};
