use std::cmp::Ordering;

use log::debug;

use crate::library::{Column, Track};

use super::keys::KeyStack;

/// A total order over records.
pub trait RecordOrder {
    type Record;

    fn compare(&self, a: &Self::Record, b: &Self::Record) -> Ordering;

    /// Stable in-place sort, so fully equal records keep their relative order.
    fn sort(&self, records: &mut [Self::Record]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

impl RecordOrder for KeyStack {
    type Record = Track;

    fn compare(&self, a: &Track, b: &Track) -> Ordering {
        KeyStack::compare(self, a, b)
    }
}

/// Owns the session's tracks and the key stack that orders them.
///
/// Tracks are only ever reordered; none are added or removed after load.
#[derive(Debug)]
pub struct TrackSorter {
    tracks: Vec<Track>,
    keys: KeyStack,
}

impl TrackSorter {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            keys: KeyStack::new(),
        }
    }

    /// Push `column` as the new highest-priority key. Does not re-sort.
    pub fn add_key(&mut self, column: Column) {
        self.keys.push(column);
        debug!("sort keys: {}", self.keys);
    }

    /// Reorder the owned tracks by the current key stack.
    pub fn sort(&mut self) {
        self.keys.sort(&mut self.tracks);
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn keys(&self) -> &KeyStack {
        &self.keys
    }
}
