use std::time::Duration;

use crate::error::Result;

use super::duration::parse_duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: i64,
    pub length: Duration,
}

impl Track {
    /// Build a track whose length is given as elapsed-time text (`"3m38s"`).
    ///
    /// Fails when the length text does not parse; seed data is expected to be
    /// well formed, so callers abort loading on the first bad record.
    pub fn new(title: &str, artist: &str, album: &str, year: i64, length: &str) -> Result<Self> {
        Ok(Self {
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            year,
            length: parse_duration(length)?,
        })
    }
}
