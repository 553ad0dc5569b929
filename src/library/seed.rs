//! Initial record sets: the built-in sample tracks or a TOML seed file.
//!
//! Seed file format:
//!
//! ```toml
//! [[track]]
//! title = "Go"
//! artist = "Moby"
//! album = "Moby"
//! year = 1992
//! length = "3m37s"
//! ```
//!
//! Any malformed record fails the whole load.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::LibrarySettings;
use crate::error::{Error, Result};

use super::model::Track;

const SAMPLE: [(&str, &str, &str, i64, &str); 4] = [
    ("Go", "Delilah", "From the Roots Up", 2012, "3m38s"),
    ("Go", "Moby", "Moby", 1992, "3m37s"),
    ("Go Ahead", "Alicia Keys", "As I Am", 2007, "4m36s"),
    ("Ready 2 Go", "Martin Solveig", "Smash", 2011, "4m24s"),
];

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    track: Vec<SeedTrack>,
}

#[derive(Debug, Deserialize)]
struct SeedTrack {
    title: String,
    artist: String,
    album: String,
    year: i64,
    length: String,
}

/// The built-in sample set.
pub fn sample() -> Result<Vec<Track>> {
    SAMPLE
        .iter()
        .map(|&(title, artist, album, year, length)| Track::new(title, artist, album, year, length))
        .collect()
}

/// Parse seed records from TOML text. `path` is only used for error reporting.
pub fn parse(text: &str, path: &Path) -> Result<Vec<Track>> {
    let file: SeedFile = toml::from_str(text).map_err(|source| Error::SeedParse {
        path: path.to_path_buf(),
        source,
    })?;
    file.track
        .iter()
        .map(|t| Track::new(&t.title, &t.artist, &t.album, t.year, &t.length))
        .collect()
}

pub fn load_file(path: &Path) -> Result<Vec<Track>> {
    let text = fs::read_to_string(path).map_err(|source| Error::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text, path)
}

/// Load the configured seed file, or the sample set when none is configured.
pub fn load(settings: &LibrarySettings) -> Result<Vec<Track>> {
    match &settings.seed_path {
        Some(path) => load_file(path),
        None => sample(),
    }
}
