use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tracksort/config.toml` or `~/.config/tracksort/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKSORT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub table: TableSettings,
    pub session: SessionSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Cells added after each column's widest cell.
    pub padding: usize,
    /// Minimum cell width before padding is added.
    pub min_width: usize,
    /// Character used to pad cells.
    pub pad_char: char,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            padding: 2,
            min_width: 0,
            pad_char: ' ',
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Line printed when input names no known header.
    pub rejection_message: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            rejection_message: "there is no such header".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// TOML file of `[[track]]` records. The built-in sample set is used when unset.
    pub seed_path: Option<PathBuf>,
}
