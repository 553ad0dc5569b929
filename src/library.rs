//! Track library: the record shape, its column table and seed data.
//!
//! `model` holds `Track`, `columns` the static (name, accessor, comparator)
//! table derived from it, `duration` the elapsed-time text codec used by the
//! `Length` column, and `seed` the built-in and file-backed record sets.

mod columns;
mod duration;
mod model;
pub mod seed;

pub use columns::*;
pub use duration::{format_duration, parse_duration};
pub use model::Track;

#[cfg(test)]
mod tests;
