//! Configuration loader and schema types.
//!
//! Settings only tune presentation and seed data; with no config present the
//! session runs on built-in defaults.

mod load;
mod schema;

pub use schema::*;
