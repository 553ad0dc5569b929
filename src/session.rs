//! Interactive sort session: read column names line by line, re-sort and
//! re-render after each accepted one.

mod model;

pub use model::*;
