use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use crate::library::{Column, Track};

/// Sort keys in priority order: the most recently pushed key is on top and
/// is evaluated first.
///
/// Append-only. Pushing a key that is already present is allowed; the copy
/// nearer the top decides and lower copies never change the outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyStack {
    keys: VecDeque<Column>,
}

impl KeyStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: Column) {
        self.keys.push_front(column);
    }

    /// Keys from highest to lowest priority.
    pub fn iter(&self) -> impl Iterator<Item = Column> + '_ {
        self.keys.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// First non-equal key comparison from the top of the stack, falling back
    /// to [`Column::TIE_BREAK`].
    pub fn compare(&self, a: &Track, b: &Track) -> Ordering {
        self.iter()
            .map(|column| column.compare(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| Column::TIE_BREAK.compare(a, b))
    }
}

/// `Title > Year` from highest to lowest priority, or `(none)`.
impl fmt::Display for KeyStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        for (i, column) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            f.write_str(column.name())?;
        }
        Ok(())
    }
}
