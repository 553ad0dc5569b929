use std::borrow::Cow;
use std::io::{BufRead, Write};

use log::{debug, info};

use crate::config::SessionSettings;
use crate::error::Result;
use crate::library::{Column, Track};
use crate::sort::TrackSorter;
use crate::table::Render;

/// What a single input line asks for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// A known header: push it as the new top sort key.
    Key(Column),
    /// A blank line: re-sort and re-render with the keys unchanged.
    Refresh,
    /// Anything else.
    Unknown,
}

impl Input {
    /// Classify a line, ignoring header case. Only the `\n` or `\r\n`
    /// terminator is stripped; any other whitespace is part of the token.
    pub fn parse(line: &str) -> Self {
        let token = line.strip_suffix('\n').unwrap_or(line);
        let token = token.strip_suffix('\r').unwrap_or(token);
        if token.is_empty() {
            return Input::Refresh;
        }
        match Column::from_header(token) {
            Some(column) => Input::Key(column),
            None => Input::Unknown,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Idle,
    Terminated,
}

/// Counts of processed input lines, returned when input runs out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Composes the sorter and a renderer over one line-oriented input stream.
pub struct Session<R> {
    sorter: TrackSorter,
    renderer: R,
    columns: Vec<Column>,
    rejection_message: String,
    state: State,
    summary: Summary,
}

impl<R: Render<Record = Track>> Session<R> {
    pub fn new(tracks: Vec<Track>, renderer: R, settings: &SessionSettings) -> Self {
        Self {
            sorter: TrackSorter::new(tracks),
            renderer,
            columns: Column::ALL.to_vec(),
            rejection_message: settings.rejection_message.clone(),
            state: State::Idle,
            summary: Summary::default(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn sorter(&self) -> &TrackSorter {
        &self.sorter
    }

    /// Render the current order of tracks.
    pub fn render(&self, out: &mut dyn Write) -> Result<()> {
        self.renderer
            .render(out, &self.columns, self.sorter.tracks())?;
        Ok(())
    }

    /// Process one input line. Unknown names print the rejection message and
    /// leave the keys and the order untouched.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Input> {
        let input = Input::parse(line);
        match input {
            Input::Key(column) => {
                self.sorter.add_key(column);
                self.sorter.sort();
                self.render(out)?;
                self.summary.accepted += 1;
            }
            Input::Refresh => {
                self.sorter.sort();
                self.render(out)?;
                self.summary.accepted += 1;
            }
            Input::Unknown => {
                debug!("rejected input {line:?}");
                writeln!(out, "{}", self.rejection_message)?;
                out.flush()?;
                self.summary.rejected += 1;
            }
        }
        Ok(input)
    }

    /// Render once, then handle lines until `input` is exhausted.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and end up rejected.
    pub fn run(&mut self, mut input: impl BufRead, out: &mut dyn Write) -> Result<Summary> {
        self.sorter.sort();
        self.render(out)?;

        let mut buf = Vec::new();
        while self.state == State::Idle {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                self.state = State::Terminated;
                break;
            }
            let line: Cow<'_, str> = String::from_utf8_lossy(&buf);
            self.handle_line(&line, out)?;
        }

        info!(
            "input closed: {} accepted, {} rejected",
            self.summary.accepted, self.summary.rejected
        );
        Ok(self.summary)
    }
}
