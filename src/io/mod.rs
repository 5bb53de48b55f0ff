/*!
# IO

Utilities for reading and writing graphs and circle sets from and to flat text files.

## Formats

- **EdgeList** (SNAP-like): every non-comment line holds two whitespace-separated vertex ids `u v`
  describing the undirected edge `{u, v}`. The writer emits every edge once per direction.
- **Circles**: every non-comment line holds the numeric columns `x y radius` or `id x y radius`.

In both formats, lines starting with the comment identifier (`#` by default) and blank lines are skipped.
Any other line that cannot be parsed aborts reading with [`GraphError::MalformedRecord`] naming the line.

## Traits

- [`GraphReader`] and [`GraphWriter`] are implemented by the configurable readers and writers.
- [`EdgeListRead`] and [`EdgeListWrite`] are shorthands using the default settings.
*/

pub mod circles;
pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Write},
    path::Path,
};

use crate::prelude::*;

pub use circles::*;
pub use edge_list::*;

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// [`GraphError::FileNotFound`] if `path` does not exist, otherwise as [`GraphReader::try_read_graph`].
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(open_file(path.as_ref())?)
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    /// An existing file is overwritten.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = create_file(path.as_ref())?;
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Opens a file for buffered reading, reporting a missing file as [`GraphError::FileNotFound`]
pub(crate) fn open_file(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => {
            tracing::debug!(path = %path.display(), "opened file for reading");
            Ok(BufReader::new(file))
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Err(GraphError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(err) => Err(err.into()),
    }
}

/// Creates (or truncates) a file for buffered writing
pub(crate) fn create_file(path: &Path) -> Result<BufWriter<File>> {
    tracing::debug!(path = %path.display(), "opened file for writing");
    Ok(BufWriter::new(File::create(path)?))
}

/// Iterator over the non-comment, non-blank lines of a reader together with their 1-based line number
pub(crate) struct RecordLines<'a, R> {
    lines: Lines<R>,
    line_number: usize,
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> RecordLines<'a, R> {
    pub(crate) fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            comment_identifier,
        }
    }
}

impl<R: BufRead> Iterator for RecordLines<'_, R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_number += 1;

            match line {
                Err(err) => return Some(Err(err.into())),
                Ok(line)
                    if line.starts_with(self.comment_identifier) || line.trim().is_empty() =>
                {
                    continue;
                }
                Ok(line) => return Some(Ok((self.line_number, line))),
            }
        }
    }
}

/// Shorthand for creating a [`GraphError::MalformedRecord`]
macro_rules! malformed {
    ($line : expr, $($arg : tt)*) => {
        GraphError::MalformedRecord {
            line: $line,
            reason: format!($($arg)*),
        }
    };
}

/// Shorthand for returning `Err(GraphError::MalformedRecord)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $line : expr, $($arg : tt)*) => {
        if !($cond) {
            return Err(malformed!($line, $($arg)*));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $line : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            $line,
            "Premature end of line when parsing {}.",
            $name
        );

        let token = next.unwrap_or_default();
        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(malformed!(
                    $line,
                    "Invalid value {:?}. Cannot parse {}.",
                    token,
                    $name
                ));
            }
        }
    }};
}

/// Returns early if the iterator still holds tokens
macro_rules! expect_end_of_line {
    ($iterator : expr, $line : expr) => {
        if let Some(token) = $iterator.next() {
            return Err(malformed!(
                $line,
                "Unexpected trailing value {:?}.",
                token
            ));
        }
    };
}

use expect_end_of_line;
use malformed;
use parse_next_value;
use raise_error_unless;
