//! # Circles
//!
//! Plain text description of a circle set. Every record line holds whitespace-separated numbers,
//! either `x y radius` ([`CircleFormat::Positional`], the id is the position of the record) or
//! `id x y radius` ([`CircleFormat::WithIds`]). All values are parsed as floating point; an id
//! must be a non-negative integral value.
//!
//! [`CircleWriter`] emits an optional comment, a caption line naming the columns and one record
//! per circle. The caption is a comment line, so written files can be read back directly.

use std::path::Path;

use fxhash::FxHashSet;
use num::ToPrimitive;

use super::*;
use crate::gens::Circle;

/// Column layout of a circle file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CircleFormat {
    /// `x y radius`, circles are numbered by their record position
    #[default]
    Positional,
    /// `id x y radius`
    WithIds,
}

impl CircleFormat {
    /// Caption line written before the records
    fn caption(self) -> &'static str {
        match self {
            CircleFormat::Positional => "X Y Rad",
            CircleFormat::WithIds => "ID X Y Rad",
        }
    }
}

/// A reader for circle files
#[derive(Debug, Clone)]
pub struct CircleReader {
    format: CircleFormat,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for CircleReader {
    fn default() -> Self {
        Self {
            format: CircleFormat::default(),
            comment_identifier: "#".to_string(),
        }
    }
}

impl CircleReader {
    /// Creates a new (default) reader for positional records
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the expected column layout
    pub fn format(mut self, format: CircleFormat) -> CircleReader {
        self.format = format;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> CircleReader {
        self.comment_identifier = c.into();
        self
    }

    /// Reads all circles in record order.
    ///
    /// # Errors
    /// [`GraphError::MalformedRecord`] on a wrong number of columns, a non-numeric or non-finite
    /// value, an invalid id or an id that was already used in a previous line
    pub fn try_read_circles<R: BufRead>(&self, reader: R) -> Result<Vec<Circle>> {
        let mut circles = Vec::new();
        let mut ids = FxHashSet::default();

        for record in RecordLines::new(reader, &self.comment_identifier) {
            let (line, content) = record?;
            let mut parts = content.split_whitespace();

            let id = match self.format {
                CircleFormat::Positional => circles.len() as Node,
                CircleFormat::WithIds => {
                    let value: f64 = parse_next_value!(parts, line, "circle id");
                    let id = value.to_u32().filter(|_| value.fract() == 0.0);
                    raise_error_unless!(id.is_some(), line, "Invalid circle id {value}.");
                    id.unwrap_or_default()
                }
            };

            let x: f64 = parse_next_value!(parts, line, "x coordinate");
            let y: f64 = parse_next_value!(parts, line, "y coordinate");
            let radius: f64 = parse_next_value!(parts, line, "radius");
            expect_end_of_line!(parts, line);

            let circle = Circle::new(id, x, y, radius);
            raise_error_unless!(circle.is_finite(), line, "Circle values must be finite.");
            raise_error_unless!(ids.insert(id), line, "Duplicate circle id {id}.");

            if radius <= 0.0 {
                tracing::warn!(line, id, radius, "circle with non-positive radius");
            }
            circles.push(circle);
        }

        tracing::debug!(circles = circles.len(), format = ?self.format, "read circles");
        Ok(circles)
    }

    /// Reads all circles of a file (see [`CircleReader::try_read_circles`])
    ///
    /// # Errors
    /// [`GraphError::FileNotFound`] if `path` does not exist
    pub fn try_read_circles_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Circle>> {
        self.try_read_circles(open_file(path.as_ref())?)
    }
}

/// A writer for circle files
#[derive(Debug, Clone, Default)]
pub struct CircleWriter {
    format: CircleFormat,
    /// Optional free-text comment written as first line
    comment: Option<String>,
}

impl CircleWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the column layout
    pub fn format(mut self, format: CircleFormat) -> CircleWriter {
        self.format = format;
        self
    }

    /// Sets a comment that is written as first line (prefixed by `#`)
    pub fn comment<S: Into<String>>(mut self, comment: S) -> CircleWriter {
        self.comment = Some(comment.into());
        self
    }

    /// Writes all circles in the given order.
    /// In the positional format, ids are not written and reading assigns positions instead.
    pub fn try_write_circles<W: Write>(&self, circles: &[Circle], mut writer: W) -> Result<()> {
        if let Some(comment) = &self.comment {
            for line in comment.lines() {
                writeln!(writer, "#{line}")?;
            }
        }
        writeln!(writer, "#{}", self.format.caption())?;

        for circle in circles {
            if self.format == CircleFormat::WithIds {
                write!(writer, "{} ", circle.id)?;
            }
            writeln!(writer, "{} {} {}", circle.x, circle.y, circle.radius)?;
        }

        tracing::debug!(circles = circles.len(), format = ?self.format, "wrote circles");
        Ok(())
    }

    /// Writes all circles to a file, overwriting an existing one
    pub fn try_write_circles_file<P: AsRef<Path>>(&self, circles: &[Circle], path: P) -> Result<()> {
        let mut writer = create_file(path.as_ref())?;
        self.try_write_circles(circles, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::CircleGraph;

    #[test]
    fn read_positional() {
        let input = "#my circles\n#X Y Rad\n0 0 1\n1.5 0.0 1\n\n  2e0 -1 0.25\n";
        let circles = CircleReader::new().try_read_circles(input.as_bytes()).unwrap();

        assert_eq!(
            circles,
            vec![
                Circle::new(0, 0.0, 0.0, 1.0),
                Circle::new(1, 1.5, 0.0, 1.0),
                Circle::new(2, 2.0, -1.0, 0.25),
            ]
        );
    }

    #[test]
    fn read_with_ids() {
        let input = "#ID X Y Rad\n7 0 0 1\n3.0 1 1 2\n";
        let circles = CircleReader::new()
            .format(CircleFormat::WithIds)
            .try_read_circles(input.as_bytes())
            .unwrap();

        assert_eq!(circles.iter().map(|c| c.id).collect::<Vec<_>>(), vec![7, 3]);
        assert_eq!(circles[1].center(), (1.0, 1.0));
    }

    #[test]
    fn write_caption_and_records() {
        let circles = [Circle::new(4, 0.5, -2.0, 1.0), Circle::new(9, 3.0, 0.0, 0.75)];

        let mut buffer = Vec::new();
        CircleWriter::new()
            .format(CircleFormat::WithIds)
            .comment("two circles")
            .try_write_circles(&circles, &mut buffer)
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "#two circles\n#ID X Y Rad\n4 0.5 -2 1\n9 3 0 0.75\n"
        );

        let mut buffer = Vec::new();
        CircleWriter::new().try_write_circles(&circles, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "#X Y Rad\n0.5 -2 1\n3 0 0.75\n");
    }

    #[test]
    fn malformed_records() {
        let positional = CircleReader::new();
        let with_ids = CircleReader::new().format(CircleFormat::WithIds);

        for (reader, input, line) in [
            (&positional, "0 0 1\n0 0\n", 2),
            (&positional, "0 0 1 1\n", 1),
            (&positional, "#c\n0 zero 1\n", 2),
            (&positional, "0 0 inf\n", 1),
            (&with_ids, "0 0 0 1\n0 1 1 1\n", 2),
            (&with_ids, "1.5 0 0 1\n", 1),
            (&with_ids, "-1 0 0 1\n", 1),
            (&with_ids, "0 0 0\n", 1),
        ] {
            match reader.try_read_circles(input.as_bytes()) {
                Err(GraphError::MalformedRecord { line: l, .. }) => assert_eq!(l, line, "{input:?}"),
                other => panic!("expected malformed record for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("circles.txt");

        assert!(matches!(
            CircleReader::new().try_read_circles_file(&path),
            Err(GraphError::FileNotFound { .. })
        ));
        assert!(matches!(
            CircleGraph::from_file(&path, &CircleReader::new()),
            Err(GraphError::FileNotFound { .. })
        ));
    }

    #[test]
    fn file_round_trip() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("circles.txt");

        for format in [CircleFormat::Positional, CircleFormat::WithIds] {
            let circles = CircleGraph::from_positions((0..30).map(|_| {
                (
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                    rng.random_range(0.1..2.0),
                )
            }));

            circles
                .write_to_file(&path, &CircleWriter::new().format(format).comment("random"))
                .unwrap();
            let read = CircleGraph::from_file(&path, &CircleReader::new().format(format)).unwrap();

            assert_eq!(read.circles(), circles.circles());
            assert!(read.graph().has_same_edge_set(circles.graph()));
        }
    }
}
