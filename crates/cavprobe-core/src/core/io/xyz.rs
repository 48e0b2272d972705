use crate::core::io::traits::{FrameStream, TrajectorySource};
use crate::core::models::atom::{AtomRecord, Species};
use crate::core::models::frame::Frame;
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("Cannot open trajectory '{path}': {source}", path = path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed frame {frame} (line {line}): {kind}")]
    MalformedFrame {
        frame: usize,
        line: usize,
        kind: XyzParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum XyzParseErrorKind {
    #[error("Invalid atom count '{0}'")]
    InvalidAtomCount(String),
    #[error("Frame ends before its comment line")]
    MissingComment,
    #[error("Frame declares {expected} atoms but only {found} were read")]
    Truncated { expected: usize, found: usize },
    #[error("Atom line needs a species and three coordinates (got '{0}')")]
    MissingFields(String),
    #[error("Invalid coordinate '{0}'")]
    InvalidCoordinate(String),
}

/// Streams frames from an XYZ trajectory.
///
/// Each frame is an atom-count line, a comment line, and that many
/// `<species> <x> <y> <z>` lines; columns after the coordinates are ignored.
/// [`XyzReader::next_frame`] reports malformed input as an error, while the
/// [`Iterator`] implementation logs it and ends the stream, keeping every frame read
/// before it.
pub struct XyzReader<R> {
    reader: R,
    line_number: usize,
    frames_read: usize,
    finished: bool,
    buffer: String,
}

impl<R: BufRead> XyzReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            frames_read: 0,
            finished: false,
            buffer: String::new(),
        }
    }

    /// Number of complete frames produced so far.
    pub fn frames_read(&self) -> usize {
        self.frames_read
    }

    fn read_line(&mut self) -> Result<bool, XyzError> {
        self.buffer.clear();
        let bytes = self.reader.read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        Ok(true)
    }

    fn malformed(&self, kind: XyzParseErrorKind) -> XyzError {
        XyzError::MalformedFrame {
            frame: self.frames_read + 1,
            line: self.line_number,
            kind,
        }
    }

    /// Reads the next frame.
    ///
    /// Returns `Ok(None)` at the end of the input. A blank atom-count line is treated as
    /// the end of the input as well.
    ///
    /// # Errors
    ///
    /// Returns [`XyzError::MalformedFrame`] for an unparsable count or atom line or a
    /// truncated frame, and [`XyzError::Io`] if reading fails.
    pub fn next_frame(&mut self) -> Result<Option<Frame>, XyzError> {
        if !self.read_line()? {
            return Ok(None);
        }
        let count_str = self.buffer.trim();
        if count_str.is_empty() {
            debug!(line = self.line_number, "Blank atom-count line, ending trajectory.");
            return Ok(None);
        }
        let atom_count: usize = count_str
            .parse()
            .map_err(|_| self.malformed(XyzParseErrorKind::InvalidAtomCount(count_str.into())))?;

        if !self.read_line()? {
            return Err(self.malformed(XyzParseErrorKind::MissingComment));
        }
        let comment = self.buffer.trim_end_matches(['\r', '\n']).to_string();

        let mut atoms = Vec::with_capacity(atom_count);
        for found in 0..atom_count {
            if !self.read_line()? {
                return Err(self.malformed(XyzParseErrorKind::Truncated {
                    expected: atom_count,
                    found,
                }));
            }
            let atom = self.parse_atom_line()?;
            atoms.push(atom);
        }

        self.frames_read += 1;
        Ok(Some(Frame::new(comment, atoms)))
    }

    fn parse_atom_line(&self) -> Result<AtomRecord, XyzError> {
        let line = self.buffer.trim();
        let mut fields = line.split_whitespace();
        let (Some(label), Some(x), Some(y), Some(z)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(self.malformed(XyzParseErrorKind::MissingFields(line.into())));
        };

        let species = Species::from_label(label);
        let parse_coord = |value: &str| -> Result<f64, XyzError> {
            value
                .parse()
                .map_err(|_| self.malformed(XyzParseErrorKind::InvalidCoordinate(value.into())))
        };

        Ok(AtomRecord::new(
            species,
            Point3::new(parse_coord(x)?, parse_coord(y)?, parse_coord(z)?),
        ))
    }
}

impl<R: BufRead> Iterator for XyzReader<R> {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_frame() {
            Ok(Some(frame)) => Some(frame),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                warn!(
                    frames_read = self.frames_read,
                    "Trajectory stream ended early: {}", e
                );
                self.finished = true;
                None
            }
        }
    }
}

/// An XYZ trajectory file, re-read from the start every time it is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XyzTrajectory {
    path: PathBuf,
}

impl XyzTrajectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrajectorySource for XyzTrajectory {
    fn open(&self) -> Result<FrameStream<'_>, XyzError> {
        let file = File::open(&self.path).map_err(|source| XyzError::Open {
            path: self.path.clone(),
            source,
        })?;
        debug!("Opened trajectory {:?}", self.path);
        Ok(Box::new(XyzReader::new(BufReader::new(file))))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
