// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Loader for the Burmeister `.cxt` context file format.
//!
//! The format, line by line (blank lines are skipped anywhere):
//!
//! ```text
//! B               marker/header line, content ignored
//! 3               object count N
//! 2               attribute count M
//! <N object names, one per line>
//! <M attribute names, one per line>
//! <N rows of M characters; 'X' = object has attribute, '.' = does not>
//! ```
//!
//! Only the first M characters of a relation row are read; any character
//! other than 'X' counts as absent. Declared counts are validated against
//! the lines actually supplied: a file announcing more objects or
//! attributes than it provides fails fast with a descriptive error
//! instead of reading past the end of the data.

use crate::context::FormalContext;
use crate::sets::BitSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Failures while loading a `.cxt` context file.
#[derive(Debug, Error)]
pub enum CxtError {
    /// The source cannot be opened or read at all.
    #[error("cannot read context file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The object or attribute count line is missing entirely.
    #[error("missing {what} count line")]
    MissingCount { what: &'static str },

    /// The object or attribute count line is not a non-negative integer.
    #[error("bad {what} count: '{value}'")]
    BadCount { what: &'static str, value: String },

    /// Fewer name lines than the declared counts require.
    #[error("expected {expected} {what} names, found only {found}")]
    TruncatedNames {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Fewer relation rows than the declared object count requires.
    #[error("expected {expected} relation rows, found only {found}")]
    TruncatedRows { expected: usize, found: usize },

    /// A relation row with fewer characters than the attribute count.
    #[error("relation row {row} has {found} columns, expected {expected}")]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Load a formal context from a `.cxt` file on disk.
pub fn load_context(path: impl AsRef<Path>) -> Result<FormalContext, CxtError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CxtError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_context(BufReader::new(file)).map_err(|err| match err {
        // Attach the path to read errors discovered mid-file.
        CxtError::Io { source, .. } => CxtError::Io {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

/// Parse a formal context from any buffered reader.
///
/// This is the whole loader; [`load_context`] only adds file opening.
/// Tests parse contexts straight from string literals through this.
pub fn parse_context(reader: impl BufRead) -> Result<FormalContext, CxtError> {
    let mut lines = NonBlankLines::new(reader);

    // Header/marker line, ignored.
    lines.next_line()?;

    let object_count = parse_count(&mut lines, "object")?;
    let attribute_count = parse_count(&mut lines, "attribute")?;

    let object_names = read_names(&mut lines, "object", object_count)?;
    let attribute_names = read_names(&mut lines, "attribute", attribute_count)?;

    let mut incidence_rows = Vec::with_capacity(object_count);
    for row_index in 0..object_count {
        let line = lines
            .next_line()?
            .ok_or(CxtError::TruncatedRows {
                expected: object_count,
                found: row_index,
            })?;
        incidence_rows.push(parse_row(&line, row_index, attribute_count)?);
    }

    Ok(FormalContext::new(
        object_names,
        attribute_names,
        incidence_rows,
    ))
}

fn parse_count(lines: &mut NonBlankLines<impl BufRead>, what: &'static str) -> Result<usize, CxtError> {
    let line = lines
        .next_line()?
        .ok_or(CxtError::MissingCount { what })?;
    line.trim().parse().map_err(|_| CxtError::BadCount {
        what,
        value: line.trim().to_string(),
    })
}

fn read_names(
    lines: &mut NonBlankLines<impl BufRead>,
    what: &'static str,
    expected: usize,
) -> Result<Vec<String>, CxtError> {
    let mut names = Vec::with_capacity(expected);
    for found in 0..expected {
        match lines.next_line()? {
            Some(line) => names.push(line.trim_end().to_string()),
            None => {
                return Err(CxtError::TruncatedNames {
                    what,
                    expected,
                    found,
                })
            }
        }
    }
    Ok(names)
}

fn parse_row(line: &str, row: usize, attribute_count: usize) -> Result<BitSet, CxtError> {
    let cells: Vec<char> = line.trim_end_matches(['\r', '\n']).chars().collect();
    if cells.len() < attribute_count {
        return Err(CxtError::ShortRow {
            row,
            expected: attribute_count,
            found: cells.len(),
        });
    }

    let mut bits = BitSet::empty(attribute_count);
    for (a, &c) in cells.iter().take(attribute_count).enumerate() {
        if c == 'X' {
            bits.insert(a);
        }
    }
    Ok(bits)
}

/// Line reader that skips blank lines, per the format.
struct NonBlankLines<R> {
    reader: R,
}

impl<R: BufRead> NonBlankLines<R> {
    fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Next non-blank line, or None at end of input.
    fn next_line(&mut self) -> Result<Option<String>, CxtError> {
        loop {
            let mut buffer = String::new();
            let read = self
                .reader
                .read_line(&mut buffer)
                .map_err(|source| CxtError::Io {
                    path: String::new(),
                    source,
                })?;
            if read == 0 {
                return Ok(None);
            }
            if !buffer.trim().is_empty() {
                return Ok(Some(buffer));
            }
        }
    }
}
