//! Load-list parser.

use std::fmt;

use crate::models::{Load, Point};

/// A malformed line in a load list.
///
/// Any parse error is fatal for the whole run; no partial load list is
/// returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A data line did not have exactly three fields.
    WrongFieldCount {
        /// 1-based line number.
        line: usize,
        /// Number of whitespace-separated fields found.
        found: usize,
    },
    /// A point field was not of the form `(<x>,<y>)`.
    BadPoint {
        /// 1-based line number.
        line: usize,
        /// The offending field.
        field: String,
    },
    /// A coordinate was not a valid number.
    BadCoordinate {
        /// 1-based line number.
        line: usize,
        /// The offending coordinate text.
        value: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongFieldCount { line, found } => {
                write!(f, "line {line}: expected 3 fields, found {found}")
            }
            ParseError::BadPoint { line, field } => {
                write!(f, "line {line}: malformed point '{field}'")
            }
            ParseError::BadCoordinate { line, value } => {
                write!(f, "line {line}: invalid coordinate '{value}'")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a load list.
///
/// The first line is a header and is skipped. Each following non-blank
/// line holds three whitespace-separated fields:
/// `<id> (<x>,<y>) (<x>,<y>)` — id, pickup, dropoff.
///
/// # Examples
///
/// ```
/// use load_dispatch::io::parse_loads;
///
/// let input = "loadNumber pickup dropoff\n1 (1.0,2.0) (3.0,4.0)\n";
/// let loads = parse_loads(input).expect("well-formed");
/// assert_eq!(loads.len(), 1);
/// assert_eq!(loads[0].id(), "1");
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] naming the offending line on wrong field
/// count, malformed point syntax, or a non-numeric coordinate.
pub fn parse_loads(input: &str) -> Result<Vec<Load>, ParseError> {
    let mut loads = Vec::new();

    // First line is the header.
    for (i, text) in input.lines().enumerate().skip(1) {
        let line = i + 1;
        if text.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(ParseError::WrongFieldCount {
                line,
                found: fields.len(),
            });
        }

        let pickup = parse_point(fields[1], line)?;
        let dropoff = parse_point(fields[2], line)?;
        loads.push(Load::new(fields[0], pickup, dropoff));
    }

    Ok(loads)
}

fn parse_point(field: &str, line: usize) -> Result<Point, ParseError> {
    let cleaned: String = field
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | ' '))
        .collect();

    let Some((x, y)) = cleaned.split_once(',') else {
        return Err(ParseError::BadPoint {
            line,
            field: field.to_string(),
        });
    };

    let x: f64 = x.parse().map_err(|_| ParseError::BadCoordinate {
        line,
        value: x.to_string(),
    })?;
    let y: f64 = y.parse().map_err(|_| ParseError::BadCoordinate {
        line,
        value: y.to_string(),
    })?;

    Ok(Point::new(x, y))
}
