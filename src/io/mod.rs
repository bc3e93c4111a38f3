//! Load-list parsing and schedule output.
//!
//! Thin collaborators around the assignment engine: a parser for the
//! whitespace-delimited load-list format and the per-driver schedule
//! line renderer.

mod parser;
mod writer;

pub use parser::{parse_loads, ParseError};
pub use writer::{format_schedule, write_assignment};
