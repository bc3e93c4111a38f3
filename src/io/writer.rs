//! Schedule output formatting.

use std::io::{self, Write};

use crate::models::{Assignment, Schedule};

/// Renders one schedule as `[id1,id2,...]`.
///
/// # Examples
///
/// ```
/// use load_dispatch::io::format_schedule;
/// use load_dispatch::models::Schedule;
///
/// let mut schedule = Schedule::new(0);
/// schedule.push_load("4");
/// schedule.push_load("2");
/// assert_eq!(format_schedule(&schedule), "[4,2]");
/// ```
pub fn format_schedule(schedule: &Schedule) -> String {
    format!("[{}]", schedule.load_ids().join(","))
}

/// Writes an assignment, one schedule line per driver, in builder order.
///
/// # Errors
///
/// Propagates any write failure from the underlying writer.
pub fn write_assignment<W: Write>(writer: &mut W, assignment: &Assignment) -> io::Result<()> {
    for schedule in assignment.schedules() {
        writeln!(writer, "{}", format_schedule(schedule))?;
    }
    Ok(())
}
