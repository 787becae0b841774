/// Utility functions for formatting monitor output
use time::{format_description, OffsetDateTime};

use crate::models::{Sample, StatsSummary};

/// Column header matching the layout of [`format_status_line`]
pub const STATUS_HEADER: &str = " Relative   Absolute    Minimum    Maximum     Average";

/// Format a timestamp for human-readable logging
///
/// Converts an OffsetDateTime to DD.MM.YYYY - HH:MM:SS format
/// Falls back to default string representation if formatting fails.
pub fn format_datetime(dt: &OffsetDateTime) -> String {
    let format = format_description::parse("[day].[month].[year] - [hour]:[minute]:[second]")
        .expect("Failed to create format description");
    dt.format(&format).unwrap_or_else(|_| dt.to_string())
}

/// Render one sample plus the running statistics as a fixed-width line
///
/// The line ends with a carriage return so successive samples overwrite
/// each other in place on the terminal.
pub fn format_status_line(sample: &Sample, summary: &StatsSummary) -> String {
    format!(
        " {:5.1} dBm  {:6.2} {}    {:5.1} dBm  {:5.1} dBm  {:5.1} dBm\r",
        sample.dbm,
        sample.abs_level,
        sample.abs_unit.tag(),
        summary.min_dbm,
        summary.max_dbm,
        summary.avg_dbm,
    )
}
