use chrono::{DateTime, Utc};

use crate::{aggregator::days_since, function_record::FunctionRecord};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Label for functions without any log data.
pub const NO_INVOCATIONS: &str = "N/A (no invocations?)";

/// Label for a modification time the inventory didn't provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Column headers of the full table.
pub const FULL_HEADERS: [&str; 9] = [
    "Region",
    "Function",
    "Memory (MB)",
    "Code Size (MB)",
    "Timeout (seconds)",
    "Runtime",
    "Last Modified",
    "Last Invocation",
    "Description",
];

/// Positions in the full table of the summary columns:
/// region, function, last modified and last invocation.
pub const SUMMARY_COLUMNS: [usize; 4] = [0, 1, 6, 7];

/// Header and rows of rendered text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    /// Column headers
    pub headers: Vec<String>,
    /// One row per function, as wide as the headers
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Keep only the given columns, in the given order.
    pub fn project(&self, columns: &[usize]) -> Table {
        let pick = |row: &Vec<String>| -> Vec<String> {
            columns.iter().map(|&i| row[i].clone()).collect()
        };
        Table {
            headers: pick(&self.headers),
            rows: self.rows.iter().map(pick).collect(),
        }
    }
}

/// The two views of one run.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// Every column, used for the CSV export
    pub full: Table,
    /// Abbreviated view, projected from `full`
    pub summary: Table,
}

impl Report {
    /// Render the sorted records relative to `now`.
    pub fn new(records: &[FunctionRecord], now: DateTime<Utc>) -> Report {
        let full = Table {
            headers: FULL_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: records.iter().map(|r| full_row(r, now)).collect(),
        };
        let summary = full.project(&SUMMARY_COLUMNS);
        Report { full, summary }
    }

    /// Table for the terminal: everything with `show_all`, the summary otherwise.
    pub fn terminal_table(&self, show_all: bool) -> &Table {
        if show_all {
            &self.full
        } else {
            &self.summary
        }
    }
}

fn full_row(record: &FunctionRecord, now: DateTime<Utc>) -> Vec<String> {
    let last_modified = match record.last_modified {
        Some(modified) => time_ago((now - modified).num_days()),
        None => NOT_AVAILABLE.to_owned(),
    };
    let last_invocation = match record.last_invocation {
        Some(millis) => time_ago(days_since(now, millis)),
        None => NO_INVOCATIONS.to_owned(),
    };

    vec![
        record.region.clone(),
        record.name.clone(),
        record.memory_mb.to_string(),
        code_size_mb(record.code_size_bytes),
        record.timeout_seconds.to_string(),
        record.runtime.clone(),
        last_modified,
        last_invocation,
        format!("\"{}\"", record.description),
    ]
}

/// Code size in MB with two decimals.
pub fn code_size_mb(bytes: i64) -> String {
    format!("{:.2}", bytes as f64 / BYTES_PER_MB)
}

/// Render a day count as "Today", "Yesterday" or "N days ago".
/// Negative counts (clock skew) read as today.
pub fn time_ago(days: i64) -> String {
    match days {
        1 => "Yesterday".to_owned(),
        d if d > 1 => format!("{d} days ago"),
        _ => "Today".to_owned(),
    }
}
