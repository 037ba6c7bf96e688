//! CSV export of filtered activity notifications
//!
//! One row per activity: quoted company, raw effective dates, the topics'
//! subjects joined with "; ", and the resolved target list joined with "; "
//! (id-first resolution, no name dedup, unresolved targets omitted). Fields
//! are double-quoted with embedded quotes doubled per RFC 4180.

use crate::error::AppError;
use crate::filter::{effective_end, effective_start};
use crate::models::ActivityNotification;
use crate::resolver::{resolve_target, TargetLookup};
use std::path::{Path, PathBuf};

/// Default export filename.
pub const EXPORT_FILENAME: &str = "avoimuus-export.csv";

/// Fixed header row. The combined topic column historically carries two
/// header names; the file contract keeps them.
const HEADERS: [&str; 6] = [
    "Company",
    "Start Date",
    "End Date",
    "Topic Type",
    "Topic Description",
    "Targets",
];

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// File written with the given number of data rows.
    Written { path: PathBuf, rows: usize },
    /// Nothing matched the filter; exporting an empty set is a no-op.
    SkippedEmpty,
}

/// Serialize the full filtered set to CSV text, header row included.
/// Lines are separated by `\n` with no trailing newline.
pub fn to_csv(activities: &[&ActivityNotification], lookup: &TargetLookup) -> String {
    let mut lines = Vec::with_capacity(activities.len() + 1);
    lines.push(HEADERS.join(","));
    for activity in activities {
        lines.push(csv_row(activity, lookup));
    }
    tracing::debug!(rows = activities.len(), "serialized csv export");
    lines.join("\n")
}

fn csv_row(activity: &ActivityNotification, lookup: &TargetLookup) -> String {
    let topics = activity
        .topics
        .iter()
        .map(|t| t.subject().unwrap_or_default())
        .collect::<Vec<_>>()
        .join("; ");

    let targets = activity
        .topics
        .iter()
        .flat_map(|t| t.contacted_targets.iter())
        .filter_map(|target| resolve_target(target, lookup).export_cell())
        .collect::<Vec<_>>()
        .join("; ");

    [
        quote(&activity.company_name),
        quote(effective_start(activity).unwrap_or_default()),
        quote(effective_end(activity).unwrap_or_default()),
        quote(&topics),
        quote(&targets),
    ]
    .join(",")
}

/// Double-quote a field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Write CSV content as UTF-8. The file download side effect is the export's
/// only externally observable outcome.
pub fn write_csv(path: &Path, content: &str) -> Result<(), AppError> {
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote export file");
    Ok(())
}
