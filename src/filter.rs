//! Record normalization and free-text filtering
//!
//! Derives effective dates (term override over record-level defaults),
//! monetary-value labels, and the shared case-insensitive search predicate
//! used by both the activities and organizations views. Result ordering is
//! the fetched collection order; display truncates, export never does.

use crate::models::{ActivityNotification, RegisterNotification};
use chrono::NaiveDate;

/// On-screen result cap; a remainder indicator covers the rest.
pub const DISPLAY_LIMIT: usize = 100;

/// Placeholder shown when no date is available.
pub const NO_DATE_LABEL: &str = "N/A";

/// Effective reporting start: the term's date when present, else the
/// record-level default.
pub fn effective_start(activity: &ActivityNotification) -> Option<&str> {
    activity
        .term
        .as_ref()
        .and_then(|t| t.reporting_start_date.as_deref())
        .or(activity.reporting_start_date.as_deref())
}

/// Effective reporting end, same override rule as [`effective_start`].
pub fn effective_end(activity: &ActivityNotification) -> Option<&str> {
    activity
        .term
        .as_ref()
        .and_then(|t| t.reporting_end_date.as_deref())
        .or(activity.reporting_end_date.as_deref())
}

/// Format a wire date (`YYYY-MM-DD`, possibly with a time suffix) as
/// `d.M.yyyy`. Unparseable input passes through raw rather than failing
/// the render.
pub fn display_date(date: Option<&str>) -> String {
    match date {
        None => NO_DATE_LABEL.to_string(),
        Some(raw) => {
            let day = raw.get(..10).unwrap_or(raw);
            match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
                Ok(parsed) => parsed.format("%-d.%-m.%Y").to_string(),
                Err(_) => raw.to_string(),
            }
        }
    }
}

/// `"start - end"` when both dates exist, otherwise the no-date label.
pub fn period_label(activity: &ActivityNotification) -> String {
    match (effective_start(activity), effective_end(activity)) {
        (Some(start), Some(end)) => {
            format!("{} - {}", display_date(Some(start)), display_date(Some(end)))
        }
        _ => NO_DATE_LABEL.to_string(),
    }
}

/// Case-insensitive substring match for activities: company name, any
/// topic's free-text subject, or any topic's title. An empty needle matches
/// everything.
pub fn matches_activity(activity: &ActivityNotification, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    if activity.company_name.to_lowercase().contains(needle_lower) {
        return true;
    }
    activity.topics.iter().any(|topic| {
        topic
            .contact_topic_other
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(needle_lower))
            || topic
                .title
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(needle_lower))
    })
}

/// Match for organizations: company name (case-folded) or business id
/// (raw containment of the lowered needle; business ids are numeric enough
/// that folding the field is unnecessary).
pub fn matches_organization(org: &RegisterNotification, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    org.company_name.to_lowercase().contains(needle_lower)
        || org.company_id.contains(needle_lower)
}

/// Filter activities by a free-text search term, preserving collection order.
pub fn filter_activities<'a>(
    activities: &'a [ActivityNotification],
    term: &str,
) -> Vec<&'a ActivityNotification> {
    let needle = term.to_lowercase();
    activities
        .iter()
        .filter(|a| matches_activity(a, &needle))
        .collect()
}

/// Filter organizations by the same search box semantics.
pub fn filter_organizations<'a>(
    organizations: &'a [RegisterNotification],
    term: &str,
) -> Vec<&'a RegisterNotification> {
    let needle = term.to_lowercase();
    organizations
        .iter()
        .filter(|o| matches_organization(o, &needle))
        .collect()
}

/// The first page of a filtered result set plus the count left off-screen.
///
/// Truncation only ever affects display; export always receives the full
/// filtered set.
#[derive(Debug, Clone, Copy)]
pub struct DisplayPage<'a, T> {
    pub visible: &'a [T],
    pub remainder: usize,
}

/// Truncate to the display limit, reporting how many results were cut.
pub fn display_page<T>(items: &[T]) -> DisplayPage<'_, T> {
    let shown = items.len().min(DISPLAY_LIMIT);
    DisplayPage {
        visible: &items[..shown],
        remainder: items.len() - shown,
    }
}
