//! Cross-reference resolution for contacted targets
//!
//! Activity records point at people and institutions either by a numeric id
//! into the target registry or by an embedded snapshot taken at notification
//! time. Resolution is id-first: a live registry entry wins unconditionally,
//! even when the snapshot disagrees. The same policy backs card summaries,
//! detail chips, and CSV export; only the presentation of the result differs
//! per surface.

use crate::models::{ActivityNotification, ActivityTarget, TargetInfo, TargetRegistryItem};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder name for a target no fallback step could resolve.
pub const UNKNOWN_TARGET_NAME: &str = "Tuntematon";

/// Lookup table from registry id to the preferred-locale details.
///
/// Built once per fresh registry fetch and shared read-only for the duration
/// of a render or export pass.
#[derive(Debug, Default)]
pub struct TargetLookup {
    by_id: HashMap<i64, TargetInfo>,
}

impl TargetLookup {
    /// Build the table by applying locale selection to each registry item.
    ///
    /// Items with no populated locale (or a blank name) are silently omitted;
    /// references to them resolve later through the fallback chain.
    pub fn build(items: &[TargetRegistryItem]) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        for item in items {
            if let Some(info) = item.localized.select() {
                if !info.name.is_empty() {
                    by_id.insert(item.id, info.clone());
                }
            }
        }
        tracing::debug!(
            registry_items = items.len(),
            resolved = by_id.len(),
            "built target lookup table"
        );
        Self { by_id }
    }

    pub fn get(&self, id: i64) -> Option<&TargetInfo> {
        self.by_id.get(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Which fallback step produced a resolved target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedVia {
    /// Authoritative registry entry found by id.
    Registry,
    /// Embedded notification-time snapshot.
    Embedded,
    /// No step succeeded; sentinel values.
    Unknown,
}

/// Canonical display tuple for a contacted target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTarget {
    pub name: String,
    pub title: String,
    pub organization: String,
    pub via: ResolvedVia,
}

impl ResolvedTarget {
    fn from_info(info: &TargetInfo, via: ResolvedVia) -> Self {
        Self {
            name: info.name.clone(),
            title: info.title.clone().unwrap_or_default(),
            organization: info.organization.clone(),
            via,
        }
    }

    /// The fixed sentinel for an unresolvable reference.
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_TARGET_NAME.to_string(),
            title: String::new(),
            organization: String::new(),
            via: ResolvedVia::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.via == ResolvedVia::Unknown
    }

    /// Chip label for the details view: non-empty segments of
    /// name, title, organization joined with ", ".
    pub fn chip_label(&self) -> String {
        [
            self.name.as_str(),
            self.title.as_str(),
            self.organization.as_str(),
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Cell fragment for CSV export.
    ///
    /// Registry hits carry the organization; embedded snapshots contribute
    /// the bare name; unresolved targets are omitted from export entirely
    /// (the details view shows the sentinel instead).
    pub fn export_cell(&self) -> Option<String> {
        match self.via {
            ResolvedVia::Registry => Some(format!("{} ({})", self.name, self.organization)),
            ResolvedVia::Embedded => Some(self.name.clone()),
            ResolvedVia::Unknown => None,
        }
    }
}

/// Resolve a target reference against the registry lookup.
///
/// 1. `contactedTargetId` present and in the table: that entry wins.
/// 2. Embedded snapshot with at least one populated locale: use it.
/// 3. Otherwise the unknown sentinel.
pub fn resolve_target(target: &ActivityTarget, lookup: &TargetLookup) -> ResolvedTarget {
    if let Some(id) = target.contacted_target_id {
        if let Some(info) = lookup.get(id) {
            return ResolvedTarget::from_info(info, ResolvedVia::Registry);
        }
    }
    if let Some(embedded) = &target.contacted_target {
        if let Some(info) = embedded.localized.select() {
            if !info.name.is_empty() {
                return ResolvedTarget::from_info(info, ResolvedVia::Embedded);
            }
        }
    }
    ResolvedTarget::unknown()
}

/// Resolved names across all topics of a record, for the compact card view.
///
/// Unresolved targets are skipped and names are deduplicated by exact string
/// equality in first-seen order; two distinct ids resolving to the same name
/// collapse into one entry. Export deliberately does not share this dedup.
pub fn resolved_names(activity: &ActivityNotification, lookup: &TargetLookup) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for topic in &activity.topics {
        for target in &topic.contacted_targets {
            let resolved = resolve_target(target, lookup);
            if resolved.is_unknown() {
                continue;
            }
            if !names.contains(&resolved.name) {
                names.push(resolved.name);
            }
        }
    }
    names
}
