//! Application state wiring the transport, caches, and lookup table
//!
//! Collections are fetched on demand through per-type TTL caches and exposed
//! as immutable `Arc` snapshots. The target lookup table is derived from the
//! targets snapshot exactly once per fresh fetch: rebuilds key off the
//! snapshot's pointer identity and the finished table is swapped in
//! wholesale, so a render pass never observes a half-built table. The
//! organizations collection is only fetched when something actually asks for
//! it.

use crate::api::RegisterApi;
use crate::cache::CollectionCache;
use crate::error::AppError;
use crate::export::{self, ExportOutcome};
use crate::filter;
use crate::models::{ActivityNotification, RegisterNotification, TargetRegistryItem};
use crate::resolver::TargetLookup;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Registry changes rarely; a day of staleness is acceptable.
pub const TARGETS_TTL: Duration = Duration::from_secs(24 * 60 * 60);
/// Activities are the live view; refresh within minutes.
pub const ACTIVITIES_TTL: Duration = Duration::from_secs(5 * 60);
/// Organization registrations sit in between.
pub const ORGANIZATIONS_TTL: Duration = Duration::from_secs(60 * 60);

const KEY_TARGETS: &str = "targets";
const KEY_ACTIVITIES: &str = "activities";
const KEY_ORGANIZATIONS: &str = "organizations";

struct LookupSnapshot {
    source: Arc<Vec<TargetRegistryItem>>,
    lookup: Arc<TargetLookup>,
}

/// Shared application state.
pub struct Explorer {
    api: Arc<dyn RegisterApi>,
    targets: CollectionCache<TargetRegistryItem>,
    activities: CollectionCache<ActivityNotification>,
    organizations: CollectionCache<RegisterNotification>,
    lookup: RwLock<Option<LookupSnapshot>>,
}

impl Explorer {
    pub fn new(api: Arc<dyn RegisterApi>) -> Self {
        Self {
            api,
            targets: CollectionCache::new(TARGETS_TTL),
            activities: CollectionCache::new(ACTIVITIES_TTL),
            organizations: CollectionCache::new(ORGANIZATIONS_TTL),
            lookup: RwLock::new(None),
        }
    }

    /// The target registry snapshot.
    pub async fn targets(&self) -> Result<Arc<Vec<TargetRegistryItem>>, AppError> {
        let api = Arc::clone(&self.api);
        self.targets
            .get_with(KEY_TARGETS, || async move { api.get_targets().await })
            .await
    }

    /// The id-to-info lookup table for the current registry snapshot.
    ///
    /// Rebuilt only when the underlying snapshot changed; repeated calls
    /// within one snapshot's lifetime share the same table.
    pub async fn target_lookup(&self) -> Result<Arc<TargetLookup>, AppError> {
        let targets = self.targets().await?;

        if let Some(snapshot) = self.lookup.read().as_ref() {
            if Arc::ptr_eq(&snapshot.source, &targets) {
                return Ok(Arc::clone(&snapshot.lookup));
            }
        }

        let built = Arc::new(TargetLookup::build(&targets));
        tracing::info!(entries = built.len(), "rebuilt target lookup");
        *self.lookup.write() = Some(LookupSnapshot {
            source: targets,
            lookup: Arc::clone(&built),
        });
        Ok(built)
    }

    /// All activity notifications.
    pub async fn activities(&self) -> Result<Arc<Vec<ActivityNotification>>, AppError> {
        let api = Arc::clone(&self.api);
        self.activities
            .get_with(KEY_ACTIVITIES, || async move {
                api.get_activity_notifications().await
            })
            .await
    }

    /// Activity notifications for one reporting term.
    pub async fn activities_by_term(
        &self,
        term_id: i64,
    ) -> Result<Arc<Vec<ActivityNotification>>, AppError> {
        let api = Arc::clone(&self.api);
        self.activities
            .get_with(&format!("activities:term:{}", term_id), || async move {
                api.get_activity_notifications_by_term(term_id).await
            })
            .await
    }

    /// Organization registrations. Nothing fetches this collection until a
    /// consuming view calls here for the first time.
    pub async fn organizations(&self) -> Result<Arc<Vec<RegisterNotification>>, AppError> {
        let api = Arc::clone(&self.api);
        self.organizations
            .get_with(KEY_ORGANIZATIONS, || async move {
                api.get_register_notifications().await
            })
            .await
    }

    /// Export the full filtered activity set as CSV.
    ///
    /// Operates on the complete filter result, never the truncated display
    /// page. An empty result set is a no-op, not an error.
    pub async fn export_activities(
        &self,
        search_term: &str,
        path: &Path,
    ) -> Result<ExportOutcome, AppError> {
        let activities = self.activities().await?;
        let lookup = self.target_lookup().await?;

        let filtered = filter::filter_activities(&activities, search_term);
        if filtered.is_empty() {
            tracing::info!("export skipped, no matching activities");
            return Ok(ExportOutcome::SkippedEmpty);
        }

        let csv = export::to_csv(&filtered, &lookup);
        export::write_csv(path, &csv)?;
        Ok(ExportOutcome::Written {
            path: path.to_path_buf(),
            rows: filtered.len(),
        })
    }

    /// Drop every cached collection; the next accesses refetch.
    pub fn invalidate_all(&self) {
        self.targets.clear();
        self.activities.clear();
        self.organizations.clear();
        *self.lookup.write() = None;
    }
}
