//! Common test utilities for AvoimuusExplorer integration tests
//!
//! Provides fixture builders for register records and a static in-memory
//! `RegisterApi` with per-operation fetch counters.

use async_trait::async_trait;
use avoimuus_lib::api::RegisterApi;
use avoimuus_lib::error::AppError;
use avoimuus_lib::locale::LocalizedInfo;
use avoimuus_lib::models::{
    ActivityNotification, ActivityTarget, ActivityTopic, ActivityType, ContactTopicType,
    EmbeddedTarget, RegisterNotification, TargetInfo, TargetRegistryItem, Term,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[allow(dead_code)]
pub fn target_info(name: &str, organization: &str, title: Option<&str>) -> TargetInfo {
    TargetInfo {
        id: 0,
        name: name.to_string(),
        organization: organization.to_string(),
        title: title.map(|t| t.to_string()),
        department: None,
    }
}

#[allow(dead_code)]
pub fn fi_only(info: TargetInfo) -> LocalizedInfo {
    LocalizedInfo {
        fi: Some(info),
        sv: None,
        en: None,
    }
}

#[allow(dead_code)]
pub fn registry_item(id: i64, localized: LocalizedInfo) -> TargetRegistryItem {
    TargetRegistryItem { id, localized }
}

#[allow(dead_code)]
pub fn target_by_id(contacted_target_id: i64) -> ActivityTarget {
    ActivityTarget {
        contacted_target_id: Some(contacted_target_id),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn target_embedded(localized: LocalizedInfo) -> ActivityTarget {
    ActivityTarget {
        contacted_target: Some(EmbeddedTarget {
            id: 0,
            localized,
        }),
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn topic(subject: Option<&str>, title: Option<&str>, targets: Vec<ActivityTarget>) -> ActivityTopic {
    ActivityTopic {
        id: 0,
        title: title.map(|t| t.to_string()),
        activity_type: ActivityType::Direct,
        contact_topic_type: ContactTopicType::Other,
        contact_topic_other: subject.map(|s| s.to_string()),
        contact_topic_project: None,
        contacted_targets: targets,
    }
}

#[allow(dead_code)]
pub fn activity(id: i64, company_name: &str, topics: Vec<ActivityTopic>) -> ActivityNotification {
    let mut a: ActivityNotification = serde_json::from_value(serde_json::json!({
        "id": id,
        "companyName": company_name,
        "activityAmount": "minimal"
    }))
    .expect("minimal activity payload");
    a.topics = topics;
    a
}

#[allow(dead_code)]
pub fn activity_with_dates(
    id: i64,
    company_name: &str,
    record_dates: (Option<&str>, Option<&str>),
    term_dates: Option<(Option<&str>, Option<&str>)>,
) -> ActivityNotification {
    let mut a = activity(id, company_name, Vec::new());
    a.reporting_start_date = record_dates.0.map(|d| d.to_string());
    a.reporting_end_date = record_dates.1.map(|d| d.to_string());
    a.term = term_dates.map(|(start, end)| Term {
        id: 1,
        title: None,
        reporting_start_date: start.map(|d| d.to_string()),
        reporting_end_date: end.map(|d| d.to_string()),
    });
    a
}

#[allow(dead_code)]
pub fn organization(id: i64, company_name: &str, company_id: &str) -> RegisterNotification {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "companyName": company_name,
        "companyId": company_id,
        "mainIndustry": "",
        "registrationDate": "2023-01-01"
    }))
    .expect("minimal organization payload")
}

/// Static `RegisterApi` over fixed collections, counting fetches per
/// operation so tests can assert cache and laziness behavior.
#[derive(Default)]
pub struct StaticApi {
    pub targets: Vec<TargetRegistryItem>,
    pub activities: Vec<ActivityNotification>,
    pub organizations: Vec<RegisterNotification>,
    pub target_fetches: AtomicUsize,
    pub activity_fetches: AtomicUsize,
    pub organization_fetches: AtomicUsize,
}

#[allow(dead_code)]
impl StaticApi {
    pub fn new(
        targets: Vec<TargetRegistryItem>,
        activities: Vec<ActivityNotification>,
        organizations: Vec<RegisterNotification>,
    ) -> Arc<Self> {
        Arc::new(Self {
            targets,
            activities,
            organizations,
            ..Default::default()
        })
    }

    pub fn target_fetch_count(&self) -> usize {
        self.target_fetches.load(Ordering::SeqCst)
    }

    pub fn activity_fetch_count(&self) -> usize {
        self.activity_fetches.load(Ordering::SeqCst)
    }

    pub fn organization_fetch_count(&self) -> usize {
        self.organization_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegisterApi for StaticApi {
    async fn get_targets(&self) -> Result<Vec<TargetRegistryItem>, AppError> {
        self.target_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.targets.clone())
    }

    async fn get_activity_notifications(&self) -> Result<Vec<ActivityNotification>, AppError> {
        self.activity_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.activities.clone())
    }

    async fn get_activity_notifications_by_term(
        &self,
        _term_id: i64,
    ) -> Result<Vec<ActivityNotification>, AppError> {
        self.activity_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.activities.clone())
    }

    async fn get_register_notifications(&self) -> Result<Vec<RegisterNotification>, AppError> {
        self.organization_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.organizations.clone())
    }
}
