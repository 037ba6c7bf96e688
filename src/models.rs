//! Domain types for the transparency register's public API
//!
//! These mirror the JSON the API returns (camelCase keys, full collections).
//! The schema is an external contract we do not control, so optionals default
//! and enums tolerate values we have not seen: a malformed record must never
//! fail a whole collection fetch.

use crate::locale::LocalizedInfo;
use serde::{Deserialize, Serialize};

/// One locale's details for a contactable person or institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetInfo {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Entry in the target registry collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRegistryItem {
    pub id: i64,
    #[serde(flatten)]
    pub localized: LocalizedInfo,
}

/// Declared monetary scale of lobbying activity.
///
/// Open on purpose: an unrecognized wire literal survives round-trips and is
/// displayed as-is instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityAmount {
    None,
    Minimal,
    Many,
    Other(String),
}

impl Default for ActivityAmount {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for ActivityAmount {
    fn from(value: String) -> Self {
        match value.as_str() {
            "none" => Self::None,
            "minimal" => Self::Minimal,
            "many" => Self::Many,
            _ => Self::Other(value),
        }
    }
}

impl From<ActivityAmount> for String {
    fn from(value: ActivityAmount) -> Self {
        match value {
            ActivityAmount::None => "none".to_string(),
            ActivityAmount::Minimal => "minimal".to_string(),
            ActivityAmount::Many => "many".to_string(),
            ActivityAmount::Other(raw) => raw,
        }
    }
}

impl ActivityAmount {
    /// Human-readable euro label; unrecognized literals pass through raw.
    pub fn label(&self) -> String {
        match self {
            Self::None => "0 €".to_string(),
            Self::Minimal => "< 10 000 €".to_string(),
            Self::Many => "> 10 000 €".to_string(),
            Self::Other(raw) => raw.clone(),
        }
    }
}

/// How the lobbying contact was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Direct,
    Guidance,
    ContactForCustomer,
    Personal,
    #[serde(other)]
    Unknown,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Guidance => "guidance",
            Self::ContactForCustomer => "contact_for_customer",
            Self::Personal => "personal",
            Self::Unknown => "unknown",
        }
    }
}

/// Whether a topic refers to a tracked project or a free-text subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactTopicType {
    Project,
    Other,
    #[serde(other)]
    Unknown,
}

impl ContactTopicType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}

/// Localized reference to a government project (Hanke).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactTopicProject {
    #[serde(default)]
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

impl ContactTopicProject {
    /// Best available project name, fi first.
    pub fn name(&self) -> Option<&str> {
        self.fi
            .as_deref()
            .or(self.sv.as_deref())
            .or(self.en.as_deref())
    }
}

/// Snapshot of a contacted target taken at notification time.
///
/// Locale-partial and possibly stale; consulted only when the numeric
/// registry reference is absent or dangling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedTarget {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    pub localized: LocalizedInfo,
}

/// Reference to a contacted person or institution within a topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTarget {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacted_target_id: Option<i64>,
    #[serde(default)]
    pub contact_methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacted_target: Option<EmbeddedTarget>,
}

/// Subject entry within an activity notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTopic {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub activity_type: ActivityType,
    pub contact_topic_type: ContactTopicType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_topic_other: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_topic_project: Option<ContactTopicProject>,
    #[serde(default)]
    pub contacted_targets: Vec<ActivityTarget>,
}

impl ActivityTopic {
    /// The human-readable subject line: free-text topic if present, else the
    /// secondary description.
    pub fn subject(&self) -> Option<&str> {
        self.contact_topic_other.as_deref().or(self.title.as_deref())
    }
}

/// Reporting period that overrides an activity's record-level date range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_end_date: Option<String>,
}

/// A company's notification of lobbying activity for a reporting period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityNotification {
    pub id: i64,
    #[serde(default)]
    pub diary_number: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub activity_amount: ActivityAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<Term>,
    #[serde(default)]
    pub topics: Vec<ActivityTopic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_end_date: Option<String>,
}

/// A company's registration in the transparency register.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterNotification {
    pub id: i64,
    #[serde(default)]
    pub diary_number: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_id: String,
    #[serde(default)]
    pub main_industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub registration_date: String,
}
