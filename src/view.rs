//! Render-agnostic view models for cards, details, and organization lists
//!
//! These carry exactly what a front end draws: truncated topic previews,
//! deduplicated contact summaries, formatted labels. Any shell (graphical or
//! the CLI) consumes these rather than re-deriving display rules.

use crate::filter::{display_date, effective_start, period_label};
use crate::models::{ActivityNotification, ActivityTopic, RegisterNotification};
use crate::resolver::{resolve_target, resolved_names, TargetLookup};
use serde::Serialize;

/// Topics previewed on a card.
pub const CARD_TOPIC_LIMIT: usize = 2;
/// Contact names previewed on a card before the "+N" indicator.
pub const CARD_CONTACT_LIMIT: usize = 3;
/// Characters of an organization description shown on its card.
pub const ORG_DESCRIPTION_SNIPPET: usize = 150;

/// One topic line on an activity card.
#[derive(Debug, Clone, Serialize)]
pub struct TopicLine {
    pub subject: Option<String>,
    pub title: Option<String>,
}

/// Compact contact summary: first few resolved names plus overflow count.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSummary {
    pub names: Vec<String>,
    pub more: usize,
}

/// Card for the activities list.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityCard {
    pub id: i64,
    pub company_name: String,
    pub date_label: String,
    pub topics: Vec<TopicLine>,
    pub contacts: ContactSummary,
}

/// Build a card: first topics in insertion order, deduplicated resolved
/// contact names truncated for compact scanning.
pub fn activity_card(activity: &ActivityNotification, lookup: &TargetLookup) -> ActivityCard {
    let topics = activity
        .topics
        .iter()
        .take(CARD_TOPIC_LIMIT)
        .map(|t| TopicLine {
            subject: t.contact_topic_other.clone(),
            title: t.title.clone(),
        })
        .collect();

    let names = resolved_names(activity, lookup);
    let shown = names.len().min(CARD_CONTACT_LIMIT);
    let contacts = ContactSummary {
        more: names.len() - shown,
        names: names.into_iter().take(shown).collect(),
    };

    ActivityCard {
        id: activity.id,
        company_name: activity.company_name.clone(),
        date_label: display_date(effective_start(activity)),
        topics,
        contacts,
    }
}

/// A resolved target chip in the details view.
#[derive(Debug, Clone, Serialize)]
pub struct TargetChip {
    pub label: String,
    pub contact_methods: Vec<String>,
}

/// One topic section in the details view.
#[derive(Debug, Clone, Serialize)]
pub struct TopicDetails {
    pub subject: Option<String>,
    pub title: Option<String>,
    pub type_label: String,
    pub chips: Vec<TargetChip>,
}

/// Full detail overlay content for one activity.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityDetails {
    pub company_name: String,
    pub company_id: String,
    pub period_label: String,
    pub amount_label: String,
    pub topics: Vec<TopicDetails>,
    pub description: Option<String>,
}

fn topic_details(topic: &ActivityTopic, lookup: &TargetLookup) -> TopicDetails {
    let chips = topic
        .contacted_targets
        .iter()
        .map(|target| {
            let resolved = resolve_target(target, lookup);
            TargetChip {
                label: resolved.chip_label(),
                contact_methods: target.contact_methods.clone(),
            }
        })
        .collect();

    // Free-text subject wins; a project reference supplies the subject line
    // when the free-text field is absent.
    let subject = topic
        .contact_topic_other
        .clone()
        .or_else(|| {
            topic
                .contact_topic_project
                .as_ref()
                .and_then(|p| p.name().map(|n| n.to_string()))
        });

    TopicDetails {
        subject,
        title: topic.title.clone(),
        type_label: format!(
            "{} | {}",
            topic.activity_type.as_str(),
            topic.contact_topic_type.as_str()
        ),
        chips,
    }
}

/// Build the details view; every topic appears, in insertion order, and
/// every target renders a chip (the unknown sentinel included).
pub fn activity_details(
    activity: &ActivityNotification,
    lookup: &TargetLookup,
) -> ActivityDetails {
    ActivityDetails {
        company_name: activity.company_name.clone(),
        company_id: activity.company_id.clone(),
        period_label: period_label(activity),
        amount_label: activity.activity_amount.label(),
        topics: activity
            .topics
            .iter()
            .map(|t| topic_details(t, lookup))
            .collect(),
        description: activity.description.clone(),
    }
}

/// Card for the organizations list.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationCard {
    pub id: i64,
    pub company_name: String,
    pub company_id: String,
    pub main_industry: String,
    pub description_snippet: Option<String>,
}

pub fn organization_card(org: &RegisterNotification) -> OrganizationCard {
    let description_snippet = org.description.as_ref().map(|d| {
        if d.chars().count() > ORG_DESCRIPTION_SNIPPET {
            let cut: String = d.chars().take(ORG_DESCRIPTION_SNIPPET).collect();
            format!("{}...", cut)
        } else {
            d.clone()
        }
    });

    OrganizationCard {
        id: org.id,
        company_name: org.company_name.clone(),
        company_id: org.company_id.clone(),
        main_industry: org.main_industry.clone(),
        description_snippet,
    }
}
