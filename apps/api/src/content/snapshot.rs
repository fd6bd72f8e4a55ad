//! Fetch orchestration: one request per topic, all in flight together, each
//! failure contained to its own topic.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::content::source::ContentSource;
use crate::content::topic::Topic;

/// The result set of one full load. Always holds exactly the 8 topic keys;
/// `None` marks a topic whose fetch failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContentSnapshot {
    slices: BTreeMap<Topic, Option<Vec<Value>>>,
}

impl ContentSnapshot {
    /// Builds a snapshot from per-topic results. Topics missing from
    /// `results` are recorded as failed.
    pub fn from_results(results: impl IntoIterator<Item = (Topic, Option<Vec<Value>>)>) -> Self {
        let mut slices: BTreeMap<Topic, Option<Vec<Value>>> =
            Topic::ALL.iter().map(|t| (*t, None)).collect();
        slices.extend(results);
        Self { slices }
    }

    pub fn slice(&self, topic: Topic) -> Option<&[Value]> {
        self.slices.get(&topic).and_then(|s| s.as_deref())
    }

    pub fn failed_topics(&self) -> Vec<Topic> {
        self.slices
            .iter()
            .filter(|(_, slice)| slice.is_none())
            .map(|(topic, _)| *topic)
            .collect()
    }
}

async fn fetch_isolated(source: &dyn ContentSource, topic: Topic) -> (Topic, Option<Vec<Value>>) {
    match source.fetch(topic).await {
        Ok(records) => {
            debug!(%topic, count = records.len(), "topic fetched");
            (topic, Some(records))
        }
        Err(e) => {
            warn!(%topic, "error fetching topic data: {e}");
            (topic, None)
        }
    }
}

/// Fetches all 8 topics concurrently and joins them into one snapshot.
/// Never fails: a topic that cannot be fetched is simply `None`.
pub async fn load_snapshot(source: &dyn ContentSource) -> ContentSnapshot {
    let (sidebar, about, skills, projects, experience, education, certifications, contact_form) = tokio::join!(
        fetch_isolated(source, Topic::Sidebar),
        fetch_isolated(source, Topic::About),
        fetch_isolated(source, Topic::Skills),
        fetch_isolated(source, Topic::Projects),
        fetch_isolated(source, Topic::Experience),
        fetch_isolated(source, Topic::Education),
        fetch_isolated(source, Topic::Certifications),
        fetch_isolated(source, Topic::ContactForm),
    );

    let snapshot = ContentSnapshot::from_results([
        sidebar,
        about,
        skills,
        projects,
        experience,
        education,
        certifications,
        contact_form,
    ]);

    let failed = snapshot.failed_topics();
    info!(failed = failed.len(), "content snapshot loaded");
    snapshot
}
