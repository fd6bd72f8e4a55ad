use std::sync::Arc;

use crate::config::Config;
use crate::contact::store::ContactStore;
use crate::content::ContentSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable submission store. Postgres when DATABASE_URL is set, otherwise in memory.
    pub contacts: Arc<dyn ContactStore>,
    /// Remote content source the page snapshot is loaded from.
    pub content: Arc<dyn ContentSource>,
}

#[cfg(test)]
impl AppState {
    pub fn for_tests(contacts: Arc<dyn ContactStore>, content: Arc<dyn ContentSource>) -> Self {
        Self {
            config: Config {
                content_source_url: "http://content.invalid/exec".into(),
                database_url: None,
                contact_form_action: "/api/contact".into(),
                port: 0,
                rust_log: "debug".into(),
            },
            contacts,
            content,
        }
    }
}
