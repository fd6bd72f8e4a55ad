//! The remote content source: request a topic, receive a JSON array.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::content::topic::Topic;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content source returned status {0}")]
    Status(u16),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON array, got {0}")]
    NotAnArray(&'static str),
}

/// Anything that can answer "give me the records for this topic".
/// Carried in `AppState` as `Arc<dyn ContentSource>`.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, topic: Topic) -> Result<Vec<Value>, SourceError>;
}

/// Spreadsheet-backed endpoint answering `GET <base>?tab=<topic>`.
#[derive(Clone)]
pub struct HttpContentSource {
    client: Client,
    base_url: String,
}

impl HttpContentSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch(&self, topic: Topic) -> Result<Vec<Value>, SourceError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("tab", topic.tab())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        match serde_json::from_str::<Value>(&body)? {
            Value::Array(records) => Ok(records),
            other => Err(SourceError::NotAnArray(json_kind(&other))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}


#[cfg(test)]
mod tests {
    use axum::{extract::Query, http::StatusCode, routing::get, Router};
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct TabQuery {
        tab: String,
    }

    async fn sheet(Query(q): Query<TabQuery>) -> (StatusCode, String) {
        match q.tab.as_str() {
            "about" => (StatusCode::OK, r#"[{"content":"Hello"}]"#.to_string()),
            "skills" => (StatusCode::OK, "{not json".to_string()),
            "projects" => (StatusCode::OK, r#"{"error":"no sheet"}"#.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, String::new()),
        }
    }

    async fn spawn_sheet_server() -> String {
        let app = Router::new().route("/exec", get(sheet));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/exec")
    }

    #[tokio::test]
    async fn test_fetch_passes_topic_as_tab_query() {
        let source = HttpContentSource::new(spawn_sheet_server().await);
        let records = source.fetch(Topic::About).await.unwrap();
        assert_eq!(records, vec![serde_json::json!({ "content": "Hello" })]);
    }

    #[tokio::test]
    async fn test_fetch_maps_failures() {
        let source = HttpContentSource::new(spawn_sheet_server().await);
        assert!(matches!(
            source.fetch(Topic::Sidebar).await,
            Err(SourceError::Status(500))
        ));
        assert!(matches!(
            source.fetch(Topic::Skills).await,
            Err(SourceError::Parse(_))
        ));
        assert!(matches!(
            source.fetch(Topic::Projects).await,
            Err(SourceError::NotAnArray("object"))
        ));
    }
}
