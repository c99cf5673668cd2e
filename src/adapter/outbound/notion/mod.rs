//! Notion publishing adapter.
//!
//! Creates one database page per run and fills it with blocks rendered from
//! the report markdown. The create call carries the first batch of blocks;
//! anything beyond the per-request block cap is appended in follow-up
//! batches. Follow-up batch failures are logged and skipped: a page that's
//! mostly there beats no page at all.

pub mod blocks;

use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::port::outbound::publisher::{PublishedPage, Publisher};

use blocks::{blocks_from_markdown, MAX_BLOCKS_PER_REQUEST};

/// Notion API version header value.
const NOTION_VERSION: &str = "2022-06-28";

/// Pause between child-append batches to stay under the rate limit.
const INTER_BATCH_DELAY: Duration = Duration::from_millis(350);

/// Per-request timeout for workspace calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Notion REST publisher.
#[derive(Debug)]
pub struct NotionPublisher {
    client: Client,
    api_url: String,
    token: String,
    database_id: String,
}

impl NotionPublisher {
    /// Create a publisher for one database.
    #[must_use]
    pub fn new(
        api_url: impl Into<String>,
        token: impl Into<String>,
        database_id: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            token: token.into(),
            database_id: database_id.into(),
        }
    }

    async fn append_batch(&self, page_id: &str, batch: &[Value]) -> Result<()> {
        let url = format!("{}/blocks/{}/children", self.api_url, page_id);
        let response = self
            .client
            .patch(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .timeout(REQUEST_TIMEOUT)
            .json(&json!({ "children": batch }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Publish(format!(
                "block append failed: {status}: {body}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    id: String,
    url: String,
}

/// Page properties for the report database: title, date, and status.
fn page_properties(title: &str, date_iso: &str) -> Value {
    json!({
        "Title": {
            "title": [{ "text": { "content": title } }]
        },
        "Date": {
            "date": { "start": date_iso }
        },
        "Status": {
            "select": { "name": "Published" }
        }
    })
}

/// Footer appended after the report body.
fn footer_blocks(timestamp: &str) -> Vec<Value> {
    vec![
        json!({ "object": "block", "type": "divider", "divider": {} }),
        json!({
            "object": "block",
            "type": "paragraph",
            "paragraph": {
                "rich_text": [{
                    "type": "text",
                    "text": { "content": format!("Generated automatically on {timestamp}") },
                    "annotations": { "italic": true, "color": "gray" }
                }]
            }
        }),
    ]
}

#[async_trait]
impl Publisher for NotionPublisher {
    async fn publish(&self, title: &str, body: &str) -> Result<PublishedPage> {
        let now = Local::now();
        let date_iso = now.format("%Y-%m-%d").to_string();
        let timestamp = now.format("%Y-%m-%d %H:%M:%S").to_string();

        let mut all_blocks = vec![
            json!({
                "object": "block",
                "type": "heading_1",
                "heading_1": {
                    "rich_text": [{ "type": "text", "text": { "content": title } }]
                }
            }),
            json!({ "object": "block", "type": "divider", "divider": {} }),
        ];
        all_blocks.extend(blocks_from_markdown(body));
        all_blocks.extend(footer_blocks(&timestamp));

        debug!(blocks = all_blocks.len(), "rendered report blocks");

        let first: Vec<Value> = all_blocks
            .iter()
            .take(MAX_BLOCKS_PER_REQUEST)
            .cloned()
            .collect();
        let rest = &all_blocks[first.len()..];

        let response = self
            .client
            .post(format!("{}/pages", self.api_url))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .timeout(REQUEST_TIMEOUT)
            .json(&json!({
                "parent": { "database_id": self.database_id },
                "properties": page_properties(title, &date_iso),
                "children": first,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Publish(format!(
                "page create failed: {status}: {body}"
            )));
        }

        let page: PageResponse = response.json().await?;
        info!(page_id = %page.id, "workspace page created");

        for batch in rest.chunks(MAX_BLOCKS_PER_REQUEST) {
            tokio::time::sleep(INTER_BATCH_DELAY).await;
            if let Err(e) = self.append_batch(&page.id, batch).await {
                warn!(error = %e, batch_len = batch.len(), "skipping failed block batch");
            }
        }

        Ok(PublishedPage {
            id: page.id,
            url: page.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_carry_title_date_and_status() {
        let props = page_properties("Daily Brief", "2026-08-07");
        assert_eq!(
            props["Title"]["title"][0]["text"]["content"],
            "Daily Brief"
        );
        assert_eq!(props["Date"]["date"]["start"], "2026-08-07");
        assert_eq!(props["Status"]["select"]["name"], "Published");
    }

    #[test]
    fn footer_is_divider_plus_italic_note() {
        let footer = footer_blocks("2026-08-07 09:00:00");
        assert_eq!(footer.len(), 2);
        assert_eq!(footer[0]["type"], "divider");
        assert_eq!(footer[1]["type"], "paragraph");
        let text = footer[1]["paragraph"]["rich_text"][0].clone();
        assert_eq!(text["annotations"]["italic"], true);
        assert!(text["text"]["content"]
            .as_str()
            .unwrap()
            .contains("2026-08-07 09:00:00"));
    }

    #[test]
    fn page_response_deserialization() {
        let json = r#"{
            "object": "page",
            "id": "abc-123",
            "url": "https://www.notion.so/abc-123",
            "created_time": "2026-08-07T09:00:00.000Z"
        }"#;
        let page: PageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.id, "abc-123");
        assert_eq!(page.url, "https://www.notion.so/abc-123");
    }
}
