//! Notion record client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use url::Url;

use crate::domain::{AppError, NotionConfig};
use crate::ports::{OrderRecord, RecordClient, RecordReceipt};

const NOTION_VERSION_HEADER: &str = "Notion-Version";

/// HTTP client for the Notion pages API.
#[derive(Clone)]
pub struct HttpRecordClient {
    api_key: String,
    database_id: String,
    api_url: Url,
    notion_version: String,
    client: Client,
}

impl std::fmt::Debug for HttpRecordClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRecordClient")
            .field("api_url", &self.api_url)
            .field("database_id", &self.database_id)
            .field("notion_version", &self.notion_version)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpRecordClient {
    /// Create a new HTTP client with explicit credentials.
    pub fn new(
        api_key: String,
        database_id: String,
        config: &NotionConfig,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::RecordService(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            database_id,
            api_url: config.api_url.clone(),
            notion_version: config.notion_version.clone(),
            client,
        })
    }

    /// Create from environment variables with default configuration.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_env_with_config(&NotionConfig::default())
    }

    /// Create from environment variables with custom configuration.
    pub fn from_env_with_config(config: &NotionConfig) -> Result<Self, AppError> {
        let api_key = std::env::var("NOTION_API_KEY").map_err(|_| {
            AppError::MissingCredentials("NOTION_API_KEY environment variable not set".into())
        })?;
        let database_id = std::env::var("NOTION_DATABASE_ID").map_err(|_| {
            AppError::MissingCredentials("NOTION_DATABASE_ID environment variable not set".into())
        })?;

        Self::new(api_key, database_id, config)
    }

    fn build_request(&self, record: &OrderRecord) -> CreatePageRequest {
        let mut properties = Map::new();
        properties.insert("Customer Name".into(), title(&record.customer_name));
        properties.insert("Total Stations".into(), number(record.stations.len() as u32));
        properties.insert("POS iPads".into(), number(record.pos_ipads()));
        properties.insert("CDS iPads".into(), number(record.cds_ipads()));
        properties.insert("Total Printers".into(), number(record.placements.len() as u32));
        properties.insert("Complexity".into(), select(&record.complexity.level.to_string()));
        properties.insert("Estimated Time".into(), rich_text(record.complexity.time));
        properties.insert("Router".into(), rich_text(&record.equipment.router));
        if let Some(switch) = &record.equipment.switch {
            properties.insert("Switch".into(), rich_text(switch));
        }
        properties.insert("POS Stands".into(), number(record.peripherals.stands));
        properties.insert("Cash Drawers".into(), number(record.peripherals.drawers));
        properties.insert("Card Readers".into(), number(record.peripherals.readers));

        let children = vec![
            json!({
                "object": "block",
                "type": "heading_2",
                "heading_2": {
                    "rich_text": [{ "type": "text", "text": { "content": "Order Details" } }]
                }
            }),
            json!({
                "object": "block",
                "type": "code",
                "code": {
                    "rich_text": [{ "type": "text", "text": { "content": record.order_text } }],
                    "language": "plain text"
                }
            }),
        ];

        CreatePageRequest {
            parent: Parent { database_id: self.database_id.clone() },
            properties,
            children,
        }
    }
}

#[derive(Debug, Serialize)]
struct CreatePageRequest {
    parent: Parent,
    properties: Map<String, Value>,
    children: Vec<Value>,
}

#[derive(Debug, Serialize)]
struct Parent {
    database_id: String,
}

#[derive(Debug, Deserialize)]
struct CreatePageResponse {
    #[serde(default)]
    url: Option<String>,
}

fn title(text: &str) -> Value {
    json!({ "title": [{ "text": { "content": text } }] })
}

fn rich_text(text: &str) -> Value {
    json!({ "rich_text": [{ "text": { "content": text } }] })
}

fn number(value: u32) -> Value {
    json!({ "number": value })
}

fn select(name: &str) -> Value {
    json!({ "select": { "name": name } })
}

impl RecordClient for HttpRecordClient {
    // A single attempt: success or a reported failure, no retries.
    fn create_order(&self, record: &OrderRecord) -> Result<RecordReceipt, AppError> {
        let request = self.build_request(record);

        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .header(NOTION_VERSION_HEADER, &self.notion_version)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| AppError::RecordService(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let page: CreatePageResponse = response
                .json()
                .map_err(|e| AppError::RecordService(format!("Failed to parse response: {}", e)))?;
            Ok(RecordReceipt { record_url: page.url })
        } else {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::RecordService(format!("API error ({}): {}", status.as_u16(), body)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Snapshot;
    use serial_test::serial;

    fn sample_record() -> OrderRecord {
        let mut snapshot = Snapshot::new();
        snapshot.customer_name = "Waffle Cafe".to_string();
        snapshot.stations[0].has_pos = true;
        OrderRecord::from_snapshot(&snapshot).unwrap()
    }

    fn client_for(server: &mockito::Server) -> HttpRecordClient {
        let config = NotionConfig {
            api_url: Url::parse(&server.url()).unwrap(),
            notion_version: "2022-06-28".to_string(),
            timeout_secs: 1,
        };
        HttpRecordClient::new("fake-key".to_string(), "fake-db".to_string(), &config).unwrap()
    }

    #[test]
    fn create_order_returns_page_url() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_header("authorization", "Bearer fake-key")
            .match_header("notion-version", "2022-06-28")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"url": "https://notion.so/order-1"}"#)
            .create();

        let result = client_for(&server).create_order(&sample_record());
        mock.assert();
        assert_eq!(result.unwrap().record_url.as_deref(), Some("https://notion.so/order-1"));
    }

    #[test]
    fn create_order_tolerates_missing_url() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"object": "page"}"#)
            .create();

        let result = client_for(&server).create_order(&sample_record());
        assert_eq!(result.unwrap().record_url, None);
    }

    #[test]
    fn create_order_surfaces_rejection_without_retrying() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .with_status(400)
            .with_body("validation_error: Customer Name is not a property")
            .expect(1)
            .create();

        let result = client_for(&server).create_order(&sample_record());
        mock.assert();
        match result {
            Err(AppError::RecordService(message)) => {
                assert!(message.contains("400"));
                assert!(message.contains("validation_error"));
            }
            other => panic!("expected RecordService error, got {:?}", other),
        }
    }

    #[test]
    fn request_carries_order_properties_and_text() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_body(mockito::Matcher::AllOf(vec![
                mockito::Matcher::PartialJson(json!({
                    "parent": { "database_id": "fake-db" },
                    "properties": {
                        "Customer Name": { "title": [{ "text": { "content": "Waffle Cafe" } }] },
                        "Total Stations": { "number": 1 },
                        "POS iPads": { "number": 1 },
                        "Complexity": { "select": { "name": "LOW" } }
                    }
                })),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create();

        let result = client_for(&server).create_order(&sample_record());
        mock.assert();
        assert!(result.is_ok());
    }

    #[test]
    fn switch_property_is_omitted_when_absent() {
        let record = sample_record();
        assert_eq!(record.equipment.switch, None);

        let config = NotionConfig::default();
        let client =
            HttpRecordClient::new("key".to_string(), "db".to_string(), &config).unwrap();
        let request = client.build_request(&record);
        assert!(!request.properties.contains_key("Switch"));
        assert!(request.properties.contains_key("Router"));
        assert_eq!(request.children.len(), 2);
    }

    #[test]
    #[serial]
    fn from_env_requires_both_credentials() {
        unsafe {
            std::env::remove_var("NOTION_API_KEY");
            std::env::remove_var("NOTION_DATABASE_ID");
        }
        assert!(matches!(
            HttpRecordClient::from_env(),
            Err(AppError::MissingCredentials(_))
        ));

        unsafe {
            std::env::set_var("NOTION_API_KEY", "secret");
        }
        assert!(matches!(
            HttpRecordClient::from_env(),
            Err(AppError::MissingCredentials(_))
        ));

        unsafe {
            std::env::set_var("NOTION_DATABASE_ID", "db");
        }
        assert!(HttpRecordClient::from_env().is_ok());

        unsafe {
            std::env::remove_var("NOTION_API_KEY");
            std::env::remove_var("NOTION_DATABASE_ID");
        }
    }
}
