//! Notion API configuration.

use url::Url;

/// Connection settings for the Notion record service. Credentials are
/// supplied separately (see `HttpRecordClient::from_env`).
#[derive(Debug, Clone)]
pub struct NotionConfig {
    /// Page-creation endpoint.
    pub api_url: Url,
    /// `Notion-Version` header value.
    pub notion_version: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse("https://api.notion.com/v1/pages")
                .expect("default Notion endpoint is a valid URL"),
            notion_version: "2022-06-28".to_string(),
            timeout_secs: 30,
        }
    }
}
