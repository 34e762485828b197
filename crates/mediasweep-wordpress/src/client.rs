//! WPGraphQL HTTP client with cursor pagination.

use crate::error::{WordPressError, WordPressResult};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Fixed page size for the `mediaItems` query.
///
/// Must match the `first:` argument in [`MEDIA_ITEMS_QUERY`].
pub const PAGE_SIZE: u32 = 100;

/// GraphQL document for fetching media item source URLs, one page at a time.
const MEDIA_ITEMS_QUERY: &str = r"
query GetAllMediaItems($after: String) {
  mediaItems(first: 100, after: $after) {
    nodes {
      sourceUrl
    }
    pageInfo {
      hasNextPage
      endCursor
    }
  }
}
";

/// A single media item as returned by the endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaNode {
    /// Public URL of the stored image. Absent for broken attachments.
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MediaItemsConnection {
    #[serde(default)]
    nodes: Vec<MediaNode>,
    #[serde(rename = "pageInfo")]
    page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    media_items: Option<MediaItemsConnection>,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

/// Outcome of a full inventory fetch.
///
/// `complete` is false when the pagination loop was aborted by a non-success
/// HTTP status; `nodes` then holds the pages gathered before the abort.
#[derive(Debug, Clone)]
pub struct MediaFetch {
    pub nodes: Vec<MediaNode>,
    pub complete: bool,
    pub pages: u32,
}

/// HTTP client for a WPGraphQL endpoint.
#[derive(Debug, Clone)]
pub struct WordPressClient {
    endpoint: String,
    http_client: Client,
}

impl WordPressClient {
    /// Create a new client for the given GraphQL endpoint URL.
    pub fn new(endpoint: &str) -> WordPressResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("mediasweep/0.1")
            .build()
            .map_err(|e| {
                WordPressError::InvalidConfig(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self::with_http_client(endpoint, http_client))
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(endpoint: &str, http_client: Client) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// The configured endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch every media page the endpoint will serve.
    ///
    /// Pages are requested sequentially following the `endCursor` token
    /// until `hasNextPage` is false. A non-success HTTP status aborts the
    /// loop immediately and the partial result is returned with
    /// `complete = false`; transport and parse failures propagate as errors.
    pub async fn fetch_all_media(&self) -> WordPressResult<MediaFetch> {
        let mut nodes = Vec::new();
        let mut after: Option<String> = None;
        let mut pages: u32 = 0;

        loop {
            match self.fetch_media_page(after.as_deref()).await {
                Ok(connection) => {
                    pages += 1;
                    debug!(
                        page = pages,
                        fetched = connection.nodes.len(),
                        has_next = connection.page_info.has_next_page,
                        "Fetched media page"
                    );
                    nodes.extend(connection.nodes);

                    if !connection.page_info.has_next_page {
                        return Ok(MediaFetch {
                            nodes,
                            complete: true,
                            pages,
                        });
                    }

                    match connection.page_info.end_cursor {
                        Some(cursor) => after = Some(cursor),
                        None => {
                            // hasNextPage without a cursor cannot advance.
                            warn!("Endpoint reported another page but no endCursor, stopping");
                            return Ok(MediaFetch {
                                nodes,
                                complete: false,
                                pages,
                            });
                        }
                    }
                }
                Err(WordPressError::Status { status }) => {
                    error!(
                        status,
                        pages_fetched = pages,
                        items_fetched = nodes.len(),
                        "GraphQL endpoint returned an error status, keeping partial results"
                    );
                    return Ok(MediaFetch {
                        nodes,
                        complete: false,
                        pages,
                    });
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Fetch a single page of media items.
    async fn fetch_media_page(&self, after: Option<&str>) -> WordPressResult<MediaItemsConnection> {
        let body = serde_json::json!({
            "query": MEDIA_ITEMS_QUERY,
            "variables": { "after": after },
        });

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WordPressError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: GraphQlResponse = serde_json::from_str(&body)
            .map_err(|e| WordPressError::Parse(format!("invalid JSON body: {e}")))?;

        parsed
            .data
            .and_then(|d| d.media_items)
            .ok_or_else(|| WordPressError::MissingData {
                detail: parsed
                    .errors
                    .first()
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(String::from),
            })
    }
}
