//! Cloudinary Admin API HTTP client (reqwest-based).
//!
//! Covers the two Admin API operations the reconcile stage needs: listing
//! uploaded image resources under a folder prefix and deleting resources by
//! `public_id` in bounded batches.

use crate::error::{CloudinaryError, CloudinaryResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Default Admin API host.
const DEFAULT_API_HOST: &str = "https://api.cloudinary.com";

/// Maximum number of resources a single listing request returns.
///
/// The listing is intentionally not paginated beyond this cap; accounts
/// holding more resources under the prefix get a truncated view. Callers
/// must surface that truncation rather than treat the listing as complete.
pub const MAX_LIST_RESULTS: u32 = 500;

/// Maximum number of `public_id` values accepted by one delete call.
pub const DELETE_BATCH_SIZE: usize = 100;

/// Static credentials for a Cloudinary account.
///
/// The [`Debug`] impl redacts the API secret to prevent accidental
/// credential exposure in log output.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub struct CloudinaryCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for CloudinaryCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// One stored resource as returned by the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
    pub public_id: String,
}

/// Response of the resource listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ResourceListing {
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Cursor for the next page. Present when the listing was truncated;
    /// deliberately not followed (see [`MAX_LIST_RESULTS`]).
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl ResourceListing {
    /// Whether this listing was truncated at the request cap.
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.next_cursor.is_some() || self.resources.len() >= MAX_LIST_RESULTS as usize
    }
}

/// Response of a bulk delete call.
#[derive(Debug, Deserialize)]
pub struct DeleteResponse {
    /// Per-id outcome, e.g. `"deleted"` or `"not_found"`.
    #[serde(default)]
    pub deleted: HashMap<String, String>,
    #[serde(default)]
    pub partial: bool,
}

/// Cloudinary Admin API client.
///
/// Wraps `reqwest::Client` with basic-auth Admin API calls for image
/// resources of delivery type `upload`.
#[derive(Debug, Clone)]
pub struct CloudinaryClient {
    base_url: String,
    credentials: CloudinaryCredentials,
    http_client: Client,
}

impl CloudinaryClient {
    /// Create a new client against the public Cloudinary API host.
    pub fn new(credentials: CloudinaryCredentials) -> CloudinaryResult<Self> {
        Self::with_api_host(DEFAULT_API_HOST, credentials)
    }

    /// Create a new client against a custom API host (proxy, staging).
    pub fn with_api_host(
        api_host: &str,
        credentials: CloudinaryCredentials,
    ) -> CloudinaryResult<Self> {
        if credentials.cloud_name.is_empty() {
            return Err(CloudinaryError::InvalidConfig(
                "cloud_name must not be empty".to_string(),
            ));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("mediasweep/0.1")
            .build()
            .map_err(|e| {
                CloudinaryError::InvalidConfig(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self::with_http_client(api_host, credentials, http_client))
    }

    /// Create a client with a custom API host and pre-built `reqwest::Client`
    /// (for testing).
    #[must_use]
    pub fn with_http_client(
        base_url: &str,
        credentials: CloudinaryCredentials,
        http_client: Client,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            http_client,
        }
    }

    /// Endpoint for uploaded image resources of this account.
    fn resources_url(&self) -> String {
        format!(
            "{}/v1_1/{}/resources/image/upload",
            self.base_url, self.credentials.cloud_name
        )
    }

    /// List up to `max_results` uploaded image resources under `prefix`.
    ///
    /// Issues exactly one request; any `next_cursor` in the response is
    /// reported back to the caller but never followed.
    pub async fn list_resources(
        &self,
        prefix: &str,
        max_results: u32,
    ) -> CloudinaryResult<ResourceListing> {
        let url = self.resources_url();
        debug!(%prefix, max_results, "Cloudinary GET {}", url);

        let max_results = max_results.to_string();
        let response = self
            .http_client
            .get(&url)
            .basic_auth(&self.credentials.api_key, Some(&self.credentials.api_secret))
            .query(&[("prefix", prefix), ("max_results", max_results.as_str())])
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete the given resources by `public_id`.
    ///
    /// Accepts at most [`DELETE_BATCH_SIZE`] ids per call; larger slices are
    /// rejected so a caller cannot silently exceed the API's per-request
    /// limit. An empty slice is a no-op.
    pub async fn delete_resources(&self, public_ids: &[String]) -> CloudinaryResult<DeleteResponse> {
        if public_ids.len() > DELETE_BATCH_SIZE {
            return Err(CloudinaryError::BatchTooLarge {
                len: public_ids.len(),
                limit: DELETE_BATCH_SIZE,
            });
        }
        if public_ids.is_empty() {
            return Ok(DeleteResponse {
                deleted: HashMap::new(),
                partial: false,
            });
        }

        let url = self.resources_url();
        debug!(count = public_ids.len(), "Cloudinary DELETE {}", url);

        let params: Vec<(&str, &str)> = public_ids
            .iter()
            .map(|id| ("public_ids[]", id.as_str()))
            .collect();

        let response = self
            .http_client
            .delete(&url)
            .basic_auth(&self.credentials.api_key, Some(&self.credentials.api_secret))
            .query(&params)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> CloudinaryResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            return serde_json::from_str(&body)
                .map_err(|e| CloudinaryError::Parse(format!("invalid response body: {e}")));
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());

        match status {
            StatusCode::UNAUTHORIZED => Err(CloudinaryError::Auth(body)),
            _ => {
                let detail = if body.is_empty() {
                    format!("HTTP {status}")
                } else {
                    body
                };
                Err(CloudinaryError::Api {
                    status: status.as_u16(),
                    detail,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_secret() {
        let credentials = CloudinaryCredentials {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "very-secret".to_string(),
        };
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("very-secret"));
    }

    #[test]
    fn test_empty_cloud_name_rejected() {
        let credentials = CloudinaryCredentials {
            cloud_name: String::new(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
        };
        assert!(matches!(
            CloudinaryClient::new(credentials),
            Err(CloudinaryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_listing_truncation_detection() {
        let at_cap = ResourceListing {
            resources: (0..MAX_LIST_RESULTS)
                .map(|i| Resource {
                    public_id: format!("p/{i}"),
                })
                .collect(),
            next_cursor: None,
        };
        assert!(at_cap.truncated());

        let with_cursor = ResourceListing {
            resources: vec![],
            next_cursor: Some("abc".to_string()),
        };
        assert!(with_cursor.truncated());

        let small = ResourceListing {
            resources: vec![Resource {
                public_id: "p/a".to_string(),
            }],
            next_cursor: None,
        };
        assert!(!small.truncated());
    }
}
