//! CLI settings loaded from config.json with environment overrides.

use crate::config::ConfigPaths;
use crate::error::{CliError, CliResult};
use mediasweep_cloudinary::CloudinaryCredentials;
use serde::Deserialize;

/// Raw, partially-filled settings as read from config.json.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    graphql_url: Option<String>,
    prefix: Option<String>,
    cloud_name: Option<String>,
    api_key: Option<String>,
    api_secret: Option<String>,
    api_host: Option<String>,
}

/// Fully-resolved CLI settings.
#[derive(Clone)]
pub struct Settings {
    /// WPGraphQL endpoint URL.
    pub graphql_url: String,
    /// Cloudinary folder prefix shared by all managed images.
    pub prefix: String,
    /// Cloudinary account credentials.
    pub credentials: CloudinaryCredentials,
    /// Override for the Cloudinary API host (proxies, testing). `None`
    /// means the public host.
    pub api_host: Option<String>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("graphql_url", &self.graphql_url)
            .field("prefix", &self.prefix)
            .field("credentials", &self.credentials) // secret already redacted
            .finish()
    }
}

impl Settings {
    /// Load settings from config.json, applying environment overrides.
    ///
    /// Environment variables (`MEDIASWEEP_GRAPHQL_URL`, `MEDIASWEEP_PREFIX`,
    /// `MEDIASWEEP_CLOUD_NAME`, `MEDIASWEEP_API_KEY`, `MEDIASWEEP_API_SECRET`)
    /// take precedence over file values, so secrets need not live on disk.
    pub fn load(paths: &ConfigPaths) -> CliResult<Self> {
        let raw = if paths.config_file.exists() {
            let contents = std::fs::read_to_string(&paths.config_file)?;
            serde_json::from_str(&contents)?
        } else {
            RawSettings::default()
        };

        let resolve = |env_key: &str, file_value: Option<String>, name: &str| {
            std::env::var(env_key)
                .ok()
                .or(file_value)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    CliError::Config(format!(
                        "Missing '{name}': set it in {} or via {env_key}",
                        paths.config_file.display()
                    ))
                })
        };

        Ok(Self {
            graphql_url: resolve("MEDIASWEEP_GRAPHQL_URL", raw.graphql_url, "graphql_url")?,
            prefix: resolve("MEDIASWEEP_PREFIX", raw.prefix, "prefix")?,
            credentials: CloudinaryCredentials {
                cloud_name: resolve("MEDIASWEEP_CLOUD_NAME", raw.cloud_name, "cloud_name")?,
                api_key: resolve("MEDIASWEEP_API_KEY", raw.api_key, "api_key")?,
                api_secret: resolve("MEDIASWEEP_API_SECRET", raw.api_secret, "api_secret")?,
            },
            api_host: std::env::var("MEDIASWEEP_API_HOST")
                .ok()
                .or(raw.api_host)
                .filter(|v| !v.is_empty()),
        })
    }
}
