//! Shared fixtures for CLI integration tests.

use std::sync::{Mutex, MutexGuard, OnceLock};
use tempfile::TempDir;

/// Commands read their configuration through `MEDIASWEEP_CONFIG_DIR`, so
/// tests that set it must not run concurrently.
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Test context holding a temporary config dir, a temporary working dir,
/// and the process-wide environment lock.
pub struct TestContext {
    /// Kept alive so the directory survives until the test ends.
    #[allow(dead_code)]
    pub config_dir: TempDir,
    pub work_dir: TempDir,
    _guard: MutexGuard<'static, ()>,
}

impl TestContext {
    /// Create a context whose config.json points the CLI at the given
    /// GraphQL endpoint and Cloudinary API host.
    pub fn new(graphql_url: &str, api_host: &str, prefix: &str) -> Self {
        let guard = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let config_dir = TempDir::new().expect("create config dir");
        let work_dir = TempDir::new().expect("create work dir");

        let config = serde_json::json!({
            "graphql_url": graphql_url,
            "prefix": prefix,
            "cloud_name": "demo",
            "api_key": "key",
            "api_secret": "secret",
            "api_host": api_host,
        });
        std::fs::write(
            config_dir.path().join("config.json"),
            serde_json::to_string_pretty(&config).unwrap(),
        )
        .expect("write config.json");

        std::env::set_var("MEDIASWEEP_CONFIG_DIR", config_dir.path());

        Self {
            config_dir,
            work_dir,
            _guard: guard,
        }
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        std::env::remove_var("MEDIASWEEP_CONFIG_DIR");
    }
}
