//! Backend factory for creating backend instances from configuration.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use super::{pexels::PexelsBackend, PhotoBackend};
use crate::config::ApiConfig;

/// Create a backend instance from the `[api]` configuration section.
///
/// # Errors
/// Returns error if:
/// - Backend type is unknown
/// - The API key environment variable is unset or empty
pub fn create_backend(api: &ApiConfig) -> Result<Arc<dyn PhotoBackend>> {
    match api.backend.as_str() {
        "pexels" => {
            let api_key = std::env::var(&api.api_key_env)
                .ok()
                .filter(|key| !key.trim().is_empty())
                .ok_or_else(|| anyhow!("{} environment variable not set", api.api_key_env))?;

            let backend = PexelsBackend::new(&api.base_url, api_key, Duration::from_secs(api.timeout_secs))
                .context("Failed to build Pexels HTTP client")?;
            Ok(Arc::new(backend))
        }
        _ => Err(anyhow!("Unknown backend type: {}", api.backend)),
    }
}
