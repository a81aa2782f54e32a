//! Photo provider abstraction.
//!
//! The view-model only talks to a [`PhotoBackend`]; the concrete provider is
//! chosen once at startup by [`factory::create_backend`].

use async_trait::async_trait;

use crate::photos::Photo;

pub mod factory;
pub mod pexels;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Backend error: {0}")]
    Other(String),
}

/// Backend trait that all photo providers implement.
#[async_trait]
pub trait PhotoBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "pexels").
    fn backend_type(&self) -> &str;

    /// Photos matching `query`, in the provider's ranking order.
    async fn search(&self, query: &str, per_page: u32) -> Result<Vec<Photo>, BackendError>;

    /// The provider's editorial selection, used when there is no query.
    async fn curated(&self, per_page: u32) -> Result<Vec<Photo>, BackendError>;
}
