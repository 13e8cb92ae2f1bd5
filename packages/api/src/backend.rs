//! Model backend selection and dispatch.
//!
//! Classification requests either run the in-process deterministic mock or
//! are forwarded to an external model service. Both paths expose the same
//! trait; the handler only sees a [`DynModelBackend`].

use std::sync::Arc;

use binwise::ClassificationResult;
use serde::{Deserialize, Serialize};

mod mock;
mod remote;

pub use mock::MockModel;
pub use remote::RemoteModel;

/// Which backend the service is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    Mock,
    Remote,
}

impl BackendMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Remote => "remote",
        }
    }
}

impl std::fmt::Display for BackendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type for backend calls.
pub type BackendResult<T> = Result<T, BackendError>;

/// Error type for backend calls.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend answered {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Where classification requests are served.
#[async_trait::async_trait]
pub trait ModelBackend: Send + Sync {
    /// Mode surfaced by the health endpoints.
    fn mode(&self) -> BackendMode;

    /// Remote endpoint this backend talks to, if any.
    fn remote_url(&self) -> Option<&str> {
        None
    }

    /// Classify one image payload.
    async fn classify(&self, image: &str) -> BackendResult<ClassificationResult>;
}

pub type DynModelBackend = Arc<dyn ModelBackend>;

/// Builds the backend the service was configured for.
pub fn create_backend(use_remote: bool, remote_url: impl Into<String>) -> DynModelBackend {
    if use_remote {
        Arc::new(RemoteModel::new(remote_url))
    } else {
        Arc::new(MockModel::new())
    }
}
