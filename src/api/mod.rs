//! Transport seam for the register's public API
//!
//! Four logical fetch operations behind one trait, with two interchangeable
//! strategies: direct HTTP against the public API, or delegation to a native
//! host shell's command bridge. The strategy is selected once at process
//! start; call sites never branch on environment.

pub mod host;
pub mod http;

pub use host::{HostApi, HostBridge};
pub use http::HttpApi;

use crate::error::AppError;
use crate::models::{ActivityNotification, RegisterNotification, TargetRegistryItem};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Transport-level failures, converted into [`AppError`] at the boundary.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("API returned status {0}")]
    Status(u16),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Host command failed: {0}")]
    HostCommand(String),
    #[error("Response decode failed: {0}")]
    Decode(String),
}

impl From<TransportError> for AppError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::InvalidUrl(msg) => AppError::invalid_url(msg),
            TransportError::Status(status) => AppError::api_status(status),
            TransportError::Request(detail) => AppError::connection_failed(detail),
            TransportError::HostCommand(detail) => AppError::host_command(detail),
            TransportError::Decode(detail) => AppError::parse_failed(detail),
        }
    }
}

/// The register API's fetch operations.
///
/// Each returns the full collection or a transport error the caller
/// surfaces; errors are never swallowed into empty collections.
#[async_trait]
pub trait RegisterApi: Send + Sync {
    async fn get_targets(&self) -> Result<Vec<TargetRegistryItem>, AppError>;

    async fn get_activity_notifications(&self) -> Result<Vec<ActivityNotification>, AppError>;

    async fn get_activity_notifications_by_term(
        &self,
        term_id: i64,
    ) -> Result<Vec<ActivityNotification>, AppError>;

    async fn get_register_notifications(&self) -> Result<Vec<RegisterNotification>, AppError>;
}

/// Pick the transport at process start.
///
/// A native host shell passes its command bridge; everything else gets the
/// direct HTTP client (base URL from `AVOIMUUS_API_BASE` when set).
pub fn select_transport(
    bridge: Option<Arc<dyn HostBridge>>,
) -> Result<Arc<dyn RegisterApi>, AppError> {
    match bridge {
        Some(bridge) => {
            tracing::info!("using host-shell command transport");
            Ok(Arc::new(HostApi::new(bridge)))
        }
        None => {
            let api = HttpApi::from_env()?;
            tracing::info!(base = %api.base(), "using direct HTTP transport");
            Ok(Arc::new(api))
        }
    }
}
