//! Host-shell command transport
//!
//! When the app runs inside a native host shell, fetches go through the
//! shell's command bridge instead of direct HTTP (the shell owns the network
//! stack and any proxying). The bridge hands back raw JSON values; decoding
//! into domain types happens here so both transports expose identical shapes.

use super::RegisterApi;
use crate::error::AppError;
use crate::models::{ActivityNotification, RegisterNotification, TargetRegistryItem};
use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;

/// Command names the host shell registers.
pub mod commands {
    pub const FETCH_TARGETS: &str = "fetch_targets";
    pub const FETCH_ACTIVITY_NOTIFICATIONS: &str = "fetch_activity_notifications";
    pub const FETCH_ACTIVITY_NOTIFICATIONS_BY_TERM: &str =
        "fetch_activity_notifications_by_term";
    pub const FETCH_REGISTER_NOTIFICATIONS: &str = "fetch_register_notifications";
}

/// In-process invocation surface a host shell provides at startup.
pub trait HostBridge: Send + Sync {
    /// Invoke a named host command with JSON arguments, resolving to the
    /// command's JSON result or an error string from the shell.
    fn invoke(&self, command: &str, args: Value) -> BoxFuture<'static, Result<Value, String>>;
}

/// [`RegisterApi`] implementation that delegates to a [`HostBridge`].
pub struct HostApi {
    bridge: Arc<dyn HostBridge>,
}

impl HostApi {
    pub fn new(bridge: Arc<dyn HostBridge>) -> Self {
        Self { bridge }
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        command: &str,
        args: Value,
    ) -> Result<Vec<T>, AppError> {
        tracing::debug!(command, "invoking host command");
        let value = self
            .bridge
            .invoke(command, args)
            .await
            .map_err(AppError::host_command)?;
        let items: Vec<T> = serde_json::from_value(value)?;
        tracing::debug!(command, count = items.len(), "host command returned");
        Ok(items)
    }
}

#[async_trait]
impl RegisterApi for HostApi {
    async fn get_targets(&self) -> Result<Vec<TargetRegistryItem>, AppError> {
        self.fetch_collection(commands::FETCH_TARGETS, json!({})).await
    }

    async fn get_activity_notifications(&self) -> Result<Vec<ActivityNotification>, AppError> {
        self.fetch_collection(commands::FETCH_ACTIVITY_NOTIFICATIONS, json!({}))
            .await
    }

    async fn get_activity_notifications_by_term(
        &self,
        term_id: i64,
    ) -> Result<Vec<ActivityNotification>, AppError> {
        self.fetch_collection(
            commands::FETCH_ACTIVITY_NOTIFICATIONS_BY_TERM,
            json!({ "termId": term_id }),
        )
        .await
    }

    async fn get_register_notifications(&self) -> Result<Vec<RegisterNotification>, AppError> {
        self.fetch_collection(commands::FETCH_REGISTER_NOTIFICATIONS, json!({}))
            .await
    }
}
