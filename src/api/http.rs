//! Direct HTTP transport against the public register API

use super::{RegisterApi, TransportError};
use crate::error::AppError;
use crate::models::{ActivityNotification, RegisterNotification, TargetRegistryItem};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// The register's public API host.
pub const DEFAULT_API_BASE: &str = "https://public.api.avoimuusrekisteri.fi";

/// Environment override for the base URL (e.g. a local proxy path).
pub const API_BASE_ENV: &str = "AVOIMUUS_API_BASE";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const PATH_ACTIVITIES: &str = "open-data-activity-notification";
const PATH_REGISTRATIONS: &str = "open-data-register-notification";
const PATH_TARGETS: &str = "open-data-target/targets";

/// reqwest-backed implementation of [`RegisterApi`].
pub struct HttpApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpApi {
    pub fn new(base: Url) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { client, base })
    }

    /// Base URL from `AVOIMUUS_API_BASE`, falling back to the public host.
    pub fn from_env() -> Result<Self, AppError> {
        let raw = std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let base = Url::parse(&raw)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", raw, e)))?;
        Self::new(base)
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        // Url::join drops the last base segment unless the base ends in '/'.
        let mut base = self.base.clone();
        {
            let mut segments = base
                .path_segments_mut()
                .map_err(|_| TransportError::InvalidUrl(self.base.to_string()))?;
            segments.pop_if_empty();
            for segment in path.split('/') {
                segments.push(segment);
            }
        }
        Ok(base)
    }

    async fn fetch_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, AppError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "fetching collection");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()).into());
        }

        let items: Vec<T> = response.json().await?;
        tracing::debug!(path, count = items.len(), "fetched collection");
        Ok(items)
    }
}

#[async_trait]
impl RegisterApi for HttpApi {
    async fn get_targets(&self) -> Result<Vec<TargetRegistryItem>, AppError> {
        self.fetch_collection(PATH_TARGETS).await
    }

    async fn get_activity_notifications(&self) -> Result<Vec<ActivityNotification>, AppError> {
        self.fetch_collection(PATH_ACTIVITIES).await
    }

    async fn get_activity_notifications_by_term(
        &self,
        term_id: i64,
    ) -> Result<Vec<ActivityNotification>, AppError> {
        self.fetch_collection(&format!("{}/term/{}", PATH_ACTIVITIES, term_id))
            .await
    }

    async fn get_register_notifications(&self) -> Result<Vec<RegisterNotification>, AppError> {
        self.fetch_collection(PATH_REGISTRATIONS).await
    }
}
