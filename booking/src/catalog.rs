//! Read-only client for the store's service catalog.
//!
//! Every failure is absorbed here: callers get an empty list and treat it as
//! "nothing to show".

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::config::SiteConfig;
use crate::error::BookingError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Billboard {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub billboard: Option<Billboard>,
}

/// A bookable service offering as published by the store API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(rename = "time", deserialize_with = "string_or_number")]
    pub duration: String,
}

/// Prices and durations come back as decimal strings from some stores and
/// as plain numbers from others.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

pub struct CatalogClient {
    client: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// `None` when no API URL is configured.
    pub fn from_config(config: &SiteConfig) -> Option<Self> {
        config.api_url.clone().map(Self::new)
    }

    /// `{base}/products`, with `categoryId` appended when a non-blank
    /// category is given.
    pub fn products_url(&self, category_id: Option<&str>) -> Result<Url, BookingError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| {
                BookingError::InvalidConfig(format!("'{}' cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .push("products");

        if let Some(id) = category_id.map(str::trim).filter(|s| !s.is_empty()) {
            url.query_pairs_mut().append_pair("categoryId", id);
        }
        Ok(url)
    }

    /// Fetch the catalog, optionally filtered by category. Never fails; any
    /// problem is logged and yields an empty list.
    pub async fn fetch_services(&self, category_id: Option<&str>) -> Vec<Service> {
        match self.try_fetch(category_id).await {
            Ok(services) => {
                debug!("Fetched {} catalog services", services.len());
                services
            }
            Err(e) => {
                warn!("Failed to fetch services: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self, category_id: Option<&str>) -> Result<Vec<Service>, BookingError> {
        let url = self.products_url(category_id)?;
        debug!("Fetching catalog: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BookingError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BookingError::Status(status.as_u16()));
        }

        response
            .json::<Vec<Service>>()
            .await
            .map_err(|e| BookingError::Decode(e.to_string()))
    }
}

/// Convenience wrapper: empty when the catalog is not configured.
pub async fn fetch_services(config: &SiteConfig, category_id: Option<&str>) -> Vec<Service> {
    match CatalogClient::from_config(config) {
        Some(client) => client.fetch_services(category_id).await,
        None => {
            debug!("No catalog API configured, skipping fetch");
            Vec::new()
        }
    }
}
