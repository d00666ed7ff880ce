use anyhow::Result;
use reqwest::Client;
use tracing::info;

use crate::contact::ContactSettings;

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "BARSENSE_API_URL";

/// Client for the external Barsense REST API
#[derive(Debug, Clone)]
pub struct BarsenseApiClient {
    client: Client,
    base_url: String,
}

impl BarsenseApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Build from a configured default, honoring `BARSENSE_API_URL`.
    pub fn from_env(default_base_url: &str) -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| default_base_url.to_string());
        Self::new(base_url)
    }

    pub async fn fetch_contact_settings(&self) -> Result<ContactSettings> {
        let url = format!("{}/api/contact-settings", self.base_url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let record: ContactSettings = response.json().await?;
        Ok(record)
    }

    /// Persist the record as-is. Empty derived fields are acceptable; a
    /// failed translation never blocks saving.
    pub async fn save_contact_settings(&self, record: &ContactSettings) -> Result<ContactSettings> {
        let url = format!("{}/api/contact-settings", self.base_url);
        let response = self
            .client
            .put(&url)
            .json(record)
            .send()
            .await?
            .error_for_status()?;
        let saved: ContactSettings = response.json().await?;
        info!("Saved contact settings");
        Ok(saved)
    }
}
