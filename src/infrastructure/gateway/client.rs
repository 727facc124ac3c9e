//! Shared reqwest plumbing for the placeholder API gateways.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ExternalApiSettings;
use crate::shared::error::AppError;

/// Thin client bound to one base URL.
#[derive(Clone)]
pub struct PlaceholderClient {
    client: Client,
    base_url: String,
}

impl PlaceholderClient {
    /// Build a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &ExternalApiSettings) -> Result<Self, reqwest::Error> {
        Self::new(&settings.base_url, Duration::from_secs(settings.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base}{path}` and decode the JSON body.
    pub(super) async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(path, query).await?;
        Ok(response.json::<T>().await?)
    }

    /// Like [`get_json`](Self::get_json) but maps HTTP 404 to `None`.
    pub(super) async fn get_optional_json<T>(&self, path: &str) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = ensure_success(response)?;
        Ok(Some(response.json::<T>().await?))
    }

    async fn send(&self, path: &str, query: &[(&str, &str)]) -> Result<Response, AppError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;

        ensure_success(response)
    }
}

fn ensure_success(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::ExternalService(format!(
            "{} returned {}",
            response.url().path(),
            status
        )));
    }
    Ok(response)
}
