#![doc = "HTTP client for the catalog API: the reqwest-backed implementation of `ArtistApi`."]
//
//! # Artist API client
//!
//! [`ArtistClient`] wires the [`ArtistApi`] contract from
//! [`artist_upload_core::contract`] to the real service.
//!
//! - Construct it with the base URL and an optional bearer token.
//! - When a token is given, every request carries `Authorization: Bearer <token>`
//!   and `Content-Type: application/json` as default headers.
//! - Non-2xx answers and transport failures come back as
//!   [`RequestError`] so the orchestrator can record them per row.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use artist_upload_core::contract::ArtistApi;
use artist_upload_core::error::RequestError;
use artist_upload_core::record::{ArtistPage, ArtistRecord};

pub struct ArtistClient {
    http: reqwest::Client,
    artist_url: Url,
}

impl ArtistClient {
    pub fn new(base_url: &str, auth_token: Option<&str>) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = auth_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                tracing::error!(error = ?e, "Auth token is not a valid header value");
                anyhow::anyhow!("auth token is not a valid header value: {e}")
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| {
                tracing::error!(error = ?e, "Failed to build HTTP client");
                anyhow::anyhow!("failed to build HTTP client: {e}")
            })?;

        let base_url = base_url.trim_end_matches('/');
        let artist_url = Url::parse(&format!("{base_url}/artist")).map_err(|e| {
            tracing::error!(error = %e, base_url, "Invalid API base URL");
            anyhow::anyhow!("invalid API base URL {base_url:?}: {e}")
        })?;
        if artist_url.cannot_be_a_base() {
            anyhow::bail!("API base URL {base_url:?} cannot carry a path");
        }

        tracing::info!(
            base_url,
            auth = auth_token.is_some(),
            "Initialized ArtistClient"
        );
        Ok(ArtistClient { http, artist_url })
    }

    /// `/artist/{id}` with the id percent-encoded as a single path segment.
    fn artist_item_url(&self, artist_id: &str) -> Url {
        let mut url = self.artist_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(artist_id);
        }
        url
    }

    /// Send `request` and decode a 2xx body into `T`.
    ///
    /// `empty` is returned for a 2xx answer without a body.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        request: RequestBuilder,
        empty: Option<T>,
    ) -> Result<T, RequestError> {
        let url = url.to_string();
        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, method = %method, url = %url, "Request failed");
            RequestError::Transport {
                method: method.to_string(),
                url: url.clone(),
                source: Box::new(e),
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| RequestError::Transport {
            method: method.to_string(),
            url: url.clone(),
            source: Box::new(e),
        })?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), method = %method, url = %url, body = %body, "API returned an error status");
            return Err(RequestError::Status {
                method: method.to_string(),
                url,
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            if let Some(fallback) = empty {
                return Ok(fallback);
            }
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, url = %url, "Failed to decode API response");
            RequestError::Decode {
                url,
                reason: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl ArtistApi for ArtistClient {
    async fn create_artist(&self, record: &ArtistRecord) -> Result<ArtistRecord, RequestError> {
        let url = self.artist_url.clone();
        tracing::info!(author = %record.author, url = %url, "Creating artist");
        let request = self.http.post(url.clone()).json(record);
        self.execute(Method::POST, url, request, Some(record.clone()))
            .await
    }

    async fn update_artist(
        &self,
        artist_id: &str,
        record: &ArtistRecord,
    ) -> Result<ArtistRecord, RequestError> {
        let url = self.artist_item_url(artist_id);
        tracing::info!(artist_id, author = %record.author, url = %url, "Updating artist");
        let request = self.http.put(url.clone()).json(record);
        self.execute(Method::PUT, url, request, Some(record.clone()))
            .await
    }

    async fn list_artists(
        &self,
        search: Option<String>,
    ) -> Result<Vec<ArtistRecord>, RequestError> {
        let url = self.artist_url.clone();
        tracing::info!(url = %url, search = search.as_deref().unwrap_or(""), "Listing artists");
        let mut request = self.http.get(url.clone());
        if let Some(search) = &search {
            request = request.query(&[("search", search)]);
        }
        let page: ArtistPage = self.execute(Method::GET, url, request, None).await?;
        let records = page.into_records();
        tracing::info!(count = records.len(), "Fetched artists");
        Ok(records)
    }
}
