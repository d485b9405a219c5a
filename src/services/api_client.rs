// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the outings/summits/routes API.
//!
//! Handles:
//! - Authenticated GET requests with a fixed per-request timeout
//! - Status checking (any non-2xx is an error)
//! - Typed "not found" lookups for endpoint probing
//! - `page-size`/`page-index` pagination

use crate::auth::AuthStrategy;
use crate::config::Config;
use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Outcome of a GET that tolerates a missing resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

/// Outings API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth: Arc<dyn AuthStrategy>,
}

impl ApiClient {
    /// Create a client for `base_url` (no trailing slash).
    pub fn new(base_url: &str, auth: Arc<dyn AuthStrategy>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Create a client from application configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.api_base_url,
            crate::auth::from_token(config.api_token.as_deref()),
            config.request_timeout,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and deserialize the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(path);
        let response = self.send(&url, query).await?;
        check_response_json(&url, response).await
    }

    /// Like `get_json`, but a 404 is reported as `Lookup::NotFound`.
    pub async fn lookup_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Lookup<T>> {
        match self.get_json(path, query).await {
            Ok(value) => Ok(Lookup::Found(value)),
            Err(e) if e.is_not_found() => Ok(Lookup::NotFound),
            Err(e) => Err(e),
        }
    }

    /// Fetch every page of a paginated collection.
    ///
    /// Pages are requested from index 1 until one comes back with fewer
    /// than `page_size` rows. Rows keep the server order. Any failed page
    /// fails the whole call.
    pub async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        page_size: u32,
    ) -> Result<Vec<T>> {
        let page_size = page_size.max(1);
        let mut rows = Vec::new();
        let mut page_index = 1u32;

        loop {
            let mut params = query.to_vec();
            params.push(("page-size", page_size.to_string()));
            params.push(("page-index", page_index.to_string()));

            let chunk: Vec<T> = self.get_json(path, &params).await?;
            let fetched = chunk.len();
            rows.extend(chunk);

            tracing::debug!(path, page = page_index, fetched, total = rows.len(), "Fetched page");

            if fetched < page_size as usize {
                break;
            }
            page_index += 1;
        }

        Ok(rows)
    }

    async fn send(&self, url: &str, query: &[(&str, String)]) -> Result<reqwest::Response> {
        self.auth
            .authorize(self.http.get(url).query(query))
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))
    }
}

/// Check response status and parse the JSON body.
async fn check_response_json<T: DeserializeOwned>(
    url: &str,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        if status.as_u16() == 429 {
            tracing::warn!(url, "Rate limit hit (429)");
        }
        return Err(AppError::Http {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Transport(e.to_string()))?;
    decode_body(url, &body)
}

/// Parse a response body, keeping serde's line/column detail on failure.
pub(crate) fn decode_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| AppError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}
