// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Endpoint discovery for resources whose path convention is not stable.
//!
//! Candidates are tried in order. A `Lookup::NotFound` moves on to the next
//! candidate, the first `Lookup::Found` wins, and any other failure aborts
//! the probe.

use crate::error::{AppError, Result};
use crate::services::api_client::{ApiClient, Lookup};
use serde::de::DeserializeOwned;

/// Known path variants of the "summits near a point" query.
pub const SUMMIT_PATHS: [&str; 4] = ["/summits", "/summits/", "/summit", "/summit/"];

/// Successful probe result.
#[derive(Debug, Clone)]
pub struct Probed<T> {
    /// Path that answered
    pub path: String,
    pub value: T,
}

/// Ordered list of candidate paths for one resource.
#[derive(Debug, Clone)]
pub struct EndpointProbe {
    candidates: Vec<String>,
}

impl EndpointProbe {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// Probe for the summit search endpoint.
    pub fn summits() -> Self {
        Self::new(SUMMIT_PATHS)
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Query each candidate with `query` until one of them exists.
    pub async fn resolve<T: DeserializeOwned>(
        &self,
        client: &ApiClient,
        query: &[(&str, String)],
    ) -> Result<Probed<T>> {
        for path in &self.candidates {
            match client.lookup_json(path, query).await? {
                Lookup::Found(value) => {
                    tracing::info!(path = %path, "Endpoint responded");
                    return Ok(Probed {
                        path: path.clone(),
                        value,
                    });
                }
                Lookup::NotFound => {
                    tracing::debug!(path = %path, "Endpoint not found, trying next candidate");
                }
            }
        }

        Err(AppError::EndpointExhausted {
            tried: self.candidates.clone(),
        })
    }
}
