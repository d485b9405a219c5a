// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API clients and the two pipelines.

pub mod api_client;
pub mod chat;
pub mod fetcher;
pub mod pacing;
pub mod probe;
pub mod prompt;
pub mod recommender;
pub mod store;

pub use api_client::{ApiClient, Lookup};
pub use chat::{ChatClient, ChatMessage, ChatRequest};
pub use fetcher::{distinct_route_ids, FetchSummary, Fetcher};
pub use pacing::Pacer;
pub use probe::{EndpointProbe, Probed};
pub use recommender::Recommender;
pub use store::DataStore;
