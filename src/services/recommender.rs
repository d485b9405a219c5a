// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recommend pipeline: saved outings and routes → prompt → chat completion.

use crate::config::Config;
use crate::error::Result;
use crate::models::{catalogue, Outing, RouteCatalogue, RoutesById};
use crate::services::chat::{ChatClient, ChatMessage, ChatRequest};
use crate::services::prompt;
use crate::services::store::DataStore;
use serde_json::Value;

/// Builds the recommendation prompt and asks the chat model for routes.
pub struct Recommender {
    chat: ChatClient,
    store: DataStore,
    athlete_name: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl Recommender {
    pub fn new(chat: ChatClient, store: DataStore, config: &Config) -> Self {
        Self {
            chat,
            store,
            athlete_name: config.athlete_name.clone(),
            model: config.openai_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Load the saved outings and outing-linked routes.
    ///
    /// Records with odd or missing fields are kept; they render with
    /// placeholders.
    pub fn load_inputs(&self) -> Result<(Vec<Outing>, RouteCatalogue)> {
        let outings: Vec<Value> = self.store.read_json(&self.store.outings_path())?;
        let routes: RoutesById = self.store.read_json(&self.store.routes_from_outings_path())?;
        tracing::info!(outings = outings.len(), routes = routes.len(), "Loaded saved data");
        Ok((outings.iter().map(Outing::from_raw).collect(), catalogue(&routes)))
    }

    /// System + user messages with the configured sampling parameters.
    pub fn build_request(&self, outings: &[Outing], routes: &RouteCatalogue) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompt::system_prompt(&self.athlete_name)),
                ChatMessage::user(prompt::user_prompt(&self.athlete_name, outings, routes)),
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Run the whole pipeline and return the recommendation text without
    /// bold markup.
    pub async fn recommend(&self) -> Result<String> {
        let (outings, routes) = self.load_inputs()?;
        let request = self.build_request(&outings, &routes);
        let answer = self.chat.complete(&request).await?;
        Ok(prompt::strip_emphasis(&answer))
    }
}
