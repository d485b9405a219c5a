// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route view and the route collections written by the fetcher.

use super::lenient;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Fields of a route record used in the recommendation prompt.
///
/// Elevation gain and difficulty are kept as raw JSON scalars: depending on
/// the route they come back as numbers or strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Route {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub activities: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub properties: Option<RouteProperties>,
    #[serde(default, deserialize_with = "lenient")]
    pub ratings: Option<RouteRatings>,
}

impl Route {
    pub fn from_raw(raw: &Value) -> Self {
        Self::deserialize(raw).unwrap_or_default()
    }

    /// Positive elevation gain in metres, if known.
    pub fn height_diff_up(&self) -> Option<&Value> {
        self.properties
            .as_ref()
            .and_then(|p| p.height_diff_up.as_ref())
    }

    /// Global difficulty grade, if known.
    pub fn global_rating(&self) -> Option<&Value> {
        self.ratings.as_ref().and_then(|r| r.global.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RouteProperties {
    #[serde(default, deserialize_with = "lenient")]
    pub height_diff_up: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RouteRatings {
    #[serde(default, deserialize_with = "lenient")]
    pub global: Option<Value>,
}

/// Raw route records grouped by summit, keyed by summit id as text.
pub type RoutesBySummit = BTreeMap<String, Vec<Value>>;

/// Raw route records fetched individually, keyed by route id as text.
pub type RoutesById = BTreeMap<String, Value>;

/// Route views keyed by route id, as rendered in the prompt.
pub type RouteCatalogue = BTreeMap<String, Route>;

/// Build the prompt catalogue from raw route records.
pub fn catalogue(routes: &RoutesById) -> RouteCatalogue {
    routes
        .iter()
        .map(|(id, raw)| (id.clone(), Route::from_raw(raw)))
        .collect()
}
