// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Outing view: one logged activity of a user.

use super::lenient;
use serde::Deserialize;
use serde_json::Value;

/// Fields of an outing record used downstream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Outing {
    /// Route this outing was done on, if any
    #[serde(default, deserialize_with = "lenient")]
    pub route_id: Option<u64>,
    /// Activity tags (climbing, via ferrata, ...)
    #[serde(default, deserialize_with = "lenient")]
    pub activities: Option<Vec<String>>,
    /// Timestamp as sent by the API (normally Unix seconds)
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<Value>,
}

impl Outing {
    /// View over a raw outing record. A record that is not an object reads
    /// as an outing with no fields.
    pub fn from_raw(raw: &Value) -> Self {
        Self::deserialize(raw).unwrap_or_default()
    }

    /// The referenced route, ignoring a missing or zero identifier.
    pub fn linked_route(&self) -> Option<u64> {
        self.route_id.filter(|id| *id != 0)
    }
}
