// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the records exchanged with the outings API.
//!
//! The API records are stored exactly as received (`serde_json::Value`).
//! The structs here are read-only views over those records: every field is
//! optional and a field with an unexpected type reads as absent, so one odd
//! record never fails a whole collection.

pub mod outing;
pub mod route;
pub mod summit;

pub use outing::Outing;
pub use route::{
    catalogue, Route, RouteCatalogue, RouteProperties, RouteRatings, RoutesById, RoutesBySummit,
};
pub use summit::Summit;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field, treating null or a value of the wrong type as `None`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Text form of a JSON scalar: strings without quotes, anything else as JSON.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
