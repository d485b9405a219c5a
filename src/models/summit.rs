// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Summit view.

use super::{lenient, scalar_text};
use serde::Deserialize;
use serde_json::Value;

/// Fields of a summit record used to look up its routes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Summit {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

impl Summit {
    pub fn from_raw(raw: &Value) -> Self {
        Self::deserialize(raw).unwrap_or_default()
    }

    /// Summit id as text, the form used in paths and map keys.
    pub fn id_text(&self) -> Option<String> {
        self.id.as_ref().map(scalar_text)
    }
}
