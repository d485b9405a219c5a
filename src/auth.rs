// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request authentication strategies.
//!
//! Clients hold an `Arc<dyn AuthStrategy>` and run every outgoing request
//! through it, so another scheme can be plugged in without touching the
//! fetch logic.

use reqwest::RequestBuilder;
use std::fmt;
use std::sync::Arc;

/// Decorates an outgoing request with credentials.
pub trait AuthStrategy: Send + Sync {
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Static bearer credential sent as `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    /// Accepts either the raw token or a full `Bearer <token>` header value.
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let token = match token.strip_prefix("Bearer ") {
            Some(stripped) => stripped.trim().to_string(),
            None => token,
        };
        Self { token }
    }
}

impl AuthStrategy for BearerToken {
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// No credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl AuthStrategy for Anonymous {
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
    }
}

/// Bearer auth when a token is configured, anonymous otherwise.
pub fn from_token(token: Option<&str>) -> Arc<dyn AuthStrategy> {
    match token {
        Some(token) => Arc::new(BearerToken::new(token)),
        None => Arc::new(Anonymous),
    }
}
