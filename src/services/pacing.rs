// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed minimum spacing between successive requests.
//!
//! This is a politeness delay, not a rate limiter: it never adapts to 429s
//! and there is no concurrency to bound.

use std::time::{Duration, Instant};

/// Enforces `delay` between the starts of consecutive requests.
#[derive(Debug)]
pub struct Pacer {
    delay: Duration,
    last_request: Option<Instant>,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_request: None,
        }
    }

    /// Wait until `delay` has elapsed since the previous call.
    ///
    /// The first call never sleeps.
    pub async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.delay {
                tokio::time::sleep(self.delay - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
