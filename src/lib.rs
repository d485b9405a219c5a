// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Summit-Scout: fetch a climber's outing history and nearby routes, then ask
//! a chat model which routes to try next.
//!
//! The crate has two pipelines joined only by JSON files on disk:
//! [`services::Fetcher`] dumps outings, summits and routes from the outings
//! API, and [`services::Recommender`] turns those dumps into a prompt.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{AppError, Result};
