// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fetch pipeline.
//!
//! Runs four stages in order, saving each result before the next begins:
//! 1. Outings of the configured user
//! 2. Summits around the configured point (endpoint probed)
//! 3. Routes of every summit
//! 4. Routes referenced by outings, fetched one by one

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Outing, RoutesById, RoutesBySummit, Summit};
use crate::services::api_client::ApiClient;
use crate::services::pacing::Pacer;
use crate::services::probe::EndpointProbe;
use crate::services::store::DataStore;
use serde_json::Value;
use std::collections::BTreeSet;

/// Counts reported at the end of a fetch run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchSummary {
    pub outings: usize,
    pub summits: usize,
    /// Path variant that answered the summit probe
    pub summit_path: String,
    /// Total routes across all summits
    pub summit_routes: usize,
    pub linked_route_ids: usize,
    pub routes_from_outings: usize,
    /// Route ids whose individual fetch failed
    pub skipped_route_ids: Vec<u64>,
}

/// Walks the outings API and writes the JSON dumps.
///
/// Records are written exactly as the API returned them; the typed models
/// are only used to read the ids that drive the next stage.
pub struct Fetcher {
    client: ApiClient,
    store: DataStore,
    probe: EndpointProbe,
    user_id: u64,
    search_lat: f64,
    search_lng: f64,
    search_radius_m: u32,
    page_size: u32,
    summit_page_size: u32,
    pacer: Pacer,
}

impl Fetcher {
    pub fn new(client: ApiClient, store: DataStore, config: &Config) -> Self {
        Self {
            client,
            store,
            probe: EndpointProbe::summits(),
            user_id: config.user_id,
            search_lat: config.search_lat,
            search_lng: config.search_lng,
            search_radius_m: config.search_radius_m,
            page_size: config.page_size,
            summit_page_size: config.summit_page_size,
            pacer: Pacer::new(config.route_fetch_delay),
        }
    }

    /// Replace the summit endpoint candidates.
    pub fn with_probe(mut self, probe: EndpointProbe) -> Self {
        self.probe = probe;
        self
    }

    /// Run all stages.
    pub async fn run(&mut self) -> Result<FetchSummary> {
        let mut summary = FetchSummary::default();

        // 1. Outings
        let outings = self.fetch_outings().await?;
        tracing::info!(count = outings.len(), user_id = self.user_id, "Retrieved outings");
        self.store.write_json(&self.store.outings_path(), &outings)?;
        summary.outings = outings.len();

        // 2. Summits
        let (summit_path, summits) = self.fetch_summits().await?;
        tracing::info!(count = summits.len(), path = %summit_path, "Retrieved summits");
        self.store.write_json(&self.store.summits_path(), &summits)?;
        summary.summits = summits.len();
        summary.summit_path = summit_path;

        // 3. Routes for each summit
        let routes_by_summit = self.fetch_routes_by_summit(&summits).await?;
        self.store
            .write_json(&self.store.routes_by_summit_path(), &routes_by_summit)?;
        summary.summit_routes = routes_by_summit.values().map(Vec::len).sum();

        // 4. Routes linked to outings
        let outing_views: Vec<Outing> = outings.iter().map(Outing::from_raw).collect();
        let route_ids = distinct_route_ids(&outing_views);
        tracing::info!(count = route_ids.len(), "Unique route ids in outings");
        summary.linked_route_ids = route_ids.len();

        let (routes_from_outings, skipped) = self.fetch_routes_by_id(&route_ids).await;
        let path = self.store.routes_from_outings_path();
        self.store.write_json(&path, &routes_from_outings)?;
        tracing::info!(
            count = routes_from_outings.len(),
            path = %path.display(),
            "Saved route objects"
        );
        summary.routes_from_outings = routes_from_outings.len();
        summary.skipped_route_ids = skipped;

        Ok(summary)
    }

    /// All outing records of the configured user.
    pub async fn fetch_outings(&self) -> Result<Vec<Value>> {
        let path = format!("/user/{}/outings/", self.user_id);
        self.client.get_all_pages(&path, &[], self.page_size).await
    }

    /// Summit records around the search point, with the path that answered.
    ///
    /// Only the first page is requested.
    pub async fn fetch_summits(&self) -> Result<(String, Vec<Value>)> {
        let query = [
            ("lat", self.search_lat.to_string()),
            ("lng", self.search_lng.to_string()),
            ("radius", self.search_radius_m.to_string()),
            ("page-size", self.summit_page_size.to_string()),
            ("page-index", "1".to_string()),
        ];
        let probed = self.probe.resolve(&self.client, &query).await?;
        Ok((probed.path, probed.value))
    }

    /// Route records of every summit, keyed by summit id.
    ///
    /// A summit record without an id fails the stage.
    pub async fn fetch_routes_by_summit(&self, summits: &[Value]) -> Result<RoutesBySummit> {
        let mut routes_by_summit = RoutesBySummit::new();

        for raw in summits {
            let summit = Summit::from_raw(raw);
            let summit_id = summit.id_text().ok_or_else(|| AppError::Decode {
                url: self.store.summits_path().display().to_string(),
                message: format!("summit record has no id: {}", raw),
            })?;

            let path = format!("/summit/{}/routes/", summit_id);
            let routes: Vec<Value> = self.client.get_all_pages(&path, &[], self.page_size).await?;
            tracing::info!(
                summit_id = %summit_id,
                name = summit.name.as_deref().unwrap_or_default(),
                routes = routes.len(),
                "Fetched summit routes"
            );
            routes_by_summit.insert(summit_id, routes);
        }

        Ok(routes_by_summit)
    }

    /// Fetch each route record individually, pausing between requests.
    ///
    /// A failure for one id is logged and skipped; the ids that failed are
    /// returned alongside the routes that were fetched.
    pub async fn fetch_routes_by_id(
        &mut self,
        route_ids: &BTreeSet<u64>,
    ) -> (RoutesById, Vec<u64>) {
        let mut routes = RoutesById::new();
        let mut skipped = Vec::new();

        for &route_id in route_ids {
            self.pacer.wait().await;

            let path = format!("/route/{}/", route_id);
            match self.client.get_json::<Value>(&path, &[]).await {
                Ok(route) => {
                    tracing::info!(route_id, "Fetched route");
                    routes.insert(route_id.to_string(), route);
                }
                Err(e) => {
                    tracing::warn!(route_id, status = ?e.status(), error = %e, "Skipping route");
                    skipped.push(route_id);
                }
            }
        }

        (routes, skipped)
    }
}

/// Distinct route ids referenced by outings, in ascending order.
///
/// Outings without a route reference are ignored.
pub fn distinct_route_ids(outings: &[Outing]) -> BTreeSet<u64> {
    outings.iter().filter_map(Outing::linked_route).collect()
}
