// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Summit-Scout CLI
//!
//! `fetch` dumps outings, summits and routes to JSON; `recommend` turns the
//! dumps into route recommendations.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use summit_scout::{
    config::Config,
    services::{ApiClient, ChatClient, DataStore, Fetcher, Recommender},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "summit-scout")]
#[command(version, about = "Fetch outing history and recommend new mountain routes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the JSON dumps (overrides DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch outings, summits and routes and save them as JSON
    Fetch,
    /// Recommend three new routes from the saved data
    Recommend,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    let store = DataStore::new(&config.data_dir);

    match cli.command {
        Commands::Fetch => {
            tracing::info!(
                api = %config.api_base_url,
                user_id = config.user_id,
                data_dir = %store.dir().display(),
                "Starting fetch"
            );
            let client = ApiClient::from_config(&config)?;
            let mut fetcher = Fetcher::new(client, store, &config);
            let summary = fetcher.run().await.context("Fetch failed")?;
            tracing::info!(
                outings = summary.outings,
                summits = summary.summits,
                summit_routes = summary.summit_routes,
                routes_from_outings = summary.routes_from_outings,
                skipped = summary.skipped_route_ids.len(),
                "Fetch complete"
            );
        }
        Commands::Recommend => {
            let chat = ChatClient::from_config(&config)?;
            let recommender = Recommender::new(chat, store, &config);
            let text = recommender
                .recommend()
                .await
                .context("Recommendation failed")?;
            println!("{}", text);
        }
    }

    Ok(())
}

/// Initialize logging: human-readable by default, flattened JSON on request.
fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("summit_scout=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact().with_target(false))
            .init();
    }
}
