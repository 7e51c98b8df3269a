// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use procure_search::search::{AutocompleteCatalog, SearchConfig, SearchService, SearchSession};
use serde_json::json;
use std::env;
use std::fs;
use std::sync::Arc;

/// Run a procurement search and print the normalized results
#[derive(Parser, Debug)]
#[command(name = "procure-search")]
#[command(version = "0.1.0")]
#[command(about = "Query the procurement search backend", long_about = None)]
struct Cli {
    /// Free-text query
    query: String,

    /// Filter tag to search under
    #[arg(long)]
    filter: Option<String>,

    /// Search backend base URL
    #[arg(long, env = "SEARCH_API_URL")]
    base_url: Option<String>,

    /// Query endpoint (absolute URL with --absolute)
    #[arg(long)]
    endpoint: Option<String>,

    /// Treat --endpoint as an absolute URL
    #[arg(long)]
    absolute: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = SearchConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if cli.absolute {
        config.endpoint_override = true;
    }
    config.validate().context("invalid search configuration")?;

    let catalog = match &config.autocomplete_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            AutocompleteCatalog::from_json(&json).context("invalid autocomplete catalog")?
        }
        None => AutocompleteCatalog::sample(),
    };

    let session = Arc::new(SearchSession::with_catalog(config.history_capacity, catalog));
    session.set_query(&cli.query).await;
    let service = SearchService::with_http(config, session.clone())
        .context("failed to create search transport")?;

    let summaries = service
        .perform_search(&cli.query, cli.filter.as_deref())
        .await;

    let status = session.status().await;
    let output = json!({
        "status": status.status,
        "message": status.message,
        "summaries": summaries,
        "results": session.collections().await,
        "suggestions": session.autocomplete().await,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    if status.is_failed() {
        std::process::exit(1);
    }
    Ok(())
}
