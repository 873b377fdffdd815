// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::fs;

use amplifi_discovery::{
    Catalog, ContentItem, Creator, DiscoveryEngine, FileHistoryStore, FilterConfig, QueryPlanner,
    SystemClock,
};

mod cli;
use cli::{Cli, Commands};

/// On-disk catalog shape consumed by every subcommand.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct CatalogFile {
    items: Vec<ContentItem>,
    creators: Vec<Creator>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        eprintln!("error: {:#}", error);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // History management needs no catalog; don't demand one.
    if let Commands::History { clear } = &cli.command {
        use amplifi_discovery::HistoryStore;
        let store = FileHistoryStore::open(&cli.history);
        if *clear {
            store.clear();
            println!("history cleared");
        } else {
            for record in store.list() {
                println!("{}  {}", record.timestamp_ms, record.query);
            }
        }
        return Ok(());
    }

    let engine = build_engine(&cli.catalog, &cli.history)?;

    match cli.command {
        Commands::Search {
            query,
            category,
            duration,
            date,
            sort,
            limit,
        } => {
            // Unknown filter strings normalize to "any" rather than erroring.
            let filters: FilterConfig = serde_json::from_value(serde_json::json!({
                "category": category,
                "duration": duration,
                "date": date,
                "sortBy": sort,
            }))?;
            let results = engine.search(&query, &filters);
            if results.is_empty() {
                println!("no results");
            }
            for (rank, result) in results.iter().take(limit).enumerate() {
                let strategies: Vec<String> = result
                    .matched_strategies
                    .iter()
                    .map(|kind| kind.to_string())
                    .collect();
                println!(
                    "{:>2}. [{:>8.2}] {} ({}) via {}",
                    rank + 1,
                    result.final_score,
                    result.item.title,
                    result.item.id,
                    strategies.join("+"),
                );
            }
        }
        Commands::Suggest { partial } => {
            for suggestion in engine.suggest(&partial) {
                println!("{:<10} {}", format!("[{:?}]", suggestion.kind), suggestion.text);
            }
        }
        Commands::Trending { limit } => {
            for item in engine.trending(limit) {
                println!("{} ({}) - {} views", item.title, item.id, item.view_count);
            }
        }
        Commands::Related { id, limit } => {
            let related = engine.related_to(&id, limit);
            if related.is_empty() {
                println!("no related content for '{}'", id);
            }
            for item in related {
                println!("{} ({})", item.title, item.id);
            }
        }
        // Handled above, before the catalog is loaded.
        Commands::History { .. } => unreachable!(),
    }

    Ok(())
}

fn build_engine(catalog_path: &str, history_path: &str) -> anyhow::Result<DiscoveryEngine> {
    let raw = fs::read_to_string(catalog_path)
        .with_context(|| format!("reading catalog file '{}'", catalog_path))?;
    let file: CatalogFile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing catalog file '{}'", catalog_path))?;

    let catalog = Catalog::new();
    for creator in file.creators {
        catalog.upsert_creator(creator);
    }
    for item in file.items {
        catalog.upsert_item(item);
    }

    Ok(DiscoveryEngine::with_parts(
        catalog,
        QueryPlanner::with_default_strategies(),
        Box::new(FileHistoryStore::open(history_path)),
        Box::new(SystemClock),
    ))
}
