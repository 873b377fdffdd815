// Copyright 2025-present Amplifi
// SPDX-License-Identifier: Apache-2.0

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "amplifi-discovery",
    about = "Content search, trending, and recommendations over a catalog file",
    version
)]
pub struct Cli {
    /// Path to the catalog JSON file ({"items": [...], "creators": [...]})
    #[arg(short, long, global = true, default_value = "catalog.json")]
    pub catalog: String,

    /// Path to the persisted search history file
    #[arg(long, global = true, default_value = "amplifi_history.json")]
    pub history: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a search against the catalog
    Search {
        /// Free-text query
        query: String,

        /// Category filter (exact match; "any" disables)
        #[arg(long, default_value = "any")]
        category: String,

        /// Duration filter: any, short, medium, long
        #[arg(long, default_value = "any")]
        duration: String,

        /// Date filter: any, today, week, month
        #[arg(long, default_value = "any")]
        date: String,

        /// Sort mode: relevance, upload_date, view_count, rating
        #[arg(long, default_value = "relevance")]
        sort: String,

        /// Maximum results to print
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Suggest completions for a partially-typed query
    Suggest {
        /// The partial query (needs at least 2 characters)
        partial: String,
    },

    /// List items trending over the last 24 hours
    Trending {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// List items related to a given item
    Related {
        /// Reference item id
        id: String,

        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Show or clear the persisted search history
    History {
        /// Clear instead of listing
        #[arg(long)]
        clear: bool,
    },
}
