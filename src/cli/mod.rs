// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lexis command-line interface.
//!
//! Every subcommand loads the dataset first. `serve` then exposes it over HTTP;
//! `lookup`, `suggest`, `correct` and `stats` run one query and print the result,
//! either pretty for a terminal or as JSON with `--json`.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lexis",
    about = "Dictionary lookup with autocomplete and spelling corrections",
    version
)]
pub struct Cli {
    /// Dataset CSV (one `word,definition` record per line)
    #[arg(short, long, global = true, env = "LEXIS_DATASET", default_value = "dictionary.csv")]
    pub dataset: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the lexicon over HTTP
    #[cfg(feature = "server")]
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "LEXIS_BIND", default_value = "0.0.0.0:8080")]
        bind: std::net::SocketAddr,

        /// Default number of suggestions per request
        #[arg(long, default_value = "10")]
        suggest_limit: usize,

        /// Max edit distance for corrections offered on a search miss
        #[arg(long, default_value = "2")]
        search_max_distance: usize,

        /// Number of corrections offered on a search miss
        #[arg(long, default_value = "3")]
        search_limit: usize,

        /// Default max edit distance for the corrections endpoint
        #[arg(long, default_value = "3")]
        correct_max_distance: usize,

        /// Default number of results for the corrections endpoint
        #[arg(long, default_value = "10")]
        correct_limit: usize,
    },

    /// Look up the definitions of a word
    Lookup {
        word: String,

        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Words starting with a prefix, in dataset order
    Suggest {
        prefix: String,

        /// Maximum number of suggestions (<= 0 returns nothing)
        #[arg(short, long, default_value = "10", allow_negative_numbers = true)]
        limit: i64,

        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Spelling corrections ranked by edit distance
    Correct {
        word: String,

        /// Maximum edit distance (must be >= 0)
        #[arg(long, default_value = "3", allow_negative_numbers = true)]
        max_distance: i64,

        /// Maximum number of corrections (<= 0 returns nothing)
        #[arg(short, long, default_value = "10", allow_negative_numbers = true)]
        limit: i64,

        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Dataset statistics
    Stats {
        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}
