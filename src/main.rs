// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lexis::{correct, lookup, suggest, Lexicon, Limit, LoadStats, MaxDistance};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries query results.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let (lexicon, stats) = load_dataset(&cli.dataset)?;

    match cli.command {
        #[cfg(feature = "server")]
        Commands::Serve {
            bind,
            suggest_limit,
            search_max_distance,
            search_limit,
            correct_max_distance,
            correct_limit,
        } => {
            let config = lexis::server::ServerConfig {
                suggest_limit,
                search_max_distance,
                search_limit,
                correct_max_distance,
                correct_limit,
            };
            run_server(bind, lexicon, config)
        }
        Commands::Lookup { word, json } => {
            let result = lookup(&lexicon, &word);
            if json {
                print_json(&result)
            } else {
                display::print_lookup(&word, &result);
                Ok(())
            }
        }
        Commands::Suggest {
            prefix,
            limit,
            json,
        } => {
            let words = suggest(&lexicon, &prefix, Limit::from_signed(limit).get());
            if json {
                print_json(&words)
            } else {
                display::print_suggestions(&prefix, &words);
                Ok(())
            }
        }
        Commands::Correct {
            word,
            max_distance,
            limit,
            json,
        } => {
            let max_distance = MaxDistance::try_from(max_distance).map_err(|e| e.to_string())?;
            let words = correct(
                &lexicon,
                &word,
                max_distance.get(),
                Limit::from_signed(limit).get(),
            );
            if json {
                print_json(&words)
            } else {
                display::print_corrections(&word, &words);
                Ok(())
            }
        }
        Commands::Stats { json } => {
            if json {
                print_json(&serde_json::json!({
                    "words": lexicon.distinct_word_count(),
                    "entries": lexicon.total_entry_count(),
                    "load": stats,
                }))
            } else {
                display::print_stats(
                    &cli.dataset.display().to_string(),
                    lexicon.distinct_word_count(),
                    &stats,
                );
                Ok(())
            }
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let out = serde_json::to_string_pretty(value).map_err(|e| format!("Failed to encode JSON: {}", e))?;
    println!("{}", out);
    Ok(())
}

#[cfg(feature = "parallel")]
fn load_dataset(path: &Path) -> Result<(Lexicon, LoadStats), String> {
    use indicatif::{ProgressBar, ProgressStyle};

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_prefix("Loading");
    spinner.set_message(path.display().to_string());

    let result = lexis::load_path_with_progress(path, |records| {
        spinner.set_message(format!("{} records", records));
        spinner.tick();
    });

    spinner.finish_and_clear();
    result.map_err(|e| e.to_string())
}

#[cfg(not(feature = "parallel"))]
fn load_dataset(path: &Path) -> Result<(Lexicon, LoadStats), String> {
    lexis::load_path(path).map_err(|e| e.to_string())
}

#[cfg(feature = "server")]
fn run_server(
    bind: std::net::SocketAddr,
    lexicon: Lexicon,
    config: lexis::server::ServerConfig,
) -> Result<(), String> {
    use std::sync::Arc;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {}", e))?;

    let state = lexis::server::AppState::new(Arc::new(lexicon), config);
    runtime
        .block_on(lexis::server::serve(bind, state))
        .map_err(|e| format!("Server error on {}: {}", bind, e))
}
