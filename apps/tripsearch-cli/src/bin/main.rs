use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tripsearch_core::config::Config;
use tripsearch_core::types::{
    Language, SearchFilters, SearchQuery, SearchResponse, SearchResult, SearchSuggestion,
};
use tripsearch_rank::RankingEngine;

#[derive(Parser)]
#[command(name = "tripsearch", about = "Bilingual travel destination search", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank places for a query and list suggestions
    Search {
        query: String,
        /// Language code; anything other than `th` searches English fields
        #[arg(long, default_value = "en")]
        lang: String,
        /// Keep only places in this province (repeatable)
        #[arg(long = "province")]
        provinces: Vec<String>,
        /// Keep only places in this category (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Keep only places offering one of these amenities (repeatable)
        #[arg(long = "amenity")]
        amenities: Vec<String>,
        /// Print the response envelope as JSON
        #[arg(long)]
        json: bool,
    },

    /// Type-ahead suggestions only
    Suggest {
        query: String,
        #[arg(long, default_value = "en")]
        lang: String,
        #[arg(long)]
        json: bool,
    },

    /// Trending search terms
    Trending {
        #[arg(long, default_value = "en")]
        lang: String,
    },

    /// Run a JSON array of queries in parallel and print the responses as JSON
    Batch {
        /// File holding `[{ "query", "language", "filters" }, ...]`; stdin when omitted
        input: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_results(results: &[SearchResult]) {
    println!("\n🔍 Found {} results", results.len());
    for (i, r) in results.iter().enumerate() {
        println!(
            "\n  {}. {:.3}  {} ({})  {} · {} · ⭐ {:.1} ({} reviews)",
            i + 1,
            r.confidence,
            r.name,
            r.name_local,
            r.province,
            r.category,
            r.rating,
            r.review_count
        );
        if !r.matched_terms.is_empty() {
            println!("     🎯 Matched: {}", r.matched_terms.join(", "));
        }
        println!("     📝 {}", r.description);
    }
}

fn print_suggestions(suggestions: &[SearchSuggestion]) {
    println!("\n💡 {} suggestions", suggestions.len());
    for s in suggestions {
        println!("  [{}] {:.3}  {} · {}", s.kind.as_str(), s.confidence, s.text, s.description);
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// One batch output entry: the usual response envelope, or the error that
/// stopped that query.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum BatchEntry {
    Response(SearchResponse),
    Failed { query: String, error: String },
}

/// One entry per query, in input order. A failed search does not abort the batch.
fn run_batch(engine: &RankingEngine, queries: &[SearchQuery]) -> Vec<BatchEntry> {
    info!(queries = queries.len(), "running batch");
    queries
        .iter()
        .zip(engine.search_many(queries))
        .map(|(q, outcome)| match outcome {
            Ok(outcome) => BatchEntry::Response(SearchResponse::new(q.query.as_str(), outcome)),
            Err(e) => {
                warn!(query = %q.query, error = %e, "search failed");
                BatchEntry::Failed { query: q.query.clone(), error: e.to_string() }
            }
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = Config::load().context("loading configuration")?;
    let engine = RankingEngine::from_config(&config).context("building search engine")?;

    match cli.command {
        Command::Search { query, lang, provinces, categories, amenities, json } => {
            let filters = SearchFilters { provinces, categories, amenities };
            let request = SearchQuery::new(query, Language::from_code(&lang)).with_filters(filters);
            let response = engine.respond(&request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("🔍 tripsearch\n==================");
                println!("Query: {}  Language: {}", response.query, request.language);
                print_results(&response.results);
                print_suggestions(&response.suggestions);
            }
        }
        Command::Suggest { query, lang, json } => {
            let suggestions = engine.suggest(&SearchQuery::new(query, Language::from_code(&lang)));
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                print_suggestions(&suggestions);
            }
        }
        Command::Trending { lang } => {
            println!("📈 Trending");
            for (i, term) in engine.trending(Language::from_code(&lang)).iter().enumerate() {
                println!("  {}. {}", i + 1, term);
            }
        }
        Command::Batch { input, pretty } => {
            let queries: Vec<SearchQuery> =
                serde_json::from_str(&read_input(input.as_deref())?).context("parsing query batch")?;
            let output = run_batch(&engine, &queries);
            let rendered = if pretty { serde_json::to_string_pretty(&output)? } else { serde_json::to_string(&output)? };
            println!("{rendered}");
        }
    }
    Ok(())
}
