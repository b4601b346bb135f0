use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pxi::{parse_query, Index, QueryExecutor, Text, TextPosition, DEFAULT_MAX_DISTANCE};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "pxi")]
#[command(about = "In-memory phrase search over Unicode text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a text file with a query expression
    Search {
        /// UTF-8 text file to index
        file: PathBuf,

        /// Words combined with _AND_/_OR_/_NOT_ and parentheses
        query: String,

        /// Maximum distance between pattern starts for co-occurrence
        #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DISTANCE)]
        max_distance: usize,

        /// Maximum positions to print
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,

        /// Code units of context shown around each position
        #[arg(short = 'c', long, default_value = "12")]
        context: usize,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the index and print statistics
    Stats {
        /// UTF-8 text file to index
        file: PathBuf,

        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct SearchReport {
    query: String,
    total: usize,
    positions: Vec<TextPosition>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            file,
            query,
            max_distance,
            limit,
            context,
            json,
        } => run_search(&file, &query, max_distance, limit, context, json),
        Commands::Stats { file, json } => run_stats(&file, json),
    }
}

fn load_text(file: &Path) -> Result<Text> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    Ok(Text::from(content))
}

fn run_search(
    file: &Path,
    query: &str,
    max_distance: usize,
    limit: usize,
    context: usize,
    json: bool,
) -> Result<()> {
    let text = load_text(file)?;

    let build_start = Instant::now();
    let index = Index::build(text);
    let build_time = build_start.elapsed();

    let expr = parse_query(query);
    if expr.is_empty() {
        println!("empty query");
        return Ok(());
    }

    let search_start = Instant::now();
    let executor = QueryExecutor::with_max_distance(&index, max_distance);
    let positions = executor.execute(&expr);
    let search_time = search_start.elapsed();

    if json {
        let report = SearchReport {
            query: query.to_string(),
            total: positions.len(),
            positions,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "indexed {} code units in {:.2?}, searched in {:.2?}",
        index.len(),
        build_time,
        search_time
    );
    println!("{} match(es)", positions.len());

    for &pos in positions.iter().take(limit) {
        println!("{:>8}  {}", pos, snippet_around(&index, pos, context));
    }
    if positions.len() > limit {
        println!("... and {} more", positions.len() - limit);
    }

    Ok(())
}

fn run_stats(file: &Path, json: bool) -> Result<()> {
    let text = load_text(file)?;

    let build_start = Instant::now();
    let index = Index::build(text);
    let build_time = build_start.elapsed();
    let stats = index.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("text length:  {} code units", stats.text_len);
    println!("suffixes:     {}", stats.suffix_count);
    match stats.max_unit {
        Some(u) => println!("max unit:     U+{u:04X}"),
        None => println!("max unit:     (empty text)"),
    }
    println!("built in {build_time:.2?}");

    Ok(())
}

/// A one-line excerpt of the text around `pos`, newlines flattened.
fn snippet_around(index: &Index, pos: TextPosition, context: usize) -> String {
    let start = pos.saturating_sub(context);
    let excerpt = Text::from_units(index.text().slice(start, pos + context).to_vec());
    excerpt
        .to_string()
        .replace(['\n', '\r', '\t'], " ")
}
