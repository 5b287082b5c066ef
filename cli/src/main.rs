use anyhow::Result;
use clap::Parser;
use findex_core::{config, persist, DocumentStore, InvertedIndex, QueryEngine, TermLimits};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

mod loader;

#[derive(Parser)]
#[command(name = "findex")]
#[command(about = "Index a directory of text files and answer boolean queries", long_about = None)]
struct Cli {
    /// Source directory of plain-text documents
    dir: PathBuf,
    /// Shortest term length to index
    #[arg(long, default_value_t = config::DEFAULT_MIN_TERM_LEN)]
    min_term_len: usize,
    /// Longest term length to index
    #[arg(long, default_value_t = config::DEFAULT_MAX_TERM_LEN)]
    max_term_len: usize,
    /// Export the finished index to a flat file after the build
    #[arg(long)]
    save_index: Option<PathBuf>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let start = Instant::now();
    let store = loader::load_documents(&cli.dir)?;
    let stats = store.stats();
    println!("Documents extracted in: {:.1} ms", start.elapsed().as_secs_f64() * 1000.0);
    println!("Number of source documents: {}", stats.num_docs);
    println!("Total corpus size: {:.2} MB", stats.total_bytes as f64 / 1024.0 / 1024.0);

    let limits = TermLimits::new(cli.min_term_len, cli.max_term_len);
    let start = Instant::now();
    let index = InvertedIndex::build(&store, limits);
    let istats = index.stats();
    println!("Index built in: {:.1} ms", start.elapsed().as_secs_f64() * 1000.0);
    println!("Number of indexed terms: {}", istats.num_terms);
    println!("Avg number of elements in postings list: {:.0}", istats.avg_postings_len);
    println!("Avg length of indexed term: {:.0}", istats.avg_term_len);

    if let Some(dest) = &cli.save_index {
        persist::save_index(&index, dest)?;
    }

    prompt(&index, &store)
}

/// Interactive read-eval loop. `:q` quits, `:index` dumps the index,
/// `:stats` prints statistics as JSON, `:save_index <path>` exports the
/// flat file, anything else runs as a boolean query.
fn prompt(index: &InvertedIndex, store: &DocumentStore) -> Result<()> {
    let engine = QueryEngine::new(index, store);
    let stdin = io::stdin();
    loop {
        print!("\nquery> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            return Ok(());
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == ":q" {
            return Ok(());
        }
        if input == ":index" || input == ":i" {
            dump_index(index);
        } else if input == ":stats" {
            print_stats(index, store)?;
        } else if let Some(rest) = input.strip_prefix(":save_index") {
            save_from_prompt(index, rest.trim());
        } else {
            run_query(&engine, store, input);
        }
    }
}

fn run_query(engine: &QueryEngine, store: &DocumentStore, query: &str) {
    let start = Instant::now();
    match engine.run(query) {
        Ok(ids) => {
            let mut results = 0usize;
            for id in &ids {
                if let Some(path) = store.doc_path(*id) {
                    println!("{}", path.display());
                    results += 1;
                }
            }
            println!(
                "{} results. Query executed in: {:.1} ms",
                results,
                start.elapsed().as_secs_f64() * 1000.0
            );
        }
        Err(err) => {
            println!("invalid query: {err}");
            println!("example: brutus AND caesar");
        }
    }
}

fn dump_index(index: &InvertedIndex) {
    for (term, postings) in index.iter() {
        let ids: Vec<String> = postings.iter().map(|id| id.to_string()).collect();
        println!("{} : [{}]", term, ids.join(", "));
    }
}

fn print_stats(index: &InvertedIndex, store: &DocumentStore) -> Result<()> {
    let stats = serde_json::json!({
        "store": store.stats(),
        "index": index.stats(),
    });
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn save_from_prompt(index: &InvertedIndex, destination: &str) {
    if destination.is_empty() {
        println!("error: need destination. Example:");
        println!(":save_index /home/joe/index.txt");
        return;
    }
    if let Err(err) = persist::save_index(index, Path::new(destination)) {
        println!("error: {err:#}");
    }
}
