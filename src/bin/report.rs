// One-shot analysis: owned names in, JSON report out.
// Run with: cargo run --bin cologne_report -- "Dior Sauvage EDT" "Dior Sauvage EDP"
//      or: printf 'YSL Y\nCreed Aventus\n' | cargo run --bin cologne_report
use anyhow::{Context, Result};
use clap::Parser;
use cologne_core::{Config, ProfileEngine, UserCollection};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cologne_report")]
#[command(about = "Print the note profile and layering suggestions for a collection as JSON")]
struct Args {
    /// Owned fragrance names; read from stdin (one per line) when empty
    names: Vec<String>,

    /// JSON catalog to use instead of the built-in one
    #[arg(long, env = "COLOGNE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(io::stderr)
        .init();

    let config = Config {
        catalog_path: args.catalog.clone(),
        ..Config::default()
    };
    let catalog = config.load_catalog()?;

    let collection = if args.names.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading fragrance names from stdin")?;
        UserCollection::parse(&text)
    } else {
        UserCollection::from_names(&args.names)
    };

    let analysis = ProfileEngine::new(&collection, &catalog).analyze();
    let json = if args.pretty {
        serde_json::to_string_pretty(&analysis)?
    } else {
        serde_json::to_string(&analysis)?
    };

    let mut out = io::stdout().lock();
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}
