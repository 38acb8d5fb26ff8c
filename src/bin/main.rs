use anyhow::Result;
use clap::Parser;
use cologne_core::config::{DEFAULT_LOG_PATH, DEFAULT_RATINGS_PATH};
use cologne_core::core::browser::ALL_TYPES;
use cologne_core::persistence::RequestLogger;
use cologne_core::{Analysis, CatalogFilter, CatalogStore, Config, FragranceEntry, Session};
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Interactive fragrance profiler and layering assistant.
#[derive(Parser, Debug)]
#[command(name = "cologne")]
#[command(about = "Profile your fragrance collection and find layering pairs")]
struct Args {
    /// Combo ratings JSON (read only)
    #[arg(long, env = "COLOGNE_RATINGS", default_value = DEFAULT_RATINGS_PATH)]
    ratings: PathBuf,

    /// Append-only custom request log
    #[arg(long, env = "COLOGNE_LOG", default_value = DEFAULT_LOG_PATH)]
    log: PathBuf,

    /// JSON catalog to use instead of the built-in one
    #[arg(long, env = "COLOGNE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Config {
            ratings_path: args.ratings.clone(),
            log_path: args.log.clone(),
            catalog_path: args.catalog.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = Config::from(&args);
    let catalog = config.load_catalog()?;
    let ratings = config.load_ratings();
    let logger = config.request_logger();
    info!(entries = catalog.len(), ratings = ratings.len(), "cologne starting");

    let mut session = Session::new();
    let mut filter = CatalogFilter::new();
    let input = stdin();
    let mut input = input.lock();

    let mut out = stdout();
    execute!(out, Clear(ClearType::All))?;
    println!("{}", "CologneGPT: Personalized Fragrance Recommender".bold());
    println!("Type 'help' for commands, 'exit' to quit.");

    loop {
        print!("\n> ");
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match cmd {
            "" => {}
            "exit" | "quit" => break,
            "help" => print_help(),
            "own" => {
                if session.add_owned(rest) {
                    report_unknown(&catalog, rest);
                } else {
                    println!("Usage: own <fragrance name>");
                }
            }
            "paste" => {
                println!("Enter your fragrances, one per line. Finish with an empty line.");
                let text = read_block(&mut input)?;
                session.set_collection(&text);
                println!("{} fragrance(s) entered.", session.collection().len());
            }
            "clear" => {
                session.clear_collection();
                println!("Collection cleared.");
            }
            "list" => {
                for name in session.collection().names() {
                    println!("- {}", name);
                }
            }
            "profile" => print_profile(&session.analyze(&catalog)),
            "suggest" => print_suggestions(&session.analyze(&catalog)),
            "save" => {
                let analysis = session.analyze(&catalog);
                match rest.parse::<usize>() {
                    Ok(n) if n > 0 && n <= analysis.suggestions.len() => {
                        let chosen = &analysis.suggestions[n - 1];
                        if session.save_suggestion(chosen) {
                            println!("{}", format!("Saved hybrid: {}", chosen.combo_key()).green());
                        } else {
                            println!("Already saved: {}", chosen.combo_key());
                        }
                    }
                    _ => println!("Usage: save <n>, where n is a number from 'suggest'"),
                }
            }
            "saved" => print_saved(&session),
            "types" => {
                println!("{}", ALL_TYPES);
                for kind in catalog.types() {
                    println!("{}", kind);
                }
            }
            "type" => {
                filter.set_type(Some(rest));
                print_matches(&catalog, &filter);
            }
            "search" => {
                filter.set_query(Some(rest));
                print_matches(&catalog, &filter);
            }
            "browse" => print_matches(&catalog, &filter),
            "submit" => submit(&session, &logger, &mut input)?,
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }
    }

    info!("cologne shutting down");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!("{}", "Collection".bold());
    println!("  own <name>       add a fragrance you own");
    println!("  paste            enter the whole list, one per line");
    println!("  list | clear     show or empty the list");
    println!("{}", "Analysis".bold());
    println!("  profile          your dominant scent notes");
    println!("  suggest          layering pairs that share notes");
    println!("  save <n>         keep suggestion n as a hybrid");
    println!("  saved            show saved hybrids");
    println!("  submit           send a custom request for saved hybrids");
    println!("{}", "Catalog".bold());
    println!("  types            list scent types");
    println!("  type <label>     filter by type ('{}' clears)", ALL_TYPES);
    println!("  search <text>    filter by name (empty clears)");
    println!("  browse           show entries matching the filters");
}

fn read_block(input: &mut impl BufRead) -> std::io::Result<String> {
    let mut text = String::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim().is_empty() {
            return Ok(text);
        }
        text.push_str(&line);
    }
}

fn prompt(label: &str, input: &mut impl BufRead) -> std::io::Result<String> {
    print!("{}: ", label);
    stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn report_unknown(catalog: &CatalogStore, name: &str) {
    if !catalog.contains(name.trim()) {
        println!("{}", format!("'{}' is not in the catalog; it will be ignored.", name.trim()).yellow());
    }
}

fn print_profile(analysis: &Analysis) {
    println!("{}", "Your Scent Profile".bold());
    if analysis.profile.is_empty() {
        println!("No known fragrances yet. Use 'own' or 'paste'.");
    }
    for row in analysis.profile.iter() {
        println!("  {:<16} {}", row.note, row.count);
    }
    if !analysis.unresolved.is_empty() {
        println!("{}", format!("Ignored: {}", analysis.unresolved.join(", ")).yellow());
    }
}

fn print_suggestions(analysis: &Analysis) {
    println!("{}", "Smart Layering Suggestions".bold());
    if analysis.suggestions.is_empty() {
        println!("No pairs in your collection share notes.");
    }
    for (i, s) in analysis.suggestions.iter().enumerate() {
        let shared: Vec<&str> = s.shared_notes.iter().map(String::as_str).collect();
        println!("  :{}: {} (Shared notes: {})", i + 1, s.combo_key(), shared.join(", "));
    }
}

fn print_saved(session: &Session) {
    println!("{}", "Saved Hybrids for Custom Requests".bold());
    if session.saved().is_empty() {
        println!("Nothing saved yet. Use 'suggest' then 'save <n>'.");
    }
    for key in session.saved().list_all() {
        println!("- {}", key);
    }
}

fn print_entry(entry: &FragranceEntry) {
    println!("{}", entry.name.as_str().bold());
    println!("- Profile: {}", entry.profile.join(", "));
    println!("- Category: {}", entry.category);
    println!("- Occasion: {}", entry.occasion.join(", "));
    println!("- Type: {}", entry.kind);
}

fn print_matches(catalog: &CatalogStore, filter: &CatalogFilter) {
    let hits = filter.apply(catalog);
    println!("{}", format!("Matching Scents ({})", hits.len()).bold());
    for entry in hits {
        print_entry(entry);
    }
}

fn submit(session: &Session, logger: &RequestLogger, input: &mut impl BufRead) -> Result<()> {
    if session.saved().is_empty() {
        println!("Save at least one hybrid before submitting.");
        return Ok(());
    }
    print_saved(session);
    let name = prompt("Your Name", input)?;
    let email = prompt("Your Email", input)?;
    println!("Additional Notes (finish with an empty line):");
    let notes = read_block(input)?;

    match session.submit(logger, &name, &email, notes.trim_end()) {
        Ok(_) => println!("{}", "Your request has been logged.".green()),
        Err(e) => eprintln!("{}", format!("[ERROR] Could not log request: {}", e).red()),
    }
    Ok(())
}
