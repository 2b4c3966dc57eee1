//! lexi - interactive dictionary lookup backed by LexiCache

mod repl;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lexcache::{checked_capacity, LookupService, DEFAULT_CAPACITY};
use lexstore::DEFAULT_STORE_FILE;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::repl::{Repl, ReplOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dictionary store file (.json or .toon)
    #[arg(short, long, env = "LEXI_STORE", default_value = DEFAULT_STORE_FILE)]
    store: PathBuf,

    /// Cache capacity (number of entries)
    #[arg(
        short,
        long,
        env = "LEXI_CAPACITY",
        default_value_t = DEFAULT_CAPACITY as i64,
        allow_negative_numbers = true
    )]
    capacity: i64,

    /// Look words up exactly as typed (default lowercases input)
    #[arg(long)]
    keep_case: bool,

    /// Print entries as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with lookup output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let capacity = checked_capacity(args.capacity)?;
    let lookup = LookupService::open(&args.store, capacity)
        .with_context(|| format!("Failed to load dictionary {}", args.store.display()))?;

    info!("Starting lexi v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Loaded {} entries from {}",
        lookup.store().len(),
        args.store.display()
    );
    info!("Cache capacity: {}", capacity);

    let options = ReplOptions {
        keep_case: args.keep_case,
        json: args.json,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(lookup, options);
    repl.run(stdin.lock(), stdout.lock())?;

    let stats = repl.lookup().stats();
    info!(
        "Session ended: {} lookups, hit ratio {:.2}",
        stats.lookups(),
        stats.hit_ratio()
    );

    Ok(())
}
