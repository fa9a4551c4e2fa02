use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use watchlist::view::{dispatch, Command, Outcome};
use watchlist::{CatalogConfig, CatalogStore};

/// Browse and extend a small in-memory movie and show list.
#[derive(Parser, Debug)]
#[command(name = "watchlist", version)]
struct Args {
    /// TOML file with draft rating defaults and seed movies.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log filter, e.g. `debug` or `watchlist=info`. RUST_LOG wins when set.
    #[arg(long, default_value = "warn")]
    log_level: String,
    /// Print the full state as JSON after every command.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = CatalogConfig::load(args.config.as_deref()).context("failed to load config")?;
    let mut store = CatalogStore::from_config(&config)?;
    tracing::info!(movies = store.len(), "catalog ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Favorite Movies & Shows (type `help` for commands)\n")?;
    if let Outcome::Print(text) = dispatch(&mut store, Command::List) {
        writeln!(stdout, "{}", text)?;
    }

    loop {
        write!(stdout, "\n> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{}", err)?;
                continue;
            }
        };

        match dispatch(&mut store, command) {
            Outcome::Print(text) => writeln!(stdout, "{}", text)?,
            Outcome::Quit => break,
        }

        if args.json {
            writeln!(stdout, "{}", serde_json::to_string(&store.snapshot())?)?;
        }
    }

    Ok(())
}
