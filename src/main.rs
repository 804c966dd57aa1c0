//! Wordlist CLI - scrape the word list, search it, or serve searches.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use std::process::ExitCode;
use wordlist::config::Config;
use wordlist::console::Console;
use wordlist::server::{DEFAULT_ADDR, Server};
use wordlist::{HttpSource, OUTPUT_FILE, SolveMode, Solver, WordListBuilder};

/// Scrabble word list builder.
#[derive(Parser, Debug)]
#[command(name = "wordlist")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape every category page into wordlist.txt (default).
    Build,

    /// Find words in wordlist.txt that can be spelled from LETTERS.
    Solve {
        /// Letters available to spell with.
        letters: String,

        /// Whether letters may be reused.
        #[arg(long, value_enum, default_value_t = SolveMode::Scrabble)]
        mode: SolveMode,
    },

    /// Answer protobuf word requests over TCP using wordlist.txt.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = DEFAULT_ADDR)]
        addr: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let console = Console::new();

    let result = match args.command.unwrap_or(Command::Build) {
        Command::Build => build(&console).await,
        Command::Solve { letters, mode } => solve(&console, &letters, mode),
        Command::Serve { addr } => serve(&console, &addr).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console.error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn build(console: &Console) -> Result<()> {
    let (config, problem) = Config::load_or_default();
    if let Some(e) = problem {
        console.warning(&format!("Ignoring configuration, using defaults: {}", e));
    }

    let source = HttpSource::new(&config.http, config.scraping.clone())
        .context("Failed to create HTTP client")?;
    let builder = WordListBuilder::new(source, console.clone());

    console.step(&format!("Fetching index {}", builder.index_url()));
    let words = builder
        .run(Path::new(OUTPUT_FILE))
        .await
        .context("Failed to build word list")?;

    console.success(&format!(
        "Wrote {} words to {}",
        console.count(words.len()),
        OUTPUT_FILE
    ));
    Ok(())
}

fn load_solver() -> Result<Solver> {
    Solver::load(Path::new(OUTPUT_FILE))
        .with_context(|| format!("Run `wordlist build` first to create {}", OUTPUT_FILE))
}

fn solve(console: &Console, letters: &str, mode: SolveMode) -> Result<()> {
    let solver = load_solver()?;

    let found = solver.solve(letters, mode);
    for word in &found {
        console.line(word);
    }

    console.info(&console.muted(&format!(
        "{} of {} words match",
        found.len(),
        solver.len()
    )));
    Ok(())
}

async fn serve(console: &Console, addr: &str) -> Result<()> {
    let solver = load_solver()?;
    let words = solver.len();

    let server = Server::bind(addr, solver, console.clone())
        .await
        .with_context(|| format!("Failed to listen on {}", addr))?;

    console.info(&format!(
        "Serving {} words on {}",
        console.count(words),
        server.local_addr()?
    ));
    server.run().await;
    Ok(())
}
