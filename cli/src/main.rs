use std::fs;
use std::io::{self, Read};

use boards::{BoardStore, StoreError, render};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod script;


use script::{ParseError, ScriptLine};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read script {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("line {line}: {source}")]
    Parse { line: usize, source: ParseError },
    #[error("line {line}: {source}")]
    Store { line: usize, source: StoreError },
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "taskboard-cli", about = "Drive the in-memory board store from the terminal")]
struct Cli {
    /// Start from an empty store instead of the seeded board.
    #[arg(long, env = "TASKBOARD_EMPTY")]
    empty: bool,

    /// Print the final store as JSON instead of text.
    #[arg(long, env = "TASKBOARD_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the initial store.
    Show,
    /// Apply a command script, then print the store.
    Run {
        #[arg(default_value = "-", help = "Script file path, or - for stdin")]
        script: String,

        /// Log rejected commands and continue instead of stopping.
        #[arg(long)]
        keep_going: bool,

        /// Print the store after every applied command.
        #[arg(long)]
        each: bool,
    },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut store = if cli.empty { BoardStore::new() } else { BoardStore::seeded() };

    if let Command::Run { script, keep_going, each } = &cli.command {
        let source = read_script(script)?;
        let lines = script::parse_script(&source).map_err(|(line, source)| CliError::Parse { line, source })?;
        info!(commands = lines.len(), path = %script, "running script");
        run_script(&mut store, lines, *keep_going, *each)?;
    }

    print_store(&store, cli.json)
}

fn read_script(path: &str) -> Result<String, CliError> {
    let result = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };
    result.map_err(|source| CliError::Read { path: path.to_owned(), source })
}

fn run_script(store: &mut BoardStore, lines: Vec<ScriptLine>, keep_going: bool, each: bool) -> Result<(), CliError> {
    for ScriptLine { line, command } in lines {
        match store.apply(command) {
            Ok(_) => {}
            Err(source) if keep_going => warn!(line, error = %source, "command rejected; continuing"),
            Err(source) => return Err(CliError::Store { line, source }),
        }
        if each {
            println!("-- after line {line}");
            print!("{}", render::to_text(store));
        }
    }
    Ok(())
}

fn print_store(store: &BoardStore, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", render::to_json(store)?);
    } else {
        print!("{}", render::to_text(store));
    }
    Ok(())
}
