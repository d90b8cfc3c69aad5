#![forbid(unsafe_code)]

//! `gridmark`: encode, decode, and resize board strings from the shell.
//!
//! ```sh
//! gridmark decode bU3Y1-U____-___f-0vwf0
//! printf '#..\n.#.\n..#\n' | gridmark encode
//! echo '{ "default_size": 7 }' | gridmark config
//! ```

mod cli;

use std::io::{self, Read};
use std::process;

use gridmark_core::{BoardMap, DEFAULT_BOARD, EditorConfig, Error, Grid, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, HELP_TEXT, VERSION};

const ENV_LOG: &str = "GRIDMARK_LOG";

fn main() {
    init_logging();

    let command = match Command::parse_from(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("Run with --help for usage information.");
            process::exit(2);
        }
    };

    let mut input = String::new();
    if matches!(command, Command::Encode | Command::Config)
        && let Err(err) = io::stdin().read_to_string(&mut input)
    {
        eprintln!("failed to read stdin: {err}");
        process::exit(1);
    }

    match run(&command, &input) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            tracing::debug!(?command, "command failed");
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Execute `command`, returning the text to print. `input` is stdin for
/// commands that read it.
fn run(command: &Command, input: &str) -> Result<String> {
    match command {
        Command::Help => Ok(HELP_TEXT.to_string()),
        Command::Version => Ok(format!("gridmark {VERSION}")),
        Command::Decode { board } => Ok(describe(&BoardMap::decode(board)?)),
        Command::Default => Ok(describe(&BoardMap::decode(DEFAULT_BOARD)?)),
        Command::Encode => parse_rendering(input)?.encode(),
        Command::Resize { board, size } => BoardMap::decode(board)?.resize(*size)?.encode(),
        Command::Config => load_config(input)?.to_json_string(),
    }
}

/// Parse a JSON editor config, or take the defaults for blank input.
fn load_config(text: &str) -> Result<EditorConfig> {
    if text.trim().is_empty() {
        return Ok(EditorConfig::default());
    }
    EditorConfig::from_json_str(text)
}

fn describe(board: &BoardMap) -> String {
    format!("size {}\n{board}", board.size())
}

/// Parse a `#`/`.` rendering: one line per row, blank lines ignored.
fn parse_rendering(text: &str) -> Result<BoardMap> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let Some(first) = rows.first() else {
        return Err(Error::MalformedBoard("no rows on stdin".into()));
    };
    let width = first.chars().count();

    let mut cells = Vec::with_capacity(width * rows.len());
    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() != width {
            return Err(Error::MalformedBoard(format!(
                "row {y} has {} cells, expected {width}",
                row.chars().count()
            )));
        }
        for c in row.chars() {
            match c {
                '#' => cells.push(true),
                '.' => cells.push(false),
                other => {
                    return Err(Error::MalformedBoard(format!(
                        "unexpected {other:?} in row {y}"
                    )));
                }
            }
        }
    }
    BoardMap::from_grid(Grid::from_vec(cells, width, rows.len())?)
}
