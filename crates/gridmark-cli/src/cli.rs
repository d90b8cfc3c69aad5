#![forbid(unsafe_code)]

//! Command-line argument parsing for the `gridmark` tool.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
gridmark: encode and decode square board strings

USAGE:
    gridmark <COMMAND> [ARGS]

COMMANDS:
    decode <BOARD>          Print the size and a #/. rendering of BOARD
    encode                  Read a #/. rendering from stdin and print its string
    resize <BOARD> <SIZE>   Print the string of BOARD grown or shrunk to SIZE
    default                 Render the editor's default board
    config                  Validate an editor config (JSON on stdin, empty for
                            defaults) and print it with every field filled in

OPTIONS:
    --help, -h              Show this help message
    --version, -V           Show version
    --                      Treat the remaining arguments as positional

ENVIRONMENT VARIABLES:
    GRIDMARK_LOG            Log filter directive (default: warn)";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Decode { board: String },
    Encode,
    Resize { board: String, size: usize },
    Default,
    Config,
    Help,
    Version,
}

impl Command {
    /// Parse arguments, excluding the program name.
    pub fn parse_from<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut positional = Vec::new();
        let mut options_done = false;
        for arg in args {
            if options_done {
                positional.push(arg);
                continue;
            }
            match arg.as_str() {
                "--" => options_done = true,
                "--help" | "-h" => return Ok(Self::Help),
                "--version" | "-V" => return Ok(Self::Version),
                other if other.starts_with('-') && other.len() > 1 && !is_board_like(other) => {
                    return Err(format!("Unknown argument: {other}"));
                }
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let Some(command) = positional.next() else {
            return Ok(Self::Help);
        };
        let parsed = match command.as_str() {
            "decode" => Self::Decode {
                board: required(&mut positional, "decode", "BOARD")?,
            },
            "encode" => Self::Encode,
            "resize" => {
                let board = required(&mut positional, "resize", "BOARD")?;
                let size = required(&mut positional, "resize", "SIZE")?;
                let size = size
                    .parse()
                    .map_err(|_| format!("Invalid SIZE value: {size}"))?;
                Self::Resize { board, size }
            }
            "default" => Self::Default,
            "config" => Self::Config,
            other => return Err(format!("Unknown command: {other}")),
        };
        if let Some(extra) = positional.next() {
            return Err(format!("Unexpected argument: {extra}"));
        }
        Ok(parsed)
    }
}

fn required(
    args: &mut impl Iterator<Item = String>,
    command: &str,
    name: &str,
) -> Result<String, String> {
    args.next()
        .ok_or_else(|| format!("{command}: missing {name}"))
}

/// Board strings may start with `-` (value 62), so only flag-shaped words
/// (`--foo`, `-x`) count as options.
fn is_board_like(arg: &str) -> bool {
    !arg.starts_with("--") && arg.len() > 2
}
