//! Command-line argument parsing.

use paste_indent::IndentOptions;
use paste_indent_host::Position;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
usage: paste-indent [--offset N] [--tabs] [--tab-size N] [FILE]
       paste-indent --into DOC [--at LINE:COL]... [--select-after] [--show-selections]
                    [--tabs] [--tab-size N] [FILE]

Reads a block of text from FILE (or stdin) and writes it reindented to stdout.

  --offset N         target indentation, in indent characters (default 0)
  --tabs             indent with tabs instead of spaces
  --tab-size N       columns per tab stop (default 4)
  --into DOC         paste the block into DOC and print the resulting document
  --at LINE:COL      zero-based caret to paste at; repeat for several carets (default 0:0)
  --select-after     select the reindented lines after pasting
  --show-selections  print the selections after pasting to stderr
  -h, --help         show this help

Set RUST_LOG (e.g. RUST_LOG=paste_indent=debug) for diagnostics on stderr.
";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid number for {flag}: '{value}'")]
    InvalidNumber { flag: String, value: String },

    #[error("invalid caret '{0}', expected LINE:COL")]
    InvalidCaret(String),

    #[error("tab size must be greater than 0")]
    ZeroTabSize,

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("{0} only applies together with --into")]
    RequiresInto(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub offset: usize,
    pub options: IndentOptions,
    pub input: Option<PathBuf>,
    pub into: Option<PathBuf>,
    pub carets: Vec<Position>,
    pub select_after: bool,
    pub show_selections: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            offset: 0,
            options: IndentOptions::default(),
            input: None,
            into: None,
            carets: Vec::new(),
            select_after: false,
            show_selections: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Args),
}

pub fn parse_args<I>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--tabs" => parsed.options.insert_spaces = false,
            "--select-after" => parsed.select_after = true,
            "--show-selections" => parsed.show_selections = true,
            "--offset" => parsed.offset = parse_number(&arg, args.next())?,
            "--tab-size" => {
                parsed.options.tab_size = parse_number(&arg, args.next())?;
                if parsed.options.tab_size == 0 {
                    return Err(ArgsError::ZeroTabSize);
                }
            }
            "--into" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                parsed.into = Some(PathBuf::from(value));
            }
            "--at" => {
                let value = args.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                parsed.carets.push(parse_caret(&value)?);
            }
            "-" if parsed.input.is_none() => {}
            flag if flag.starts_with('-') => {
                return Err(ArgsError::UnknownOption(flag.to_string()));
            }
            _ if parsed.input.is_none() => parsed.input = Some(PathBuf::from(&arg)),
            _ => return Err(ArgsError::UnexpectedArgument(arg.clone())),
        }
    }

    if parsed.into.is_none() {
        if !parsed.carets.is_empty() {
            return Err(ArgsError::RequiresInto("--at"));
        }
        if parsed.select_after {
            return Err(ArgsError::RequiresInto("--select-after"));
        }
        if parsed.show_selections {
            return Err(ArgsError::RequiresInto("--show-selections"));
        }
    } else if parsed.carets.is_empty() {
        parsed.carets.push(Position::new(0, 0));
    }

    Ok(Command::Run(parsed))
}

fn parse_number(flag: &str, value: Option<String>) -> Result<usize, ArgsError> {
    let value = value.ok_or_else(|| ArgsError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| ArgsError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}

fn parse_caret(value: &str) -> Result<Position, ArgsError> {
    let invalid = || ArgsError::InvalidCaret(value.to_string());
    let (line, column) = value.split_once(':').ok_or_else(invalid)?;
    let line = line.parse().map_err(|_| invalid())?;
    let column = column.parse().map_err(|_| invalid())?;
    Ok(Position::new(line, column))
}
