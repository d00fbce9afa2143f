//! `paste-indent` command-line front end
//!
//! Reindents a block of text read from a file or stdin, or pastes it into a document file at
//! one or more carets the way an editor's "paste and indent" command would.
//!
//! # Usage
//!
//! ```bash
//! # Shift a snippet so its outermost lines start at column 8
//! cargo run -p paste-indent-cli -- --offset 8 snippet.rs
//!
//! # Paste a snippet into main.rs at line 3, column 4 and print the result
//! cargo run -p paste-indent-cli -- --into main.rs --at 3:4 snippet.rs
//! ```

mod args;
mod logging;

use args::{Args, ArgsError, Command, USAGE, parse_args};
use paste_indent::reindent;
use paste_indent_host::{
    Document, PasteError, PasteSettings, Selection, StaticClipboard, paste_from_clipboard,
};
use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Args(#[from] ArgsError),

    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    #[error(transparent)]
    Paste(#[from] PasteError),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Args(_) => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}

fn main() -> ExitCode {
    logging::init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "paste-indent failed");
            eprintln!("paste-indent: {err}");
            if matches!(err, CliError::Args(_)) {
                eprintln!();
                eprint!("{USAGE}");
            }
            err.exit_code()
        }
    }
}

fn try_main() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            print!("{USAGE}");
            Ok(())
        }
        Command::Run(args) => run(&args),
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let block = read_block(args.input.as_deref())?;

    let output = match &args.into {
        None => reindent(&block, args.offset, &args.options),
        Some(path) => paste_into(path, block, args)?,
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(CliError::Write)
}

fn paste_into(path: &Path, block: String, args: &Args) -> Result<String, CliError> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut document = Document::with_options(&source, args.options);
    let carets: Vec<Selection> = args.carets.iter().copied().map(Selection::caret).collect();
    let settings = PasteSettings {
        select_after: args.select_after,
    };
    let mut clipboard = StaticClipboard::new(block);

    let selections = paste_from_clipboard(&mut document, &carets, &mut clipboard, settings)?;
    tracing::debug!(
        path = %path.display(),
        pasted = selections.is_some(),
        "paste into document"
    );

    if args.show_selections {
        for selection in selections.iter().flatten() {
            eprintln!(
                "{}:{}-{}:{}",
                selection.anchor.line,
                selection.anchor.column,
                selection.active.line,
                selection.active.column
            );
        }
    }

    Ok(document.text_with_line_ending())
}

fn read_block(input: Option<&Path>) -> Result<String, CliError> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut block = String::new();
            io::stdin()
                .read_to_string(&mut block)
                .map_err(CliError::Stdin)?;
            Ok(block)
        }
    }
}
