mod check;
mod cli;


use std::io;
use std::process::ExitCode;

use clap::Parser as _;
use cli::{Cli, Command};
use quill_diagnostic::sources::SourceFile;
use quill_diagnostic::PrettyDiagnosticEmitter;
use tracing::Level;

use crate::check::Checker;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("error writing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("compilation failed with {0} error(s)")]
    HadErrors(usize),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Check {
            input,
            source,
            emit,
            color,
        } => {
            let source = load_source(input, source)?;
            let mut checker = Checker::new(PrettyDiagnosticEmitter::new(color.into()));

            checker.run(&source, emit, &mut io::stdout().lock())
        }
    }
}

fn load_source(input: String, is_source: bool) -> CliResult<SourceFile> {
    if is_source {
        return Ok(SourceFile::new("<unnamed>", input));
    }

    tracing::debug!(path = %input, "reading source");

    let text = std::fs::read_to_string(&input)?;
    Ok(SourceFile::new(input.clone(), text).with_path(input))
}
