//! CLI entrypoint for `classgen`.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::eyre;

use classgen::cli::{self, Args, ParseFailure};
use classgen::error::ClassgenError;
use classgen::{app, logging, report};

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return handle_parse_error(&err),
    };
    logging::init(args.verbose).map_err(|err| eyre!("failed to install logger: {err}"))?;
    run(&args)
}

fn run(args: &Args) -> color_eyre::Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    match app::generate(args, &mut stdout) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(ClassgenError::Validation(err)) => {
            report::validation_error(&mut stdout, &err)?;
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn handle_parse_error(err: &clap::Error) -> color_eyre::Result<ExitCode> {
    match cli::classify(err) {
        ParseFailure::Display => err.exit(),
        ParseFailure::MissingClassName => {
            let mut stdout = io::stdout().lock();
            report::usage(&mut stdout, cli::BIN_NAME)?;
            stdout.flush()?;
            Ok(ExitCode::FAILURE)
        }
        ParseFailure::Malformed => {
            err.print()?;
            Ok(ExitCode::FAILURE)
        }
    }
}
