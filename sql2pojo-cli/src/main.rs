mod codegen;
mod commands;
mod template;

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use crate::commands::Convert;

const EXPECTED_ARGUMENTS: usize = 7;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let convert = match Convert::try_parse() {
        Ok(convert) => convert,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            let actual = std::env::args().skip(1).count();
            eprintln!(
                "Incorrect number of arguments (Expected: {EXPECTED_ARGUMENTS}, Actual: {actual})"
            );
            return ExitCode::FAILURE;
        }
        Err(err) => err.exit(),
    };
    match convert.run() {
        Ok(code) => {
            print!("{code}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
