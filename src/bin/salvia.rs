//! Salvia CLI binary.

use std::env;
use std::process;

use env_logger::Builder;
use log::LevelFilter;

use salvia::cli::args::{parse_flags, Flags, Params};
use salvia::cli::commands::run;
use salvia::cli::output::usage;
use salvia::error::{Result, SalviaError};

fn main() {
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("salvia");

    let (flag_token, corpus_file) = match args.len() {
        1 => {
            print!("{}", usage(program, "no parameters given"));
            return;
        }
        2 => ("", args[1].as_str()),
        3 => (args[1].as_str(), args[2].as_str()),
        _ => {
            eprint!("{}", usage(program, "incorrect number of parameters"));
            process::exit(1);
        }
    };

    if let Err(e) = execute(flag_token, corpus_file) {
        match e {
            // Corpus parse errors already name the file and line; usage
            // text would only bury them.
            SalviaError::Parse { .. } => eprintln!("{e}"),
            _ => eprint!("{}", usage(program, &e.to_string())),
        }
        process::exit(1);
    }
}

fn execute(flag_token: &str, corpus_file: &str) -> Result<()> {
    let flags: Flags = parse_flags(flag_token)?;
    run(&Params::new(flags, corpus_file))
}
