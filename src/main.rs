//! `dotjson` CLI: query and mutate JSON files with dot/bracket paths.
//!
//! ## Usage
//!
//! ```sh
//! dotjson get config.json '.keys[0].name'
//! dotjson set config.json '.default' 'project-x'
//! dotjson add config.json '.keys' '{"name":"x","key":"y"}'
//! dotjson remove config.json '.keys' 'name' 'project-x'
//! dotjson validate config.json
//! dotjson length config.json '.keys'
//! dotjson find config.json '.keys' 'name' 'project-x'
//! dotjson format config.json '.env'
//! dotjson list-array config.json '.keys' name key
//! ```
//!
//! Results go to stdout, errors to stderr; every failure exits with
//! status 1. `validate` is silent on both streams and reports only through
//! its exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use dotjson::{ops, store, Error, JsonPath};

#[derive(Parser)]
#[command(
    name = "dotjson",
    version,
    about = "Read, query, and mutate JSON files with dot/bracket paths"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value at a path (empty line if absent)
    Get { file: PathBuf, path: String },
    /// Set the value at a path, auto-creating intermediate objects
    Set {
        file: PathBuf,
        path: String,
        /// Parsed as JSON if possible, stored as a literal string otherwise
        value: String,
    },
    /// Delete the key at a path
    Delete { file: PathBuf, path: String },
    /// Append a JSON value to the array at a path, creating it if absent
    Add {
        file: PathBuf,
        path: String,
        /// Must be valid JSON
        value: String,
    },
    /// Drop array elements whose field equals a value
    Remove {
        file: PathBuf,
        path: String,
        field: String,
        value: String,
    },
    /// Check that a file holds valid JSON, reporting only via exit code
    Validate { file: PathBuf },
    /// Print the element or key count at a path (0 if neither)
    Length { file: PathBuf, path: String },
    /// Print the first array element whose field equals a value
    Find {
        file: PathBuf,
        path: String,
        field: String,
        value: String,
    },
    /// Pretty-print the value at a path
    Format { file: PathBuf, path: String },
    /// Print selected fields of each object element, pipe-separated
    ListArray {
        file: PathBuf,
        path: String,
        #[arg(required = true)]
        fields: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap exits with status 2 on its own; this tool reports every
            // failure, usage errors included, with status 1.
            let _ = err.print();
            return if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    // validate suppresses all error detail, including load failures.
    if let Command::Validate { file } = &cli.command {
        return if store::validate(file) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Get { file, path } => {
            let doc = store::load(&file)?;
            println!("{}", ops::get(&doc, &JsonPath::from(path.as_str())));
            Ok(())
        }
        Command::Set { file, path, value } => {
            let mut doc = store::load(&file)?;
            ops::set(&mut doc, &JsonPath::from(path.as_str()), &value);
            store::save(&file, &doc)
        }
        Command::Delete { file, path } => {
            let mut doc = store::load(&file)?;
            ops::delete(&mut doc, &JsonPath::from(path.as_str()));
            store::save(&file, &doc)
        }
        Command::Add { file, path, value } => {
            let mut doc = store::load(&file)?;
            ops::add(&mut doc, &JsonPath::from(path.as_str()), &value)?;
            store::save(&file, &doc)
        }
        Command::Remove {
            file,
            path,
            field,
            value,
        } => {
            let mut doc = store::load(&file)?;
            ops::remove_matching(&mut doc, &JsonPath::from(path.as_str()), &field, &value)?;
            store::save(&file, &doc)
        }
        Command::Validate { .. } => unreachable!("validate is handled before dispatch"),
        Command::Length { file, path } => {
            let doc = store::load(&file)?;
            println!("{}", ops::length(&doc, &JsonPath::from(path.as_str())));
            Ok(())
        }
        Command::Find {
            file,
            path,
            field,
            value,
        } => {
            let doc = store::load(&file)?;
            println!(
                "{}",
                ops::find(&doc, &JsonPath::from(path.as_str()), &field, &value)
            );
            Ok(())
        }
        Command::Format { file, path } => {
            let doc = store::load(&file)?;
            println!("{}", ops::format(&doc, &JsonPath::from(path.as_str())));
            Ok(())
        }
        Command::ListArray { file, path, fields } => {
            let doc = store::load(&file)?;
            for line in ops::list_array(&doc, &JsonPath::from(path.as_str()), &fields) {
                println!("{line}");
            }
            Ok(())
        }
    }
}
