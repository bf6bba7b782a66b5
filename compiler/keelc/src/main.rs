//! keel CLI

use std::io::IsTerminal;
use std::process::ExitCode;

use keel_diagnostic::emitter::TerminalEmitter;
use keelc::commands::{check_files, explain_code, lex_file, parse_files};
use keelc::config::LANG_ENV;
use keelc::tracing_setup::init_tracing;
use keelc::{DriverConfig, DriverError, Outcome};

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    match run(command, &args[2..]) {
        Ok(Outcome::Clean) => ExitCode::SUCCESS,
        Ok(Outcome::Errors) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, DriverError::UnknownCommand(_)) {
                eprintln!();
                print_usage();
            }
            ExitCode::from(2)
        }
    }
}

fn run(command: &str, rest: &[String]) -> Result<Outcome, DriverError> {
    match command {
        "parse" => {
            let config = config(rest)?.require_files("parse")?;
            let mut emitter = stderr_emitter(&config);
            parse_files(&config, &mut std::io::stdout().lock(), &mut emitter)
        }
        "check" => {
            let config = config(rest)?.require_files("check")?;
            let mut emitter = stderr_emitter(&config);
            check_files(&config, &mut std::io::stdout().lock(), &mut emitter)
        }
        "lex" => {
            let config = config(rest)?;
            lex_file(&config, &mut std::io::stdout().lock())?;
            Ok(Outcome::Clean)
        }
        "--explain" | "explain" => {
            let Some(code) = rest.first() else {
                return Err(DriverError::MissingCode);
            };
            explain_code(code, &mut std::io::stdout().lock())?;
            Ok(Outcome::Clean)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(Outcome::Clean)
        }
        "version" | "--version" | "-V" => {
            println!("keel {}", env!("CARGO_PKG_VERSION"));
            Ok(Outcome::Clean)
        }
        other => Err(DriverError::UnknownCommand(other.to_owned())),
    }
}

fn config(rest: &[String]) -> Result<DriverConfig, DriverError> {
    let env_lang = std::env::var(LANG_ENV).ok();
    DriverConfig::from_args(rest, env_lang.as_deref())
}

fn stderr_emitter(config: &DriverConfig) -> TerminalEmitter<std::io::Stderr> {
    let is_tty = std::io::stderr().is_terminal();
    TerminalEmitter::<std::io::Stderr>::stderr(config.color, is_tty)
}

fn print_usage() {
    println!("keel: error-tolerant parser for a C#-family grammar");
    println!();
    println!("Usage: keel <command> [options]");
    println!();
    println!("Commands:");
    println!("  parse <files...>    Print the syntax tree and diagnostics of each file");
    println!("  check <files...>    Report diagnostics only");
    println!("  lex <file>          Print tokens with their trivia");
    println!("  --explain <code>    Explain a diagnostic code (e.g., CS1002)");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --lang=<version>    10, 11, 12, 13, latest or preview (default: preview)");
    println!("  --color=<mode>      auto, always or never (default: auto)");
    println!();
    println!("Environment:");
    println!("  {LANG_ENV}           Language version when --lang is not given");
    println!("  RUST_LOG            Enable parser tracing (e.g. keel_parse=debug)");
    println!("  KEEL_LOG_TREE=1     Print tracing output as an indented tree");
    println!();
    println!("Exit status: 0 clean, 1 syntax errors reported, 2 usage or I/O failure.");
}
