use std::{env, fs::read_to_string, path::Path, process, time::Instant};

use lox_resolver::{display_error, lexer::lexer::tokenize, parser::parser::parse, resolver::resolver::resolve};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Exit status for malformed input (sysexits `EX_DATAERR`).
const EXIT_DATA_ERROR: i32 = 65;
const EXIT_USAGE: i32 = 64;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: lox_resolver <file>");
        process::exit(EXIT_USAGE);
    }

    let file_path = &args[1];
    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.clone());

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            error!(path = %file_path, %err, "failed to read source file");
            process::exit(EXIT_USAGE);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name)) {
        Ok(tokens) => tokens,
        Err(err) => {
            display_error(&err, &source);
            process::exit(EXIT_DATA_ERROR);
        }
    };

    info!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    let parse_start = Instant::now();
    let statements = match parse(tokens) {
        Ok(statements) => statements,
        Err(err) => {
            display_error(&err, &source);
            process::exit(EXIT_DATA_ERROR);
        }
    };

    info!(elapsed = ?parse_start.elapsed(), statements = statements.len(), "parsed");

    let resolve_start = Instant::now();
    let resolution = resolve(&statements);

    info!(elapsed = ?resolve_start.elapsed(), "resolved");

    if resolution.has_errors() {
        for diagnostic in &resolution.diagnostics {
            display_error(diagnostic, &source);
        }
        error!(count = resolution.diagnostics.len(), "resolution failed");
        process::exit(EXIT_DATA_ERROR);
    }

    info!(
        locals = resolution.bindings.len(),
        total = ?start.elapsed(),
        "resolved all references"
    );
}
