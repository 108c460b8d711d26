use clap::{Parser, ValueEnum};
use fluxo::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};

/// Which kind of scaffold the raw response is expected to contain.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Fields,
    Stages,
}

/// Reconcile a raw generative-model response into a valid scaffold
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The kind of scaffold to reconcile the response into
    #[arg(value_enum)]
    kind: Kind,

    /// Required number of entries in the reconciled output
    #[arg(short = 'n', long)]
    count: usize,

    /// Path to the raw response file; reads stdin when omitted
    #[arg(short, long)]
    input: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    if cli.count == 0 {
        exit_with_error("--count must be positive");
    }

    let raw = match &cli.input {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read response file '{}': {}", path, e))
        }),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read response from stdin: {}", e))
            });
            buffer
        }
    };

    let payload = extract_json_block(&raw);
    match cli.kind {
        Kind::Fields => report(reconcile_fields(payload, cli.count)),
        Kind::Stages => report(reconcile_stages(payload, cli.count)),
    }
}

/// Prints the reconciled records to stdout and the diagnostic, if any, to
/// stderr. Repairs are a warning, not a failure, so the exit code stays 0.
fn report<T: Serialize>(result: Reconciled<T>) {
    let rendered = serde_json::to_string_pretty(&result.items)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to render output: {}", e)));
    println!("{}", rendered);

    if let Some(diagnostic) = result.diagnostic() {
        eprintln!("warning: {}", diagnostic);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
