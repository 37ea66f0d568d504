//! CLI tool for chiclet-slicer - builds a snapshot from an update JSON file
//!
//! Usage:
//!   chiclet_cli <update.json>              # Snapshot JSON to stdout
//!   chiclet_cli <update.json> -o out.json  # Snapshot JSON to file
//!   chiclet_cli <update.json> -v           # Also log cycle decisions to stderr

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use chiclet_slicer::snapshot::{build_snapshot, PreviousCycleState};
use chiclet_slicer::text::EstimatingTextMeasurer;
use chiclet_slicer::UpdateInput;

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging(_verbose: bool) {}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: chiclet_cli <update.json> [-o output.json] [-v]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = args
        .iter()
        .position(|a| a == "-o")
        .and_then(|i| args.get(i + 1));
    init_logging(args.iter().any(|a| a == "-v"));

    let text = match fs::read_to_string(input_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let input: UpdateInput = match serde_json::from_str(&text) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error parsing update input: {}", e);
            std::process::exit(1);
        }
    };

    let measurer = EstimatingTextMeasurer::default();
    let (snapshot, _) = build_snapshot(&input, PreviousCycleState::new(), &measurer);

    let json = match serde_json::to_string_pretty(&snapshot) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
