// SPDX-License-Identifier: AGPL-3.0-only

//! hseries — smallest N with Sum(1/i, 1, N) > M.
//!
//! Run: `hseries <NUMBER> [--verbose] [--json] [--delta=X]`
//!
//! - `--verbose` — one diagnostic line per refinement step, plus totals
//! - `--json`    — machine-readable report instead of the classic lines
//! - `--delta=X` — override the downward-walk termination tolerance

use hseries::error::parse_threshold;
use hseries::report::{print_report, ThresholdReport};
use hseries::search::{threshold_search, threshold_search_observed, SearchConfig};
use hseries::tolerances;

fn print_usage(program: &str) {
    println!("Usage: {program} <NUMBER> [--verbose] [--json] [--delta=X]");
    println!();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("hseries", String::as_str);
    let get = |prefix: &str| -> Option<String> {
        args.iter()
            .find(|a| a.starts_with(prefix))
            .map(|a| a[prefix.len()..].to_string())
    };
    let has = |flag: &str| -> bool { args.iter().any(|a| a == flag) };

    let positional: Vec<&String> = args
        .iter()
        .skip(1)
        .filter(|a| !a.starts_with("--"))
        .collect();
    if positional.len() != 1 {
        print_usage(program);
        std::process::exit(1);
    }

    let m = match parse_threshold(positional[0]) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{e}");
            print_usage(program);
            std::process::exit(1);
        }
    };

    let config = SearchConfig {
        delta: get("--delta=")
            .and_then(|s| s.parse().ok())
            .unwrap_or(tolerances::DELTA),
    };

    let result = if has("--verbose") {
        println!("Processing harmonic series...");
        let result = threshold_search_observed(m, &config, |step| {
            println!(
                " Guess {}, sum = {:.8}, diff = {:.8}, n/e^M = {:.8}",
                step.guess, step.sum, step.diff, step.ratio
            );
        });
        println!("    Total number of guesses: {}", result.steps + 1);
        println!();
        result
    } else {
        threshold_search(m, &config)
    };

    let report = ThresholdReport::new(m, &result);
    if has("--json") {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print_report(&report);
    }
}
