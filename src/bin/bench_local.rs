//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of racks on *your* machine.
//! - Loads the dictionary once, then runs each query several times and
//!   reports the median.
//! - Not statistically rigorous; use the same machine and `--release` for
//!   comparable numbers.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:        `cargo run --bin bench_local --release`
//! - Multiple repeats:       `cargo run --bin bench_local --release -- -r 5`
//! - Print a few results:    `cargo run --bin bench_local --release -- -p 5`
//! - See all flags:          `cargo run --bin bench_local -- --help`

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordrack::combine;
use wordrack::dictionary::Dictionary;
use wordrack::search;

/// Simple local benchmark runner: load the dictionary once, time each query
/// kind over a set of racks. One warm-up run per case is not timed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/dictionary.txt")
    )]
    dictionary: String,

    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many results per case (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// A benchmark case: a rack plus the query to run over it.
#[derive(Clone, Copy)]
struct Case {
    rack: &'static str,
    query: QueryKind,
}

#[derive(Clone, Copy)]
enum QueryKind {
    Longest,
    All,
    Combined,
}

impl QueryKind {
    fn name(self) -> &'static str {
        match self {
            QueryKind::Longest => "longest",
            QueryKind::All => "all",
            QueryKind::Combined => "combined",
        }
    }
}

/// Edit/add new cases here. Racks are deliberately near the interactive
/// 16-letter ceiling, where the deletion lattice is largest.
fn get_cases() -> Vec<Case> {
    vec![
        Case { rack: "tacx", query: QueryKind::All },
        Case { rack: "dogcatgod", query: QueryKind::Combined },
        Case { rack: "rstlneaiourstlne", query: QueryKind::Longest },
        Case { rack: "rstlneaiourstlne", query: QueryKind::All },
        Case { rack: "rstlneaiourstlne", query: QueryKind::Combined },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    // safe: f64 durations are never NaN in this context
    xs.sort_by(|a, b| a.partial_cmp(b).expect("f64 durations should not be NaN"));
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load the dictionary once. This I/O is *not* included in per-case timing.
    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let t_load = Instant::now();
    let dict = Dictionary::load_from_path(&cli.dictionary)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    eprintln!("Loaded {} words in {load_secs:.3}s", dict.word_count());

    let cases = get_cases();
    // (case label, median seconds, result count from the last run)
    let mut summary: Vec<(String, f64, usize)> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        let label = format!("{}:{}", case.query.name(), case.rack);
        eprintln!("\n[{:02}] {label}", idx + 1);

        let run = || match case.query {
            QueryKind::Longest => search::find_longest_word(case.rack, &dict),
            QueryKind::All => search::find_all_words(case.rack, &dict),
            QueryKind::Combined => combine::find_combined_words(case.rack, &dict),
        };

        // One warm-up execution per case to touch code paths and caches;
        // its timing is ignored.
        let _warmup = black_box(run());

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_results = Vec::new();

        for rep in 0..cli.num_repeats {
            let t_query = Instant::now();
            let results = black_box(run());
            let query_secs = t_query.elapsed().as_secs_f64();

            times.push(query_secs);
            last_results = results.into_iter().collect();

            eprintln!(
                "  run {:>2}/{:>2}: {query_secs:.3}s ({} results)",
                rep + 1,
                cli.num_repeats,
                last_results.len()
            );
        }

        // Prefer median for small N--it's less sensitive to noisy outliers.
        let med = median(times);

        // Optionally print a few results from the last run (outside timing).
        if cli.print_limit > 0 {
            last_results.sort();
            for result in last_results.iter().take(cli.print_limit) {
                println!("{result}");
            }
        }

        eprintln!(
            "  → median {med:.3}s over {} run(s); last run produced {} result(s)",
            cli.num_repeats,
            last_results.len()
        );

        summary.push((label, med, last_results.len()));
    }

    // Compact summary at the end for a quick scan across all cases.
    eprintln!("\n==== Summary ====");
    eprintln!("{:<28} | {:>10} | {:>9}", "case", "median (s)", "# results");
    eprintln!("{:-<28}-+-{:-<10}-+-{:-<9}", "", "", "");
    for (label, med, count) in &summary {
        eprintln!("{label:<28} | {med:>10.3} | {count:>9}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![7.5]), 7.5);
    }
}
