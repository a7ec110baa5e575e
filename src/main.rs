use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use wordrack::combine;
use wordrack::dictionary::Dictionary;
use wordrack::errors::SolverError;
use wordrack::letters;
use wordrack::search;

/// Interactive subset-anagram finder: enter a rack of letters, then ask for
/// the longest word, all words, or all two-word phrases buildable from it.
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

    /// Number of letters in a rack
    #[arg(short = 'l', long, default_value_t = 16)]
    rack_len: usize,
}

const COMMAND_HELP: &str = "commands are\n  \
    q: quit\n  \
    a: all words\n  \
    l: longest word\n  \
    c: combined two words\n  \
    ?: help";

/// Entry point of the wordrack CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them in a
/// user-friendly way before exiting with a nonzero code.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDRACK_DEBUG").is_ok();
    wordrack::log::init_logger(debug_enabled);

    log::info!(
        "wordrack {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH")
    );

    if let Err(e) = try_main() {
        if let Some(solver_err) = e.downcast_ref::<SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the dictionary from disk and build the index, exactly once.
/// 3. Loop: read a rack (re-prompting until it is valid), read a command,
///    dispatch the query, print the results.
///
/// Returns `Ok(())` on a clean quit or end of input; a dictionary that
/// cannot be read bubbles up to [`main`] and aborts the session.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let dict = Dictionary::load_from_path(&cli.dictionary)?;
    log::info!(
        "loaded {} words under {} keys from {} in {:.3}s",
        dict.word_count(),
        dict.key_count(),
        cli.dictionary,
        t_load.elapsed().as_secs_f64()
    );
    if dict.is_empty() {
        log::warn!("dictionary is empty; every query will come back empty");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(rack) = prompt_rack(&mut lines, cli.rack_len)? else {
            break;
        };
        let Some(command) = prompt(&mut lines, "enter a command ('?' for help): ")? else {
            break;
        };

        match command.as_str() {
            "q" => break,
            "a" => run_query(&rack, "all words", || search::find_all_words(&rack, &dict)),
            "l" => run_query(&rack, "longest word", || {
                search::find_longest_word(&rack, &dict)
            }),
            "c" => run_query(&rack, "combined words", || {
                combine::find_combined_words(&rack, &dict)
            }),
            "?" => println!("{COMMAND_HELP}"),
            other => println!("unrecognized command '{other}'\n{COMMAND_HELP}"),
        }
    }

    println!("bye");
    Ok(())
}

/// Prompt until a valid rack is entered. Invalid racks are reported with
/// their error code and the prompt repeats. `None` means end of input.
fn prompt_rack(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    rack_len: usize,
) -> io::Result<Option<String>> {
    loop {
        let Some(rack) = prompt(lines, &format!("enter {rack_len} letters: "))? else {
            return Ok(None);
        };
        match letters::validate_rack(&rack, rack_len) {
            Ok(()) => return Ok(Some(rack)),
            Err(e) => eprintln!("{}", e.display_detailed()),
        }
    }
}

/// Print a prompt and read one trimmed line. `None` means end of input.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

/// Run one query, print its results sorted one per line, and report the
/// count and timing on stderr.
fn run_query<F>(rack: &str, label: &str, query: F)
where
    F: FnOnce() -> std::collections::HashSet<String>,
{
    let t_query = Instant::now();
    let results = query();
    let query_secs = t_query.elapsed().as_secs_f64();

    let mut sorted: Vec<String> = results.into_iter().collect();
    sorted.sort();
    for result in &sorted {
        println!("{result}");
    }

    eprintln!(
        "{} result(s) for {label} over '{rack}' in {query_secs:.3}s",
        sorted.len()
    );
}
