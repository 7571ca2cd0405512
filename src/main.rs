//! Word Chain CLI
//!
//! Reads the start and target words plus a dictionary from files and prints
//! the shortest chain, one word per line.

use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::process;
use tracing_subscriber::EnvFilter;
use word_chain::io::{read_dictionary, read_endpoints, read_pairs, write_chain};
use word_chain::{CaseFolding, WordChainer};

const USAGE_TEXT: &str = include_str!("text/usage.txt");
const LOG_ENV: &str = "WORD_CHAIN_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_usage() {
    println!("{}", USAGE_TEXT);
}

fn load_chainer(dict_path: &str, case_folding: CaseFolding) -> Result<WordChainer, Box<dyn Error>> {
    let words = read_dictionary(dict_path)?;
    tracing::info!(path = dict_path, words = words.len(), "loaded dictionary");

    let mut chainer = WordChainer::new(words);
    chainer.set_case_folding(case_folding);
    Ok(chainer)
}

fn run_single(inputs_path: &str, dict_path: &str, case_folding: CaseFolding) -> Result<(), Box<dyn Error>> {
    let (from, to) = read_endpoints(inputs_path)?;
    let chainer = load_chainer(dict_path, case_folding)?;

    let chain = chainer.find_chain(&from, &to);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_chain(&mut out, &chain)?;
    out.flush()?;
    Ok(())
}

fn run_batch(pairs_path: &str, dict_path: &str, case_folding: CaseFolding) -> Result<(), Box<dyn Error>> {
    let pairs = read_pairs(pairs_path)?;
    let chainer = load_chainer(dict_path, case_folding)?;

    let start = std::time::Instant::now();
    let chains = chainer.find_chains(&pairs);
    tracing::info!(pairs = pairs.len(), elapsed = ?start.elapsed(), "batch solved");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for chain in &chains {
        write_chain(&mut out, chain)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    init_logging();

    let mut case_folding = CaseFolding::Unicode;
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    args.retain(|arg| {
        if arg == "--ascii" {
            case_folding = CaseFolding::Ascii;
            false
        } else {
            true
        }
    });

    let result = match args.as_slice() {
        [flag] if flag == "--help" || flag == "-h" => {
            print_usage();
            return;
        }
        [flag, pairs, dict] if flag == "--batch" => run_batch(pairs, dict, case_folding),
        [inputs, dict] => run_single(inputs, dict, case_folding),
        _ => {
            print_usage();
            return;
        }
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
