//! File loaders and the chain presenter used by the command line tool.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: line {line} must contain a word", .path.display())]
    MissingWord { path: PathBuf, line: usize },
    #[error("{}: line {line} must contain exactly two words", .path.display())]
    MalformedPair { path: PathBuf, line: usize },
}

fn read_text(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the start and target words from the first two lines of a file.
pub fn read_endpoints(path: impl AsRef<Path>) -> Result<(String, String), LoadError> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let mut lines = text.lines().map(str::trim);

    let mut next_word = |line: usize| match lines.next() {
        Some(word) if !word.is_empty() => Ok(word.to_string()),
        _ => Err(LoadError::MissingWord {
            path: path.to_path_buf(),
            line,
        }),
    };

    let from = next_word(1)?;
    let to = next_word(2)?;
    Ok((from, to))
}

/// Read a dictionary, one candidate per line.
///
/// Blank lines are kept: the search discards them like any other word of the
/// wrong length.
pub fn read_dictionary(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let text = read_text(path.as_ref())?;
    Ok(text.lines().map(|line| line.trim().to_string()).collect())
}

/// Read `from to` query pairs, one per line. Blank lines are skipped.
pub fn read_pairs(path: impl AsRef<Path>) -> Result<Vec<(String, String)>, LoadError> {
    let path = path.as_ref();
    let text = read_text(path)?;

    let mut pairs = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => continue,
            [from, to] => pairs.push((from.to_string(), to.to_string())),
            _ => {
                return Err(LoadError::MalformedPair {
                    path: path.to_path_buf(),
                    line: i + 1,
                })
            }
        }
    }
    Ok(pairs)
}

/// Write a chain one word per line. An empty chain writes nothing.
pub fn write_chain<W: Write>(out: &mut W, chain: &[String]) -> io::Result<()> {
    for word in chain {
        writeln!(out, "{}", word)?;
    }
    Ok(())
}
