//! # Word Chain
//!
//! Finds a shortest word ladder between two words of equal length: every step
//! replaces exactly one character, and every intermediate word comes from a
//! dictionary.
//!
//! The search is a breadth-first search performed entirely inside a copy of
//! the dictionary array, partitioned into zones by swapping entries. See
//! [`search`] for the layout.

pub mod chainer;
pub mod io;
pub mod search;
pub mod word;

pub use chainer::WordChainer;
pub use io::LoadError;
pub use search::{ChainSearch, InvariantViolation, Progress};
pub use word::{is_convertible, CaseFolding};

/// Find a shortest chain from `from` to `to` through `dictionary`.
///
/// Words are upper-cased with [`CaseFolding::Unicode`]. Returns an empty
/// vector when no chain exists.
pub fn find_chain<I, S>(from: &str, to: &str, dictionary: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ChainSearch::new(from, to, dictionary, CaseFolding::Unicode).run()
}
