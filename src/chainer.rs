//! Dictionary owner that runs chain searches.
//!
//! A [`WordChainer`] keeps the dictionary as loaded and hands every query a
//! fresh [`ChainSearch`] over its own copy, so queries never observe each
//! other's reordering and can run in parallel.

use crate::search::ChainSearch;
use crate::word::CaseFolding;
use rayon::prelude::*;
use tracing::debug;

/// The main word chain solver
#[derive(Debug, Clone)]
pub struct WordChainer {
    dictionary: Vec<String>,
    case_folding: CaseFolding,
}

impl WordChainer {
    pub fn new(dictionary: Vec<String>) -> Self {
        Self {
            dictionary,
            case_folding: CaseFolding::default(),
        }
    }

    pub fn set_case_folding(&mut self, case_folding: CaseFolding) {
        self.case_folding = case_folding;
    }

    pub fn case_folding(&self) -> CaseFolding {
        self.case_folding
    }

    pub fn dictionary(&self) -> &[String] {
        &self.dictionary
    }

    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    /// Prepare a search for one query without running it.
    pub fn search(&self, from: &str, to: &str) -> ChainSearch {
        ChainSearch::new(from, to, self.dictionary.iter().cloned(), self.case_folding)
    }

    /// Find a shortest chain from `from` to `to`.
    ///
    /// Returns an empty vector when no chain exists.
    pub fn find_chain(&self, from: &str, to: &str) -> Vec<String> {
        self.search(from, to).run()
    }

    /// Solve many queries in parallel. Results are in the order of `pairs`.
    pub fn find_chains<S: AsRef<str> + Sync>(&self, pairs: &[(S, S)]) -> Vec<Vec<String>> {
        debug!(pairs = pairs.len(), "solving batch");

        pairs
            .par_iter()
            .map(|(from, to)| self.find_chain(from.as_ref(), to.as_ref()))
            .collect()
    }
}
