//! In-place breadth-first search over a dictionary array.
//!
//! The search never builds a graph. Instead it partitions its own copy of the
//! dictionary into three zones by swapping entries:
//!
//! ```text
//! [0, frontier_end)          discovered words, in BFS order
//! [frontier_end, live_end)   undecided words
//! [live_end, len)            eliminated words
//! ```
//!
//! The discovered zone doubles as the BFS queue: the cursor walks it in the
//! order words were appended, so the first word found next to the target
//! belongs to a shortest chain. A parallel parent array records which
//! discovered word reached each entry, which is all that is needed to rebuild
//! the chain.

use crate::word::{is_convertible, word_len, CaseFolding};
use std::fmt;
use tracing::{debug, trace};

/// Outcome of a single frontier expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// The frontier word was expanded without reaching the target.
    Continue,
    /// A shortest chain was found.
    Found(Vec<String>),
    /// Every reachable word was expanded; no chain exists.
    Exhausted,
}

/// A broken internal invariant of a [`ChainSearch`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("zone bounds out of order: frontier_end={frontier_end}, live_end={live_end}, len={len}")]
    Bounds {
        frontier_end: usize,
        live_end: usize,
        len: usize,
    },
    #[error("cursor {cursor} is outside the discovered zone (frontier_end={frontier_end})")]
    Cursor { cursor: usize, frontier_end: usize },
    #[error("discovered word at {index} has parent {parent}, which is not before it")]
    ParentOrder { index: usize, parent: usize },
    #[error("discovered word {word:?} is not one edit away from its parent {parent:?}")]
    ParentLink { word: String, parent: String },
    #[error("undecided word {word:?} should have been eliminated")]
    Unclassified { word: String },
}

/// Mutable state of one chain search.
///
/// Created per query and consumed by it; nothing is shared between searches.
#[derive(Debug, Clone)]
pub struct ChainSearch {
    words: Vec<String>,
    /// Parent of each discovered entry; `None` is the start word.
    parents: Vec<Option<usize>>,
    /// Word being expanded; `None` is the start word, which is not stored in `words`.
    cursor: Option<usize>,
    frontier_end: usize,
    live_end: usize,
    /// Set once the first scan has folded and filtered every entry.
    classified: bool,
    outcome: Option<Progress>,
    from: String,
    to: String,
    word_len: usize,
    case_folding: CaseFolding,
}

impl ChainSearch {
    pub fn new<I, S>(from: &str, to: &str, dictionary: I, case_folding: CaseFolding) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = dictionary.into_iter().map(Into::into).collect();
        let from = case_folding.fold(from);
        let to = case_folding.fold(to);
        let len = words.len();

        Self {
            parents: vec![None; len],
            cursor: None,
            frontier_end: 0,
            live_end: len,
            classified: false,
            outcome: None,
            word_len: word_len(&from),
            words,
            from,
            to,
            case_folding,
        }
    }

    /// Start word after case folding.
    pub fn from_word(&self) -> &str {
        &self.from
    }

    /// Target word after case folding.
    pub fn to_word(&self) -> &str {
        &self.to
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_classified(&self) -> bool {
        self.classified
    }

    pub fn discovered(&self) -> &[String] {
        &self.words[..self.frontier_end]
    }

    pub fn undecided(&self) -> &[String] {
        &self.words[self.frontier_end..self.live_end]
    }

    pub fn eliminated(&self) -> &[String] {
        &self.words[self.live_end..]
    }

    /// Word currently being expanded.
    pub fn current_word(&self) -> &str {
        match self.cursor {
            Some(index) => &self.words[index],
            None => &self.from,
        }
    }

    /// Run the search to completion.
    ///
    /// Returns the chain from start to target inclusive, or an empty vector
    /// when the target is unreachable.
    pub fn run(&mut self) -> Vec<String> {
        debug!(
            from = %self.from,
            to = %self.to,
            dictionary = self.words.len(),
            "starting chain search"
        );

        loop {
            match self.step() {
                Progress::Continue => {}
                Progress::Found(chain) => return chain,
                Progress::Exhausted => return Vec::new(),
            }
        }
    }

    /// Expand the current frontier word against every undecided word, then
    /// move the cursor to the next discovered word.
    ///
    /// Once the search has finished, further calls repeat the final outcome.
    pub fn step(&mut self) -> Progress {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }

        if !self.classified && (self.from == self.to || is_convertible(&self.from, &self.to)) {
            debug!(from = %self.from, to = %self.to, "endpoints are adjacent");
            let chain = vec![self.from.clone(), self.to.clone()];
            return self.finish(Progress::Found(chain));
        }

        if let Some(chain) = self.expand() {
            debug!(
                length = chain.len(),
                discovered = self.frontier_end,
                "chain found"
            );
            return self.finish(Progress::Found(chain));
        }
        self.classified = true;

        let next = self.cursor.map_or(0, |index| index + 1);
        debug_assert!(next <= self.frontier_end);
        self.cursor = Some(next);

        if next == self.frontier_end {
            debug!(
                discovered = self.frontier_end,
                eliminated = self.words.len() - self.live_end,
                "frontier exhausted, no chain"
            );
            return self.finish(Progress::Exhausted);
        }

        trace!(frontier = %self.current_word(), "advancing cursor");
        Progress::Continue
    }

    fn finish(&mut self, outcome: Progress) -> Progress {
        self.outcome = Some(outcome.clone());
        outcome
    }

    /// Scan the undecided zone once against the current frontier word.
    ///
    /// On the first scan every entry is folded and words that can never be
    /// part of a chain are moved to the eliminated zone.
    fn expand(&mut self) -> Option<Vec<String>> {
        let mut index = self.frontier_end;

        while index < self.live_end {
            if !self.classified {
                self.case_folding.fold_in_place(&mut self.words[index]);
                let word = &self.words[index];
                if word_len(word) != self.word_len || *word == self.from || *word == self.to {
                    // the slot now holds an unscanned word taken from the back
                    self.eliminate(index);
                    continue;
                }
            }

            if is_convertible(self.current_word(), &self.words[index]) {
                if is_convertible(&self.words[index], &self.to) {
                    return Some(self.restore_path(index));
                }
                self.enqueue(index);
            }

            index += 1;
        }

        None
    }

    fn eliminate(&mut self, index: usize) {
        debug_assert!(index >= self.frontier_end && index < self.live_end);

        self.live_end -= 1;
        self.words.swap(index, self.live_end);
        trace!(word = %self.words[self.live_end], state = %self, "eliminated");
    }

    fn enqueue(&mut self, index: usize) {
        debug_assert!(index >= self.frontier_end && index < self.live_end);

        self.words.swap(index, self.frontier_end);
        self.parents[self.frontier_end] = self.cursor;
        self.frontier_end += 1;
        trace!(word = %self.words[self.frontier_end - 1], state = %self, "discovered");
    }

    /// Build the chain ending with the word at `last`, which is adjacent to
    /// both the current frontier word and the target.
    fn restore_path(&self, last: usize) -> Vec<String> {
        let mut chain = vec![self.to.clone(), self.words[last].clone()];

        let mut at = self.cursor;
        while let Some(index) = at {
            debug_assert!(index < self.frontier_end);
            chain.push(self.words[index].clone());
            at = self.parents[index];
        }

        chain.push(self.from.clone());
        chain.reverse();
        chain
    }

    /// Verify the zone layout and parent links.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let len = self.words.len();
        if self.frontier_end > self.live_end || self.live_end > len {
            return Err(InvariantViolation::Bounds {
                frontier_end: self.frontier_end,
                live_end: self.live_end,
                len,
            });
        }

        if let Some(cursor) = self.cursor {
            let exhausted = self.outcome == Some(Progress::Exhausted);
            if cursor > self.frontier_end || (cursor == self.frontier_end && !exhausted) {
                return Err(InvariantViolation::Cursor {
                    cursor,
                    frontier_end: self.frontier_end,
                });
            }
        }

        for (index, word) in self.discovered().iter().enumerate() {
            let parent = match self.parents[index] {
                None => &self.from,
                Some(parent) if parent < index => &self.words[parent],
                Some(parent) => return Err(InvariantViolation::ParentOrder { index, parent }),
            };
            if !is_convertible(parent, word) {
                return Err(InvariantViolation::ParentLink {
                    word: word.clone(),
                    parent: parent.clone(),
                });
            }
        }

        if self.classified {
            let stale = self
                .undecided()
                .iter()
                .find(|w| word_len(w) != self.word_len || **w == self.from || **w == self.to);
            if let Some(word) = stale {
                return Err(InvariantViolation::Unclassified { word: word.clone() });
            }
        }

        Ok(())
    }
}

/// Renders the dictionary with zone markers: `^` before the frontier word
/// (a leading `^,` when it is the start word), `&` before the first undecided
/// word and `#` before the first eliminated one.
impl fmt::Display for ChainSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cursor.is_none() {
            f.write_str("^,")?;
        }
        for (index, word) in self.words.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            if self.cursor == Some(index) {
                f.write_str("^")?;
            }
            if index == self.frontier_end {
                f.write_str("&")?;
            }
            if index == self.live_end {
                f.write_str("#")?;
            }
            f.write_str(word)?;
        }
        if self.live_end >= self.words.len() {
            f.write_str(",#")?;
        }
        Ok(())
    }
}
