//! Word-level primitives shared by the search engine.
//!
//! Words are compared as sequences of Unicode scalar values, so a Cyrillic
//! `КОТ` has length 3 even though it takes 6 bytes.

/// Rule used to bring endpoints and dictionary words to a canonical case.
///
/// Both rules are locale-independent, so the same input always produces the
/// same chain regardless of the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseFolding {
    /// Full Unicode upper-casing (`str::to_uppercase`).
    #[default]
    Unicode,
    /// Upper-case ASCII letters only; everything else is left untouched.
    Ascii,
}

impl CaseFolding {
    /// Return the folded form of `word`.
    pub fn fold(self, word: &str) -> String {
        match self {
            CaseFolding::Unicode => word.to_uppercase(),
            CaseFolding::Ascii => word.to_ascii_uppercase(),
        }
    }

    /// Fold `word` in place.
    ///
    /// ASCII folding never reallocates. Unicode folding only replaces the
    /// buffer when the word actually changes.
    pub fn fold_in_place(self, word: &mut String) {
        match self {
            CaseFolding::Ascii => word.make_ascii_uppercase(),
            CaseFolding::Unicode => {
                if word.chars().any(|c| c.to_uppercase().ne(std::iter::once(c))) {
                    *word = word.to_uppercase();
                }
            }
        }
    }

    /// Parse a rule name as accepted on the command line.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "unicode" | "u" => Some(CaseFolding::Unicode),
            "ascii" | "a" => Some(CaseFolding::Ascii),
            _ => None,
        }
    }
}

/// Length of a word in Unicode scalar values.
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}

/// Check whether `from` can become `to` by replacing exactly one character.
///
/// Words of different length are never convertible, and neither are equal
/// words: they differ in zero positions.
pub fn is_convertible(from: &str, to: &str) -> bool {
    if from.is_ascii() && to.is_ascii() {
        let (a, b) = (from.as_bytes(), to.as_bytes());
        if a.len() != b.len() {
            return false;
        }
        return a.iter().zip(b).filter(|(x, y)| x != y).take(2).count() == 1;
    }

    let mut a = from.chars();
    let mut b = to.chars();
    let mut diff_count = 0;
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => {
                if x != y {
                    diff_count += 1;
                    if diff_count > 1 {
                        return false;
                    }
                }
            }
            (None, None) => return diff_count == 1,
            _ => return false,
        }
    }
}
