//! Threshold-gated name resolution.

use tracing::debug;

use crate::similarity::{NameSimilarity, TokenSortRatio};

/// Outcome of resolving one query against a candidate pool.
///
/// `NoMatch` must reach the caller with the original query string attached —
/// an unmatched roster entry is a visible warning, never a silent drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Best candidate at or above the threshold
    Match { name: String, score: u8 },
    /// No candidate reached the threshold
    NoMatch,
}

impl Resolution {
    pub fn matched_name(&self) -> Option<&str> {
        match self {
            Resolution::Match { name, .. } => Some(name),
            Resolution::NoMatch => None,
        }
    }
}

/// Picks the single best-scoring candidate for a query name.
///
/// Candidates are scored in the order given; the first occurrence of the
/// maximum wins, so identical inputs resolve identically on every run. A top
/// score strictly below the threshold is a [`Resolution::NoMatch`] — the
/// resolver never hands back a low-confidence candidate.
#[derive(Debug, Clone)]
pub struct NameResolver<S = TokenSortRatio> {
    similarity: S,
    threshold: u8,
}

impl NameResolver {
    /// Default threshold balancing false-unmatched against false-matched.
    pub const DEFAULT_THRESHOLD: u8 = 80;

    pub fn new(threshold: u8) -> Self {
        Self {
            similarity: TokenSortRatio,
            threshold,
        }
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl<S: NameSimilarity> NameResolver<S> {
    /// Resolver with a caller-supplied similarity implementation.
    pub fn with_similarity(similarity: S, threshold: u8) -> Self {
        Self {
            similarity,
            threshold,
        }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Resolve `query` against the pool.
    pub fn resolve<'a, I>(&self, query: &str, candidates: I) -> Resolution
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut best: Option<(&str, u8)> = None;
        for candidate in candidates {
            let score = self.similarity.score(query, candidate);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((candidate, score));
                if score == 100 {
                    break;
                }
            }
        }

        match best {
            Some((name, score)) if score >= self.threshold => {
                debug!(query, name, score, "resolved name");
                Resolution::Match {
                    name: name.to_string(),
                    score,
                }
            }
            _ => Resolution::NoMatch,
        }
    }
}
