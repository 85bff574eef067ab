use tracing::{debug, trace};

use super::config::{MatchConfig, WindowPolicy};
use crate::tagging::{Operator, Token};

/// Counts operator occurrences in tagged sentences under a fixed
/// `MatchConfig`.
///
/// Words are compared case-insensitively on both sides: operator words are
/// lower-cased when the operator is built and candidate words are folded at
/// comparison time. Tags are compared exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Checks whether `candidate`, a window of a tagged sentence, matches
    /// `operator` position by position.
    pub fn matches(&self, candidate: &[Token], operator: &Operator) -> bool {
        let elements = operator.elements();

        if self.config.ignore_pos {
            return candidate.len() == elements.len()
                && candidate
                    .iter()
                    .zip(elements)
                    .all(|(token, element)| token.word_matches(element.word()));
        }

        if self.config.window == WindowPolicy::Strict && candidate.len() != elements.len() {
            return false;
        }

        candidate.iter().zip(elements).all(|(token, element)| {
            token.word_matches(element.word()) && element.tag().accepts(&token.tag)
        })
    }

    /// Number of start positions in `tagged_sent` at which `operator`
    /// matches. Overlapping matches are each counted.
    pub fn count(&self, tagged_sent: &[Token], operator: &Operator) -> usize {
        let first = operator.first().word();
        let mut occurrences = 0;

        for (i, token) in tagged_sent.iter().enumerate() {
            if !token.word_matches(first) {
                continue;
            }

            let end = (i + operator.len()).min(tagged_sent.len());
            if self.matches(&tagged_sent[i..end], operator) {
                trace!(position = i, operator = %operator, "operator matched");
                occurrences += 1;
            }
        }

        debug!(operator = %operator, occurrences, "counted operator occurrences");
        occurrences
    }

    /// Sum of `count` over every operator. Different operators matching the
    /// same span are all counted.
    pub fn count_all<'a, I>(&self, tagged_sent: &[Token], operators: I) -> usize
    where
        I: IntoIterator<Item = &'a Operator>,
    {
        operators
            .into_iter()
            .map(|operator| self.count(tagged_sent, operator))
            .sum()
    }
}

/// Checks whether `candidate` matches `operator`, optionally ignoring tags.
pub fn matches(candidate: &[Token], operator: &Operator, ignore_pos: bool) -> bool {
    Matcher::new(MatchConfig::new(ignore_pos)).matches(candidate, operator)
}

/// Counts the occurrences of `operator` in `tagged_sent`.
pub fn count_occurrences(tagged_sent: &[Token], operator: &Operator, ignore_pos: bool) -> usize {
    Matcher::new(MatchConfig::new(ignore_pos)).count(tagged_sent, operator)
}

/// Counts the occurrences of every operator in `operators` and returns the
/// total.
pub fn count_occurrences_for_all<'a, I>(
    tagged_sent: &[Token],
    operators: I,
    ignore_pos: bool,
) -> usize
where
    I: IntoIterator<Item = &'a Operator>,
{
    Matcher::new(MatchConfig::new(ignore_pos)).count_all(tagged_sent, operators)
}
