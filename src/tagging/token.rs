/// A word paired with the part-of-speech tag assigned by the upstream tagger.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Token {
    pub word: String,
    /// Compared exactly; tags are never case-folded.
    pub tag: String,
}

impl Token {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// Case-insensitive comparison of this token's word against an already
    /// lower-cased word.
    pub fn word_matches(&self, lowered: &str) -> bool {
        words_equal(&self.word, lowered)
    }
}

impl From<(&str, &str)> for Token {
    fn from((word, tag): (&str, &str)) -> Self {
        Token::new(word, tag)
    }
}

impl From<(String, String)> for Token {
    fn from((word, tag): (String, String)) -> Self {
        Token { word, tag }
    }
}

/// Builds a tagged sentence from `(word, tag)` pairs, e.g.
/// `[("O", "ART"), ("gato", "N"), ("sumiu", "V"), (".", "PU")]`.
pub fn tagged_sentence(pairs: &[(&str, &str)]) -> Vec<Token> {
    pairs.iter().copied().map(Token::from).collect()
}

/// Lower-cases a word. Operator words and candidate words both go through
/// this, so context-dependent mappings such as a word-final `Σ` fold the
/// same way on both sides.
pub(crate) fn fold_case(word: &str) -> String {
    word.to_lowercase()
}

pub(crate) fn words_equal(word: &str, lowered: &str) -> bool {
    fold_case(word) == lowered
}
