use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::token::fold_case;
use crate::engine::error::OperatorError;

/// Tag constraint for one operator element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSpec {
    /// The candidate tag must equal this one.
    Exact(String),
    /// The candidate tag must be one of these.
    AnyOf(BTreeSet<String>),
}

impl TagSpec {
    pub fn accepts(&self, tag: &str) -> bool {
        match self {
            TagSpec::Exact(expected) => expected == tag,
            TagSpec::AnyOf(allowed) => allowed.contains(tag),
        }
    }
}

impl fmt::Display for TagSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagSpec::Exact(tag) => write!(f, "{}", tag),
            TagSpec::AnyOf(tags) => {
                let joined: Vec<&str> = tags.iter().map(String::as_str).collect();
                write!(f, "{}", joined.join("|"))
            }
        }
    }
}

/// One position of an operator pattern. The word is stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorElement {
    word: String,
    tag: TagSpec,
}

impl OperatorElement {
    pub fn new(word: &str, tag: TagSpec) -> Self {
        Self {
            word: fold_case(word),
            tag,
        }
    }

    pub fn exact(word: &str, tag: &str) -> Self {
        Self::new(word, TagSpec::Exact(tag.to_string()))
    }

    pub fn any_of<I, S>(word: &str, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(word, TagSpec::AnyOf(tags.into_iter().map(Into::into).collect()))
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn tag(&self) -> &TagSpec {
        &self.tag
    }
}

impl fmt::Display for OperatorElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.word, self.tag)
    }
}

impl FromStr for OperatorElement {
    type Err = OperatorError;

    /// Parses `word/TAG` or `word/TAG1|TAG2`. The last `/` separates the
    /// word from its tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || OperatorError::MalformedElement(s.to_string());

        let (word, tags) = s.rsplit_once('/').ok_or_else(malformed)?;
        if word.is_empty() || tags.is_empty() {
            return Err(malformed());
        }

        let tags: Vec<&str> = tags.split('|').collect();
        if tags.iter().any(|t| t.is_empty()) {
            return Err(malformed());
        }

        if let [tag] = tags.as_slice() {
            Ok(OperatorElement::exact(word, tag))
        } else {
            Ok(OperatorElement::any_of(word, tags))
        }
    }
}

/// A fixed-length multi-word pattern such as the connective "mesmo que".
///
/// Always holds at least one element, each with a non-blank word and, for
/// `TagSpec::AnyOf`, at least one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    elements: Vec<OperatorElement>,
}

impl Operator {
    pub fn new(elements: Vec<OperatorElement>) -> Result<Self, OperatorError> {
        if elements.is_empty() {
            return Err(OperatorError::Empty);
        }

        for (position, element) in elements.iter().enumerate() {
            if element.word.trim().is_empty() {
                return Err(OperatorError::EmptyWord { position });
            }
            if let TagSpec::AnyOf(tags) = &element.tag {
                if tags.is_empty() {
                    return Err(OperatorError::EmptyTagSet { position });
                }
            }
        }

        Ok(Self { elements })
    }

    pub fn elements(&self) -> &[OperatorElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Operators are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The element every match must start with.
    pub fn first(&self) -> &OperatorElement {
        // Non-empty by construction.
        &self.elements[0]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

impl FromStr for Operator {
    type Err = OperatorError;

    /// Whitespace-separated elements, e.g. `"mesmo/PDEN que/KS|PRO-KS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let elements = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<OperatorElement>, _>>()?;
        Operator::new(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_word_is_lowercased() {
        let element = OperatorElement::exact("Mesmo", "PDEN");
        assert_eq!(element.word(), "mesmo");
        assert_eq!(element.tag(), &TagSpec::Exact("PDEN".to_string()));
    }

    #[test]
    fn test_tag_spec_accepts() {
        let exact = TagSpec::Exact("PREP".to_string());
        assert!(exact.accepts("PREP"));
        assert!(!exact.accepts("prep"));
        assert!(!exact.accepts("ART"));

        let set = OperatorElement::any_of("que", ["KS", "PRO-KS"]);
        assert!(set.tag().accepts("KS"));
        assert!(set.tag().accepts("PRO-KS"));
        assert!(!set.tag().accepts("ADV"));
    }

    #[test]
    fn test_empty_operator_rejected() {
        assert_eq!(Operator::new(vec![]), Err(OperatorError::Empty));
        assert_eq!("   ".parse::<Operator>(), Err(OperatorError::Empty));
    }

    #[test]
    fn test_blank_word_rejected() {
        let result = Operator::new(vec![
            OperatorElement::exact("a", "PREP"),
            OperatorElement::exact(" ", "ART"),
        ]);
        assert_eq!(result, Err(OperatorError::EmptyWord { position: 1 }));
    }

    #[test]
    fn test_empty_tag_set_rejected() {
        let result = Operator::new(vec![OperatorElement::any_of("que", Vec::<String>::new())]);
        assert_eq!(result, Err(OperatorError::EmptyTagSet { position: 0 }));
    }

    #[test]
    fn test_parse_exact_and_set() {
        let op: Operator = "Mesmo/PDEN que/KS|PRO-KS".parse().unwrap();
        assert_eq!(op.len(), 2);
        assert_eq!(op.first().word(), "mesmo");
        assert_eq!(
            op.elements()[1],
            OperatorElement::any_of("que", ["PRO-KS", "KS"])
        );
    }

    #[test]
    fn test_parse_uses_last_slash() {
        let element: OperatorElement = "e/ou/KC".parse().unwrap();
        assert_eq!(element.word(), "e/ou");
        assert_eq!(element.tag(), &TagSpec::Exact("KC".to_string()));
    }

    #[test]
    fn test_parse_malformed_elements() {
        for bad in ["que", "/KS", "que/", "que/KS|", "que/|KS"] {
            assert!(
                matches!(
                    bad.parse::<OperatorElement>(),
                    Err(OperatorError::MalformedElement(_))
                ),
                "{bad} should be malformed"
            );
        }
    }

    #[test]
    fn test_display_round_trips_notation() {
        let op: Operator = "ao/PREP+ART passo/N que/KS|PRO-KS".parse().unwrap();
        assert_eq!(op.to_string(), "ao/PREP+ART passo/N que/KS|PRO-KS");
    }
}
