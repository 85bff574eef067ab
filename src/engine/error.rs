use thiserror::Error;

/// Reasons an operator definition is rejected at construction time.
///
/// Matching itself cannot fail: every `Operator` that exists has already
/// passed these checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperatorError {
    #[error("Operator has no elements")]
    Empty,

    #[error("Operator element {position} has an empty word")]
    EmptyWord { position: usize },

    #[error("Operator element {position} has an empty tag set")]
    EmptyTagSet { position: usize },

    #[error("Malformed operator element: {0:?} (expected word/TAG or word/TAG1|TAG2)")]
    MalformedElement(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(OperatorError::Empty.to_string(), "Operator has no elements");
        assert_eq!(
            OperatorError::EmptyWord { position: 2 }.to_string(),
            "Operator element 2 has an empty word"
        );
        assert!(OperatorError::MalformedElement("que".to_string())
            .to_string()
            .contains("\"que\""));
    }
}
