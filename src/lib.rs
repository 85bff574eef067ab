//! Operator and connective counting over part-of-speech tagged sentences.
//!
//! ## Module Structure
//!
//! - **tagging**: tokens, tag specs and operator definitions
//! - **engine**: match configuration, errors and the pattern matcher
//! - **util**: small helpers shared by metric code
//!
//! ```rust
//! use cohmetrix_ops::{count_occurrences, tagged_sentence, Operator};
//!
//! let sent = tagged_sentence(&[("Mesmo", "PDEN"), ("que", "KS"), ("chova", "V")]);
//! let op: Operator = "mesmo/PDEN que/KS|PRO-KS".parse().unwrap();
//! assert_eq!(count_occurrences(&sent, &op, false), 1);
//! ```

pub mod engine;
pub mod tagging;
pub mod util;

pub use engine::{
    count_occurrences, count_occurrences_for_all, matches, MatchConfig, Matcher, OperatorError,
    WindowPolicy,
};
pub use tagging::{tagged_sentence, Operator, OperatorElement, TagSpec, Token};
pub use util::{base_path, ilen, is_valid_id};
