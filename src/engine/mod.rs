pub mod config;
pub mod error;
pub mod matcher;

pub use config::{MatchConfig, WindowPolicy};
pub use error::OperatorError;
pub use matcher::{count_occurrences, count_occurrences_for_all, matches, Matcher};
