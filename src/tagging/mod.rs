pub mod operator;
pub mod token;

pub use operator::{Operator, OperatorElement, TagSpec};
pub use token::{tagged_sentence, Token};
