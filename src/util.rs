// Small helpers shared by metric code

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref VALID_ID: Regex = Regex::new("^[_A-Za-z][_a-zA-Z0-9]*$").unwrap();
}

/// Directory holding the crate's bundled resources.
///
/// Resolved at compile time from the crate manifest, so it points at the
/// source tree of the machine that built the crate and is not relocated with
/// the compiled artifact.
pub fn base_path() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Number of elements yielded by an iterable.
pub fn ilen<I: IntoIterator>(it: I) -> usize {
    it.into_iter().count()
}

/// Checks whether `string` is a valid identifier: an ASCII letter or
/// underscore followed by ASCII letters, digits or underscores. A trailing
/// newline is rejected.
pub fn is_valid_id(string: &str) -> bool {
    VALID_ID.is_match(string)
}
