// Matching configuration for the operator counter

/// How a candidate window that runs past the end of the sentence is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPolicy {
    /// The window must be exactly as long as the operator.
    #[default]
    Strict,

    /// Compare position by position up to the shorter length, so a prefix
    /// of the operator found at the end of a sentence counts as a match.
    /// Only affects tag-aware matching.
    Truncated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchConfig {
    /// Compare words only and disregard part-of-speech tags (default false)
    pub ignore_pos: bool,

    /// Short window handling (default Strict)
    pub window: WindowPolicy,
}

impl MatchConfig {
    pub fn new(ignore_pos: bool) -> Self {
        Self {
            ignore_pos,
            ..Self::default()
        }
    }

    pub fn with_ignore_pos(mut self, ignore_pos: bool) -> Self {
        self.ignore_pos = ignore_pos;
        self
    }

    pub fn with_window(mut self, window: WindowPolicy) -> Self {
        self.window = window;
        self
    }
}
