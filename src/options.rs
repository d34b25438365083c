/// Default limit on brace nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs shared by the grouping and block-building stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest brace nesting accepted. A value of 0 rejects every block.
    pub max_depth: usize,
}

impl ParseOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum brace nesting depth.
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
