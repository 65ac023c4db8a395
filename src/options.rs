//! Configuration for a [crate::parser::dom::Parser]

/// Default maximum nesting depth for arrays and objects
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// What to do with non-whitespace content following a complete top-level value
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrailingContent {
    /// The whole input must be consumed, apart from trailing whitespace
    Reject,
    /// Parsing stops after the first complete value and anything after it is ignored
    Ignore,
}

impl Default for TrailingContent {
    fn default() -> Self {
        Self::Reject
    }
}

/// Options controlling parser behaviour
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of arrays/objects that may be open at any one time. Each level recurses, so
    /// the usable limit is bounded by the calling thread's stack: the default is safe on a 2 MiB
    /// thread, but large values may need a thread with a bigger stack.
    pub max_depth: usize,
    /// Trailing content policy
    pub trailing: TrailingContent,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            trailing: TrailingContent::default(),
        }
    }
}

impl ParserOptions {
    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the trailing content policy
    pub fn with_trailing(mut self, trailing: TrailingContent) -> Self {
        self.trailing = trailing;
        self
    }
}
