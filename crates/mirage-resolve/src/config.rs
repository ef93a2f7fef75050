use serde::{Deserialize, Serialize};

/// Default bound on literal-tree recursion.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Resolver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum nesting depth of array literals the resolver will walk.
    /// Sub-trees beyond this depth resolve to an absent value.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}
