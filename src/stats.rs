//! Statistics collected during adversarial tree search.

use std::time::Duration;

/// Statistics for a single [`Minimax`] decision.
///
/// Refreshed at the start of every decision; read them back through
/// [`Minimax::stats`] afterwards. On the same tree, the alpha-beta variant
/// never expands more nodes than plain minimax.
///
/// [`Minimax`]: crate::Minimax
/// [`Minimax::stats`]: crate::Minimax::stats
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Number of non-leaf states whose actions were enumerated and recursed
    pub nodes_expanded: usize,

    /// Number of utility evaluations (terminal states, horizon cutoffs, and
    /// revisited states scored as if terminal)
    pub evaluations: usize,

    /// Number of branches abandoned by alpha-beta bounds (always zero for
    /// plain minimax)
    pub prunes: usize,

    /// Deepest ply reached by the recursion
    pub max_depth: usize,

    /// Wall-clock time spent on the decision
    pub total_time: Duration,
}

impl SearchStats {
    /// Creates a zeroed statistics object
    pub fn new() -> Self {
        SearchStats::default()
    }

    /// Returns a human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Game tree search statistics:\n\
             - Nodes expanded: {}\n\
             - Utility evaluations: {}\n\
             - Branches pruned: {}\n\
             - Max depth: {}\n\
             - Total time: {:.3} seconds",
            self.nodes_expanded,
            self.evaluations,
            self.prunes,
            self.max_depth,
            self.total_time.as_secs_f64()
        )
    }
}
