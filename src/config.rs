//! Configuration for the adversarial game-tree solver.

use crate::cancel::CancelToken;

/// Configuration for [`Minimax`] decisions.
///
/// Use the builder methods to customize a default configuration.
///
/// # Example
///
/// ```
/// use treesearch::MinimaxConfig;
///
/// let config = MinimaxConfig::default()
///     .with_depth_limit(4)
///     .with_seed(42);
/// ```
///
/// [`Minimax`]: crate::Minimax
#[derive(Debug, Clone, Default)]
pub struct MinimaxConfig {
    /// Ply budget for the recursion
    ///
    /// `None` means "search to terminal states only", which is tractable for
    /// small games such as 3x3 tic-tac-toe. With a limit set, non-terminal
    /// states at the horizon are scored by the game's utility function as a
    /// static evaluation.
    pub depth_limit: Option<usize>,

    /// Seed for the tie-breaking random source
    ///
    /// `None` seeds from entropy. Fixing the seed makes repeated decisions
    /// reproducible, which matters mostly in tests.
    pub seed: Option<u64>,

    /// Cooperative cancellation token
    ///
    /// If set and cancelled mid-decision, the recursion collapses to static
    /// evaluations and the root chooses among the actions scored so far.
    pub cancel: Option<CancelToken>,
}

impl MinimaxConfig {
    /// Sets the ply budget
    pub fn with_depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    /// Removes the ply budget, searching to terminal states only
    pub fn unlimited(mut self) -> Self {
        self.depth_limit = None;
        self
    }

    /// Seeds the tie-breaking random source
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Attaches a cancellation token
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }
}
