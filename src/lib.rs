//! # treesearch
//!
//! Classic state-space search and adversarial game-tree solving over
//! abstract task definitions.
//!
//! Given a start state, an action enumeration, and a transition function,
//! this crate finds action sequences satisfying a goal (uninformed and
//! informed single-agent search) or selects the best immediate action under
//! optimal-adversary assumptions (minimax with alpha-beta pruning). The
//! concrete domains — route finding, sliding puzzles, board games — live on
//! the caller's side of the [`Task`] contract.
//!
//! ## Features
//!
//! - Generic [`Task`]/[`Problem`]/[`Game`] traits; the algorithms never
//!   touch domain representation beyond equality and hashing
//! - Uninformed search: breadth-first, depth-first (iterative and
//!   recursive), depth-limited, iterative deepening
//! - Best-first search generalized over a node cost function, instantiated
//!   as uniform-cost, greedy, and A*
//! - Minimax and depth-limited, cycle-avoiding alpha-beta with a principled
//!   root tie-break
//! - Cooperative cancellation through a shared [`CancelToken`], polled at
//!   every expansion step
//! - A sequential turn-taking loop with pluggable [`Strategy`]
//!   participants, AI and interactive alike
//!
//! ## Basic usage
//!
//! ```
//! use treesearch::{breadth_first_search, CancelToken, Problem, Solution, Task};
//!
//! // Count from 0 to a target taking steps of 1 or 2.
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! enum Step {
//!     One,
//!     Two,
//! }
//!
//! struct CountTo(u32);
//!
//! impl Task for CountTo {
//!     type State = u32;
//!     type Action = Step;
//!
//!     fn initial_state(&self) -> u32 {
//!         0
//!     }
//!
//!     fn actions(&self, _state: &u32) -> Vec<Step> {
//!         vec![Step::One, Step::Two]
//!     }
//!
//!     fn transition(&self, state: &u32, action: &Step) -> u32 {
//!         match action {
//!             Step::One => state + 1,
//!             Step::Two => state + 2,
//!         }
//!     }
//! }
//!
//! impl Problem for CountTo {
//!     fn is_goal(&self, state: &u32) -> bool {
//!         *state == self.0
//!     }
//! }
//!
//! let token = CancelToken::new();
//! match breadth_first_search(&CountTo(7), &token) {
//!     Solution::Found { actions, cost } => {
//!         // Four steps is the minimum: 2 + 2 + 2 + 1.
//!         assert_eq!(actions.len(), 4);
//!         assert_eq!(cost, 4.0);
//!     }
//!     other => panic!("expected a solution, got {other:?}"),
//! }
//! ```
//!
//! ## Outcomes
//!
//! Single-agent searches return a [`Solution`] with three cases: `Found`
//! (an action sequence and its cost), `NoSolution` (the space is exhausted),
//! and `Cutoff` (truncated by a depth limit or cancellation). Treating
//! `Cutoff` as `NoSolution` is a caller bug: only the former justifies a
//! retry with a larger budget. Adversarial decisions return the chosen
//! action together with its root value; only a state with no legal action
//! at all is an error.
//!
//! ## Cancellation
//!
//! Every algorithm takes or carries a [`CancelToken`]. A caller may run the
//! search on a worker thread and arrange for a watchdog to set the token
//! after a timeout ([`CancelToken::cancel_after`]); the search observes the
//! flag at its next expansion step and returns `Cutoff`. The token is the
//! only value shared across threads; the search structures themselves are
//! single-threaded.

pub mod best_first;
pub mod cancel;
pub mod config;
pub mod minimax;
pub mod node;
pub mod play;
pub mod solution;
pub mod stats;
pub mod task;
pub mod uninformed;

pub use best_first::{a_star_search, best_first_search, greedy_search, uniform_cost_search};
pub use cancel::CancelToken;
pub use config::MinimaxConfig;
pub use minimax::{Decision, Minimax};
pub use node::SearchNode;
pub use play::{play, ChannelStrategy, MinimaxStrategy, Strategy};
pub use solution::Solution;
pub use stats::SearchStats;
pub use task::{Game, Problem, Task};
pub use uninformed::{
    breadth_first_search, depth_first_search, depth_first_search_recursive,
    depth_limited_search, iterative_deepening_search,
};

/// Error type for operations that must produce an action
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// No legal actions are available from the current state
    #[error("No legal actions available from current state")]
    NoLegalActions,

    /// An interactive participant's channel closed before a choice was made
    #[error("Action channel closed before a choice was made")]
    ChannelClosed,
}

/// Result type for decision operations
pub type Result<T> = std::result::Result<T, SearchError>;
