//! Traits defining the task contract consumed by the search algorithms.
//!
//! A [`Task`] describes an abstract state space: an initial state, the legal
//! actions out of each state, and a transition function. [`Problem`] extends
//! it with a goal test and costs for single-agent search; [`Game`] extends it
//! with a terminal test and per-player utilities for adversarial search.

use std::fmt::Debug;
use std::hash::Hash;

/// An abstract state-space description.
///
/// States and actions are opaque to the algorithms: they only need value
/// equality and a stable hash, used for explored-set tracking and frontier
/// deduplication. The search core never mutates a state in place; it only
/// asks the task for the successor of a `(state, action)` pair.
pub trait Task {
    /// The state type of this task's state space
    type State: Clone + Eq + Hash + Debug;

    /// The action type representing one legal transition out of a state
    type Action: Clone + Eq + Hash + Debug;

    /// Returns the state the search starts from
    fn initial_state(&self) -> Self::State;

    /// Returns the legal actions out of `state`
    ///
    /// A terminal or dead-end state returns an empty list. The algorithms
    /// only ever call [`Task::transition`] with actions drawn from this
    /// enumeration.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Returns the successor of `state` under `action`
    ///
    /// Must not observably mutate `state`; the algorithms rely on being able
    /// to expand several actions out of the same state.
    fn transition(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}

/// A single-agent search problem: a [`Task`] with a goal.
pub trait Problem: Task {
    /// Returns true if `state` satisfies the goal
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Returns the non-negative cost of taking `action` in `state`
    ///
    /// Defaults to a unit step cost, which makes breadth-first and
    /// uniform-cost search equivalent.
    fn path_cost(&self, _state: &Self::State, _action: &Self::Action) -> f64 {
        1.0
    }

    /// Returns a non-negative estimate of the remaining cost to a goal
    ///
    /// Defaults to zero (no heuristic), which degrades A* to uniform-cost
    /// search. Must never overestimate the true remaining cost for A* to
    /// return optimal solutions.
    fn heuristic(&self, _state: &Self::State) -> f64 {
        0.0
    }
}

/// An adversarial task: a [`Task`] with terminal states and per-player
/// utilities.
pub trait Game: Task {
    /// The type identifying a player of this game
    type Player: Clone + Debug + PartialEq;

    /// Returns true if `state` is a game-over state
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Returns the value of `state` from `player`'s perspective
    ///
    /// Exact on terminal states; on non-terminal states it doubles as the
    /// static evaluation used when depth-limited search reaches its horizon.
    /// By convention bounded, e.g. in `[-1, 1]` with win/loss/draw mapping
    /// to `1`/`-1`/`0`.
    fn utility(&self, state: &Self::State, player: &Self::Player) -> f64;
}
