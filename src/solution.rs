//! The three-way outcome of a single-agent search.

/// Outcome of a single-agent search.
///
/// The distinction between [`Solution::NoSolution`] and [`Solution::Cutoff`]
/// is load-bearing: exhaustion means the reachable state space provably
/// contains no goal, while a cutoff means the search was truncated (by a
/// depth limit or cancellation) before it could decide. Callers that retry
/// with a larger budget must only do so on `Cutoff`.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution<A> {
    /// A goal was reached; `actions` replayed from the initial state lead to
    /// it, and `cost` is the accumulated path cost along the way.
    Found {
        /// Actions from the initial state to the goal, in execution order
        actions: Vec<A>,
        /// Total path cost of the action sequence
        cost: f64,
    },

    /// The frontier emptied without reaching a goal: the space is exhausted.
    NoSolution,

    /// The search was truncated by a depth limit or cancellation before it
    /// could determine `Found` or `NoSolution`.
    Cutoff,
}

impl<A> Solution<A> {
    /// Returns true if a goal was reached
    pub fn is_found(&self) -> bool {
        matches!(self, Solution::Found { .. })
    }

    /// Returns true if the search space was exhausted without a goal
    pub fn is_no_solution(&self) -> bool {
        matches!(self, Solution::NoSolution)
    }

    /// Returns true if the search was truncated
    pub fn is_cutoff(&self) -> bool {
        matches!(self, Solution::Cutoff)
    }

    /// Returns the action sequence, if a goal was reached
    pub fn actions(&self) -> Option<&[A]> {
        match self {
            Solution::Found { actions, .. } => Some(actions),
            _ => None,
        }
    }

    /// Returns the total path cost, if a goal was reached
    pub fn cost(&self) -> Option<f64> {
        match self {
            Solution::Found { cost, .. } => Some(*cost),
            _ => None,
        }
    }
}
