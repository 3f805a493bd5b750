//! Cost-driven best-first search, generalized over a node cost function.
//!
//! [`best_first_search`] orders its frontier by an arbitrary
//! `Fn(&SearchNode) -> f64`; the classic instantiations are provided as
//! [`uniform_cost_search`] (path cost), [`greedy_search`] (heuristic), and
//! [`a_star_search`] (their sum).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::rc::Rc;

use log::debug;

use crate::cancel::CancelToken;
use crate::node::SearchNode;
use crate::solution::Solution;
use crate::task::Problem;

/// A frontier entry ordered by cost-function value, min first.
///
/// Ties pop in insertion order, keyed by a monotone sequence number.
struct FrontierEntry<S, A> {
    cost: f64,
    seq: u64,
    node: Rc<SearchNode<S, A>>,
}

impl<S, A> PartialEq for FrontierEntry<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<S, A> Eq for FrontierEntry<S, A> {}

impl<S, A> PartialOrd for FrontierEntry<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> Ord for FrontierEntry<S, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the std max-heap pops the lowest cost first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Best-first graph search parameterized by a cost function over nodes.
///
/// Maintains a min-priority frontier plus a map from state to the best known
/// cost-function value currently eligible in the frontier. A child is
/// inserted only if its state has no entry yet or its value is strictly
/// lower than the existing one; stale higher-cost entries for the same state
/// stay in the heap and are discarded lazily when popped after the state was
/// already explored. This lazy-deletion policy (rather than searching and
/// replacing frontier entries eagerly) is what makes uniform-cost and A*
/// expansion order, and therefore their optimality, correct.
pub fn best_first_search<P, F>(
    problem: &P,
    token: &CancelToken,
    cost_fn: F,
) -> Solution<P::Action>
where
    P: Problem,
    F: Fn(&SearchNode<P::State, P::Action>) -> f64,
{
    let root = SearchNode::root(problem);
    if problem.is_goal(root.state()) {
        return root.solution();
    }

    let mut seq: u64 = 0;
    let mut frontier: BinaryHeap<FrontierEntry<P::State, P::Action>> = BinaryHeap::new();
    let mut best_cost: HashMap<P::State, f64> = HashMap::new();

    best_cost.insert(root.state().clone(), cost_fn(&root));
    frontier.push(FrontierEntry {
        cost: cost_fn(&root),
        seq,
        node: root,
    });

    let mut explored: HashSet<P::State> = HashSet::new();

    loop {
        if token.is_cancelled() {
            return Solution::Cutoff;
        }

        let entry = match frontier.pop() {
            Some(entry) => entry,
            None => return Solution::NoSolution,
        };
        let node = entry.node;

        // Stale duplicate left behind by a cheaper path to the same state.
        if explored.contains(node.state()) {
            continue;
        }

        if problem.is_goal(node.state()) {
            debug!(
                "best-first: goal at depth {} with cost {}",
                node.depth(),
                node.path_cost()
            );
            return node.solution();
        }

        explored.insert(node.state().clone());

        for action in problem.actions(node.state()) {
            let child = node.expand(problem, action);

            if explored.contains(child.state()) {
                continue;
            }

            let child_cost = cost_fn(&child);
            let admit = match best_cost.get(child.state()) {
                None => true,
                Some(existing) => child_cost < *existing,
            };
            if admit {
                best_cost.insert(child.state().clone(), child_cost);
                seq += 1;
                frontier.push(FrontierEntry {
                    cost: child_cost,
                    seq,
                    node: child,
                });
            }
        }
    }
}

/// Uniform-cost search: best-first ordered by accumulated path cost.
///
/// Returns a minimum-cost solution when step costs are non-negative.
pub fn uniform_cost_search<P: Problem>(
    problem: &P,
    token: &CancelToken,
) -> Solution<P::Action> {
    best_first_search(problem, token, |node| node.path_cost())
}

/// Greedy best-first search: ordered by the heuristic estimate alone.
///
/// Fast but makes no optimality guarantee.
pub fn greedy_search<P: Problem>(problem: &P, token: &CancelToken) -> Solution<P::Action> {
    best_first_search(problem, token, |node| node.heuristic())
}

/// A* search: ordered by path cost plus heuristic estimate.
///
/// Returns a minimum-cost solution when the problem's heuristic is
/// admissible.
pub fn a_star_search<P: Problem>(problem: &P, token: &CancelToken) -> Solution<P::Action> {
    best_first_search(problem, token, |node| node.path_cost() + node.heuristic())
}
