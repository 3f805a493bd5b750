//! Uninformed single-agent search algorithms.
//!
//! All entry points take a [`Problem`] and a [`CancelToken`] and return a
//! [`Solution`]. The token is polled at every frontier pop and recursive
//! call, so even deeply recursive or large-frontier searches stay responsive
//! to external cancellation; none of the algorithms consult a wall clock
//! themselves.

use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use log::debug;

use crate::cancel::CancelToken;
use crate::node::SearchNode;
use crate::solution::Solution;
use crate::task::Problem;

/// Breadth-first graph search.
///
/// FIFO frontier; states enter the explored set only when popped for
/// expansion, and children whose state was already explored are skipped at
/// generation time. With unit step costs the first goal found is also the
/// shallowest.
pub fn breadth_first_search<P: Problem>(
    problem: &P,
    token: &CancelToken,
) -> Solution<P::Action> {
    let root = SearchNode::root(problem);
    if problem.is_goal(root.state()) {
        return root.solution();
    }

    let mut frontier: VecDeque<Rc<SearchNode<P::State, P::Action>>> = VecDeque::new();
    frontier.push_front(root);

    let mut explored: HashSet<P::State> = HashSet::new();

    loop {
        if token.is_cancelled() {
            return Solution::Cutoff;
        }

        let node = match frontier.pop_back() {
            Some(node) => node,
            None => return Solution::NoSolution,
        };
        explored.insert(node.state().clone());

        for action in problem.actions(node.state()) {
            let child = node.expand(problem, action);
            if !explored.contains(child.state()) {
                if problem.is_goal(child.state()) {
                    debug!("breadth-first: goal at depth {}", child.depth());
                    return child.solution();
                }
                frontier.push_front(child);
            }
        }
    }
}

/// Depth-first graph search (iterative).
///
/// Same loop as [`breadth_first_search`] with a LIFO frontier. Complete on
/// finite state spaces thanks to the explored set; not guaranteed to find
/// the shallowest goal.
pub fn depth_first_search<P: Problem>(
    problem: &P,
    token: &CancelToken,
) -> Solution<P::Action> {
    let root = SearchNode::root(problem);
    if problem.is_goal(root.state()) {
        return root.solution();
    }

    let mut frontier: VecDeque<Rc<SearchNode<P::State, P::Action>>> = VecDeque::new();
    frontier.push_back(root);

    let mut explored: HashSet<P::State> = HashSet::new();

    loop {
        if token.is_cancelled() {
            return Solution::Cutoff;
        }

        let node = match frontier.pop_back() {
            Some(node) => node,
            None => return Solution::NoSolution,
        };
        explored.insert(node.state().clone());

        for action in problem.actions(node.state()) {
            let child = node.expand(problem, action);
            if !explored.contains(child.state()) {
                if problem.is_goal(child.state()) {
                    debug!("depth-first: goal at depth {}", child.depth());
                    return child.solution();
                }
                frontier.push_back(child);
            }
        }
    }
}

/// Depth-first graph search (recursive form).
///
/// Threads the explored set through the recursion; a `Found` or `Cutoff`
/// from any subtree propagates immediately, `NoSolution` only after every
/// branch is exhausted.
pub fn depth_first_search_recursive<P: Problem>(
    problem: &P,
    token: &CancelToken,
) -> Solution<P::Action> {
    let root = SearchNode::root(problem);
    let mut explored: HashSet<P::State> = HashSet::new();
    dfs_recursive(problem, token, &root, &mut explored)
}

fn dfs_recursive<P: Problem>(
    problem: &P,
    token: &CancelToken,
    node: &Rc<SearchNode<P::State, P::Action>>,
    explored: &mut HashSet<P::State>,
) -> Solution<P::Action> {
    if token.is_cancelled() {
        return Solution::Cutoff;
    }

    if problem.is_goal(node.state()) {
        return node.solution();
    }

    explored.insert(node.state().clone());

    for action in problem.actions(node.state()) {
        let child = node.expand(problem, action);
        if !explored.contains(child.state()) {
            let solution = dfs_recursive(problem, token, &child, explored);
            if !solution.is_no_solution() {
                return solution;
            }
        }
    }

    Solution::NoSolution
}

/// Depth-limited depth-first search.
///
/// `limit` is a ply budget decremented per recursive call. Reaching zero on
/// a non-goal branch truncates that branch with `Cutoff`. A parent
/// propagates `Cutoff` if any child subtree was cut off, even when the
/// others exhausted with `NoSolution`; it returns `NoSolution` only when no
/// cutoff occurred anywhere below.
pub fn depth_limited_search<P: Problem>(
    problem: &P,
    token: &CancelToken,
    limit: usize,
) -> Solution<P::Action> {
    let root = SearchNode::root(problem);
    let mut explored: HashSet<P::State> = HashSet::new();
    dfs_limited(problem, token, &root, &mut explored, limit)
}

fn dfs_limited<P: Problem>(
    problem: &P,
    token: &CancelToken,
    node: &Rc<SearchNode<P::State, P::Action>>,
    explored: &mut HashSet<P::State>,
    limit: usize,
) -> Solution<P::Action> {
    if token.is_cancelled() {
        return Solution::Cutoff;
    }

    if problem.is_goal(node.state()) {
        return node.solution();
    }

    if limit == 0 {
        return Solution::Cutoff;
    }

    explored.insert(node.state().clone());

    let mut cutoff_occurred = false;

    for action in problem.actions(node.state()) {
        let child = node.expand(problem, action);
        if !explored.contains(child.state()) {
            match dfs_limited(problem, token, &child, explored, limit - 1) {
                Solution::Cutoff => cutoff_occurred = true,
                Solution::NoSolution => {}
                found => return found,
            }
        }
    }

    if cutoff_occurred {
        Solution::Cutoff
    } else {
        Solution::NoSolution
    }
}

/// Iterative deepening search.
///
/// Runs [`depth_limited_search`] with `limit = 1, 2, 3, …` until a call
/// settles the question either way (found a solution or proved exhaustion),
/// or the token is set. Each iteration starts from a fresh explored set.
pub fn iterative_deepening_search<P: Problem>(
    problem: &P,
    token: &CancelToken,
) -> Solution<P::Action> {
    let mut limit = 1;
    loop {
        if token.is_cancelled() {
            return Solution::Cutoff;
        }

        debug!("iterative deepening: limit {limit}");
        let solution = depth_limited_search(problem, token, limit);
        if !solution.is_cutoff() {
            return solution;
        }
        limit += 1;
    }
}
