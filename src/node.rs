//! Search tree nodes for single-agent search.
//!
//! A node wraps a state together with the action that produced it, a
//! back-reference to its parent, and the accumulated path cost and heuristic
//! estimate. Nodes are immutable once created: expansion builds new children,
//! and solutions are reconstructed by walking parent links back to the root.

use std::rc::Rc;

use crate::solution::Solution;
use crate::task::Problem;

/// A node in a single-agent search tree.
///
/// Nodes are handed around as `Rc<SearchNode<..>>`: the frontier owns each
/// node until it is expanded or discarded, and children keep their parent
/// alive for path reconstruction. Parent links never form a cycle because a
/// parent holds no reference back to its children.
#[derive(Debug)]
pub struct SearchNode<S, A> {
    parent: Option<Rc<SearchNode<S, A>>>,
    state: S,
    action: Option<A>,
    path_cost: f64,
    heuristic: f64,
    depth: usize,
}

impl<S: Clone, A: Clone> SearchNode<S, A> {
    /// Creates the root node for `problem`
    ///
    /// The root carries the initial state, no producing action, zero path
    /// cost, and the heuristic estimate of the initial state.
    pub fn root<P>(problem: &P) -> Rc<Self>
    where
        P: Problem<State = S, Action = A>,
    {
        let state = problem.initial_state();
        let heuristic = problem.heuristic(&state);
        Rc::new(SearchNode {
            parent: None,
            state,
            action: None,
            path_cost: 0.0,
            heuristic,
            depth: 0,
        })
    }

    /// Expands this node with `action`, returning the child node
    ///
    /// The successor state comes from the problem's transition function, the
    /// child's path cost accumulates the step cost of `action`, and the
    /// heuristic is re-estimated for the successor. The receiver is not
    /// modified. Domain errors raised by the problem's functions propagate
    /// unmodified (this crate performs no validation of its own).
    pub fn expand<P>(self: &Rc<Self>, problem: &P, action: A) -> Rc<Self>
    where
        P: Problem<State = S, Action = A>,
    {
        let state = problem.transition(&self.state, &action);
        let path_cost = self.path_cost + problem.path_cost(&self.state, &action);
        let heuristic = problem.heuristic(&state);
        Rc::new(SearchNode {
            parent: Some(Rc::clone(self)),
            state,
            action: Some(action),
            path_cost,
            heuristic,
            depth: self.depth + 1,
        })
    }

    /// Reconstructs the solution ending at this node
    ///
    /// Walks parent links up to the root collecting actions, then reverses.
    /// O(depth). The root contributes no action by construction.
    pub fn solution(&self) -> Solution<A> {
        let mut actions = Vec::with_capacity(self.depth);
        let mut current = self;
        while let Some(parent) = &current.parent {
            // Non-root nodes always carry the action that produced them.
            if let Some(action) = &current.action {
                actions.push(action.clone());
            }
            current = parent;
        }
        actions.reverse();
        Solution::Found {
            actions,
            cost: self.path_cost,
        }
    }

    /// The state wrapped by this node
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The action that produced this node (`None` for the root)
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Accumulated path cost from the root to this node
    pub fn path_cost(&self) -> f64 {
        self.path_cost
    }

    /// Heuristic estimate of the remaining cost from this node's state
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    /// Depth of this node in the tree (root = 0)
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The parent node, if any
    pub fn parent(&self) -> Option<&Rc<SearchNode<S, A>>> {
        self.parent.as_ref()
    }
}
