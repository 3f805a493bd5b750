use treesearch::{
    a_star_search, best_first_search, greedy_search, uniform_cost_search, CancelToken, Problem,
    Solution, Task,
};

// Weighted directed graph with a known shortest path:
//
//   0 --1--> 1 --2--> 2 --1--> 3
//             \--5-----------> 3
//   0 --10-----------> 2
//
// The cheapest route from 0 to 3 costs 4 (0 -> 1 -> 2 -> 3), even though it
// takes more hops than 0 -> 1 -> 3.
struct WeightedGraph {
    heuristic: fn(u8) -> f64,
}

const WEIGHTED_EDGES: &[(u8, u8, f64)] = &[
    (0, 1, 1.0),
    (1, 2, 2.0),
    (2, 3, 1.0),
    (1, 3, 5.0),
    (0, 2, 10.0),
];

const OPTIMAL_COST: f64 = 4.0;

fn no_heuristic(_state: u8) -> f64 {
    0.0
}

// Never overestimates the true remaining costs (4, 3, 1, 0).
fn admissible(state: u8) -> f64 {
    match state {
        0 => 3.0,
        1 => 2.5,
        2 => 1.0,
        _ => 0.0,
    }
}

impl Task for WeightedGraph {
    type State = u8;
    type Action = (u8, u8);

    fn initial_state(&self) -> u8 {
        0
    }

    fn actions(&self, state: &u8) -> Vec<(u8, u8)> {
        WEIGHTED_EDGES
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|(from, to, _)| (*from, *to))
            .collect()
    }

    fn transition(&self, _state: &u8, action: &(u8, u8)) -> u8 {
        action.1
    }
}

impl Problem for WeightedGraph {
    fn is_goal(&self, state: &u8) -> bool {
        *state == 3
    }

    fn path_cost(&self, _state: &u8, action: &(u8, u8)) -> f64 {
        WEIGHTED_EDGES
            .iter()
            .find(|(from, to, _)| (*from, *to) == *action)
            .map(|(_, _, weight)| *weight)
            .unwrap_or(f64::INFINITY)
    }

    fn heuristic(&self, state: &u8) -> f64 {
        (self.heuristic)(*state)
    }
}

fn replay_cost(problem: &WeightedGraph, solution: &Solution<(u8, u8)>) -> f64 {
    let actions = solution.actions().expect("expected a Found solution");
    let mut state = problem.initial_state();
    let mut cost = 0.0;
    for action in actions {
        cost += problem.path_cost(&state, action);
        state = problem.transition(&state, action);
    }
    assert!(problem.is_goal(&state), "replay did not reach the goal");
    cost
}

#[test]
fn uniform_cost_is_optimal() {
    let problem = WeightedGraph {
        heuristic: no_heuristic,
    };
    let solution = uniform_cost_search(&problem, &CancelToken::new());
    assert_eq!(solution.cost(), Some(OPTIMAL_COST));
    assert_eq!(replay_cost(&problem, &solution), OPTIMAL_COST);
    assert_eq!(
        solution.actions().unwrap(),
        &[(0, 1), (1, 2), (2, 3)],
        "the cheaper three-hop route must beat the shorter expensive ones"
    );
}

#[test]
fn a_star_with_admissible_heuristic_is_optimal() {
    let problem = WeightedGraph {
        heuristic: admissible,
    };
    let solution = a_star_search(&problem, &CancelToken::new());
    assert_eq!(solution.cost(), Some(OPTIMAL_COST));
    assert_eq!(replay_cost(&problem, &solution), OPTIMAL_COST);
}

#[test]
fn greedy_follows_the_heuristic_not_the_cost() {
    // From 0 the heuristic prefers jumping straight to 2, so greedy commits
    // to the expensive direct edge. Still a valid solution, just not optimal.
    let problem = WeightedGraph {
        heuristic: admissible,
    };
    let solution = greedy_search(&problem, &CancelToken::new());
    assert!(solution.is_found());
    assert_eq!(solution.cost(), Some(11.0));
}

#[test]
fn best_first_with_custom_cost_function() {
    // Ordering by depth alone turns best-first into breadth-first.
    let problem = WeightedGraph {
        heuristic: no_heuristic,
    };
    let solution = best_first_search(&problem, &CancelToken::new(), |node| node.depth() as f64);
    assert!(solution.is_found());
    assert_eq!(solution.actions().unwrap().len(), 2, "shallowest path has two hops");
}

#[test]
fn unreachable_goal_is_no_solution() {
    struct Island;

    impl Task for Island {
        type State = u8;
        type Action = (u8, u8);

        fn initial_state(&self) -> u8 {
            0
        }

        fn actions(&self, _state: &u8) -> Vec<(u8, u8)> {
            vec![]
        }

        fn transition(&self, _state: &u8, action: &(u8, u8)) -> u8 {
            action.1
        }
    }

    impl Problem for Island {
        fn is_goal(&self, state: &u8) -> bool {
            *state == 1
        }
    }

    let solution = uniform_cost_search(&Island, &CancelToken::new());
    assert!(solution.is_no_solution());
}

#[test]
fn cancelled_token_cuts_off_before_expansion() {
    let problem = WeightedGraph {
        heuristic: no_heuristic,
    };
    let token = CancelToken::new();
    token.cancel();
    assert!(uniform_cost_search(&problem, &token).is_cutoff());
    assert!(a_star_search(&problem, &token).is_cutoff());
}
