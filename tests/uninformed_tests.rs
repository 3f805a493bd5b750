use treesearch::{
    breadth_first_search, depth_first_search, depth_first_search_recursive,
    depth_limited_search, iterative_deepening_search, CancelToken, Problem, Solution, Task,
};

// Small directed graph for exercising the uninformed algorithms:
//
//   0 -> 1 -> 3 -> 4
//   0 -> 2 ------> 4
//
// The shallowest path from 0 to 4 is 0 -> 2 -> 4 (two actions).
struct GraphProblem {
    edges: &'static [(u8, u8)],
    start: u8,
    goal: u8,
}

const EDGES: &[(u8, u8)] = &[(0, 1), (0, 2), (1, 3), (3, 4), (2, 4)];

impl GraphProblem {
    fn solvable() -> Self {
        GraphProblem {
            edges: EDGES,
            start: 0,
            goal: 4,
        }
    }

    fn unsolvable() -> Self {
        GraphProblem {
            edges: EDGES,
            start: 0,
            goal: 9,
        }
    }
}

impl Task for GraphProblem {
    type State = u8;
    type Action = (u8, u8);

    fn initial_state(&self) -> u8 {
        self.start
    }

    fn actions(&self, state: &u8) -> Vec<(u8, u8)> {
        self.edges
            .iter()
            .filter(|(from, _)| from == state)
            .copied()
            .collect()
    }

    fn transition(&self, _state: &u8, action: &(u8, u8)) -> u8 {
        action.1
    }
}

impl Problem for GraphProblem {
    fn is_goal(&self, state: &u8) -> bool {
        *state == self.goal
    }
}

// Replays a solution against the problem and checks it actually reaches the
// goal with the reported cost.
fn assert_valid_solution(problem: &GraphProblem, solution: &Solution<(u8, u8)>) {
    let actions = solution.actions().expect("expected a Found solution");
    let mut state = problem.initial_state();
    let mut cost = 0.0;
    for action in actions {
        cost += problem.path_cost(&state, action);
        state = problem.transition(&state, action);
    }
    assert!(problem.is_goal(&state), "replay did not reach the goal");
    assert_eq!(solution.cost(), Some(cost), "reported cost does not match replay");
}

#[test]
fn bfs_finds_shallowest_path() {
    let problem = GraphProblem::solvable();
    let solution = breadth_first_search(&problem, &CancelToken::new());
    assert_valid_solution(&problem, &solution);
    assert_eq!(solution.actions().unwrap().len(), 2, "BFS should find the shallowest goal");
}

#[test]
fn bfs_exhausts_to_no_solution() {
    let solution = breadth_first_search(&GraphProblem::unsolvable(), &CancelToken::new());
    assert!(solution.is_no_solution());
}

#[test]
fn bfs_root_goal_returns_empty_plan() {
    let problem = GraphProblem {
        edges: EDGES,
        start: 4,
        goal: 4,
    };
    let solution = breadth_first_search(&problem, &CancelToken::new());
    assert_eq!(
        solution,
        Solution::Found {
            actions: vec![],
            cost: 0.0
        }
    );
}

#[test]
fn dfs_finds_some_valid_path() {
    let problem = GraphProblem::solvable();
    let solution = depth_first_search(&problem, &CancelToken::new());
    assert_valid_solution(&problem, &solution);
}

#[test]
fn dfs_exhausts_to_no_solution() {
    let solution = depth_first_search(&GraphProblem::unsolvable(), &CancelToken::new());
    assert!(solution.is_no_solution());
}

#[test]
fn dfs_recursive_finds_some_valid_path() {
    let problem = GraphProblem::solvable();
    let solution = depth_first_search_recursive(&problem, &CancelToken::new());
    assert_valid_solution(&problem, &solution);
}

#[test]
fn depth_limited_below_goal_depth_is_cutoff() {
    let problem = GraphProblem::solvable();
    let solution = depth_limited_search(&problem, &CancelToken::new(), 1);
    assert!(solution.is_cutoff(), "limit 1 cannot reach a goal at depth 2");
}

#[test]
fn depth_limited_at_goal_depth_finds() {
    let problem = GraphProblem::solvable();
    let solution = depth_limited_search(&problem, &CancelToken::new(), 2);
    assert_valid_solution(&problem, &solution);
}

#[test]
fn depth_limited_exhausted_space_is_no_solution() {
    // The whole graph is shallower than the limit, so every branch exhausts
    // without a cutoff anywhere below.
    let solution = depth_limited_search(&GraphProblem::unsolvable(), &CancelToken::new(), 10);
    assert!(solution.is_no_solution());
}

#[test]
fn iterative_deepening_finds_shallowest_path() {
    let problem = GraphProblem::solvable();
    let solution = iterative_deepening_search(&problem, &CancelToken::new());
    assert_valid_solution(&problem, &solution);
    assert_eq!(solution.actions().unwrap().len(), 2);
}

#[test]
fn iterative_deepening_exhausts_to_no_solution() {
    let solution = iterative_deepening_search(&GraphProblem::unsolvable(), &CancelToken::new());
    assert!(solution.is_no_solution());
}
