//! Route finding over a fragment of the classic Romania road map.
//!
//! Solves the same problem with breadth-first, uniform-cost, and A* search
//! and prints each plan. Run with `cargo run --example route_finding`.

use treesearch::{
    a_star_search, breadth_first_search, uniform_cost_search, CancelToken, Problem, Solution,
    Task,
};

type City = &'static str;

/// Road distances between neighbouring cities.
const ROADS: &[(City, City, f64)] = &[
    ("Arad", "Zerind", 75.0),
    ("Arad", "Sibiu", 140.0),
    ("Arad", "Timisoara", 118.0),
    ("Zerind", "Oradea", 71.0),
    ("Oradea", "Sibiu", 151.0),
    ("Sibiu", "Fagaras", 99.0),
    ("Sibiu", "Rimnicu Vilcea", 80.0),
    ("Rimnicu Vilcea", "Pitesti", 97.0),
    ("Fagaras", "Bucharest", 211.0),
    ("Pitesti", "Bucharest", 101.0),
    ("Timisoara", "Lugoj", 111.0),
    ("Lugoj", "Mehadia", 70.0),
    ("Mehadia", "Drobeta", 75.0),
    ("Drobeta", "Craiova", 120.0),
    ("Craiova", "Pitesti", 138.0),
    ("Craiova", "Rimnicu Vilcea", 146.0),
];

/// Straight-line distances to Bucharest, the admissible A* heuristic.
const AIRLINE_TO_BUCHAREST: &[(City, f64)] = &[
    ("Arad", 366.0),
    ("Bucharest", 0.0),
    ("Craiova", 160.0),
    ("Drobeta", 242.0),
    ("Fagaras", 176.0),
    ("Lugoj", 244.0),
    ("Mehadia", 241.0),
    ("Oradea", 380.0),
    ("Pitesti", 100.0),
    ("Rimnicu Vilcea", 193.0),
    ("Sibiu", 253.0),
    ("Timisoara", 329.0),
    ("Zerind", 374.0),
];

struct RouteProblem {
    start: City,
    goal: City,
}

impl Task for RouteProblem {
    type State = City;
    type Action = (City, City);

    fn initial_state(&self) -> City {
        self.start
    }

    fn actions(&self, state: &City) -> Vec<(City, City)> {
        // Roads run both ways.
        ROADS
            .iter()
            .filter_map(|(a, b, _)| {
                if a == state {
                    Some((*a, *b))
                } else if b == state {
                    Some((*b, *a))
                } else {
                    None
                }
            })
            .collect()
    }

    fn transition(&self, _state: &City, action: &(City, City)) -> City {
        action.1
    }
}

impl Problem for RouteProblem {
    fn is_goal(&self, state: &City) -> bool {
        *state == self.goal
    }

    fn path_cost(&self, _state: &City, action: &(City, City)) -> f64 {
        ROADS
            .iter()
            .find(|(a, b, _)| {
                (*a, *b) == (action.0, action.1) || (*b, *a) == (action.0, action.1)
            })
            .map(|(_, _, distance)| *distance)
            .unwrap_or(f64::INFINITY)
    }

    fn heuristic(&self, state: &City) -> f64 {
        AIRLINE_TO_BUCHAREST
            .iter()
            .find(|(city, _)| city == state)
            .map(|(_, distance)| *distance)
            .unwrap_or(0.0)
    }
}

fn report(label: &str, solution: &Solution<(City, City)>) {
    match solution {
        Solution::Found { actions, cost } => {
            println!("{label}: {} hops, total distance {cost}", actions.len());
            for (i, (from, to)) in actions.iter().enumerate() {
                println!("  {:<3} {from} -> {to}", format!("{}.", i + 1));
            }
        }
        Solution::NoSolution => println!("{label}: no route exists"),
        Solution::Cutoff => println!("{label}: search interrupted"),
    }
    println!();
}

fn main() {
    env_logger::init();

    let problem = RouteProblem {
        start: "Arad",
        goal: "Bucharest",
    };
    let token = CancelToken::new();

    println!("Routes from {} to {}", problem.start, problem.goal);
    println!();

    report(
        "Breadth-first (fewest hops)",
        &breadth_first_search(&problem, &token),
    );
    report(
        "Uniform-cost (shortest distance)",
        &uniform_cost_search(&problem, &token),
    );
    report(
        "A* (shortest distance, informed)",
        &a_star_search(&problem, &token),
    );
}
