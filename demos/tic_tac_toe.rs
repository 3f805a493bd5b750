//! Interactive tic-tac-toe against the alpha-beta solver.
//!
//! The human plays X from stdin; the AI plays O with full-depth alpha-beta
//! search. Run with `cargo run --example tic_tac_toe`.

use std::fmt;
use std::io::{self, Write};

use treesearch::{
    play, Game, MinimaxConfig, MinimaxStrategy, Result, Strategy, Task,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Mark {
    X,
    O,
}

impl Mark {
    fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Board {
    cells: [Option<Mark>; 9],
    to_move: Mark,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2")?;
        for row in 0..3 {
            write!(f, "{row} ")?;
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Some(Mark::X) => "X",
                    Some(Mark::O) => "O",
                    None => ".",
                };
                write!(f, "{symbol} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn winner(board: &Board) -> Option<Mark> {
    for line in &LINES {
        if let Some(mark) = board.cells[line[0]] {
            if board.cells[line[1]] == Some(mark) && board.cells[line[2]] == Some(mark) {
                return Some(mark);
            }
        }
    }
    None
}

struct TicTacToe;

impl Task for TicTacToe {
    type State = Board;
    type Action = usize;

    fn initial_state(&self) -> Board {
        Board {
            cells: [None; 9],
            to_move: Mark::X,
        }
    }

    fn actions(&self, state: &Board) -> Vec<usize> {
        if winner(state).is_some() {
            return vec![];
        }
        (0..9).filter(|&i| state.cells[i].is_none()).collect()
    }

    fn transition(&self, state: &Board, action: &usize) -> Board {
        let mut next = state.clone();
        next.cells[*action] = Some(state.to_move);
        next.to_move = state.to_move.other();
        next
    }
}

impl Game for TicTacToe {
    type Player = Mark;

    fn is_terminal(&self, state: &Board) -> bool {
        winner(state).is_some() || state.cells.iter().all(Option::is_some)
    }

    fn utility(&self, state: &Board, player: &Mark) -> f64 {
        match winner(state) {
            Some(mark) if mark == *player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }
}

/// Blocking human participant: prompts on stdin until a legal cell is given.
struct StdinStrategy;

impl Strategy<TicTacToe> for StdinStrategy {
    fn choose_action(&mut self, game: &TicTacToe, state: &Board) -> Result<usize> {
        let legal = game.actions(state);
        loop {
            print!("Your move (row column, e.g. '1 2'): ");
            io::stdout().flush().ok();

            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                continue;
            }

            let coords: Vec<usize> = input
                .trim()
                .split_whitespace()
                .filter_map(|s| s.parse().ok())
                .collect();

            match coords.as_slice() {
                [row, col] if *row < 3 && *col < 3 => {
                    let cell = row * 3 + col;
                    if legal.contains(&cell) {
                        return Ok(cell);
                    }
                    println!("That cell is taken. Try again.");
                }
                _ => println!("Enter row and column (0-2)."),
            }
        }
    }
}

fn main() {
    env_logger::init();

    println!("Tic-Tac-Toe against alpha-beta search");
    println!("=====================================");
    println!();

    let game = TicTacToe;
    println!("{}", game.initial_state());

    let mut human = StdinStrategy;
    let mut ai: MinimaxStrategy<TicTacToe> =
        MinimaxStrategy::alpha_beta(Mark::O, MinimaxConfig::default());
    let strategies: &mut [&mut dyn Strategy<TicTacToe>] = &mut [&mut human, &mut ai];

    let result = play(&game, strategies, |index, state, action| {
        if index == 1 {
            println!("AI plays row {}, col {}", action / 3, action % 3);
        }
        println!("{}", game.transition(state, action));
    });

    match result {
        Ok(final_state) => match winner(&final_state) {
            Some(mark) => println!("Player {mark:?} wins!"),
            None => println!("The game is a draw!"),
        },
        Err(e) => println!("Game aborted: {e}"),
    }
}
