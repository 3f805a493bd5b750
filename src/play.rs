//! Sequential turn-based play over a [`Game`].
//!
//! A participant is anything implementing [`Strategy`]; a player *has* a
//! decision procedure rather than inheriting one. AI participants wrap a
//! [`Minimax`] solver, and interactive participants block on a channel until
//! a front end supplies a move. At the loop level the two are
//! indistinguishable: one strategy's choice is applied before the next
//! strategy runs, and a blocking human choice is just a longer-running
//! `choose_action`.

use std::sync::mpsc::Receiver;

use log::debug;

use crate::config::MinimaxConfig;
use crate::minimax::Minimax;
use crate::task::Game;
use crate::{Result, SearchError};

/// A decision procedure for one participant of a game.
pub trait Strategy<G: Game> {
    /// Chooses the action to play from `state`
    ///
    /// May block (an interactive player waiting for input is a legitimate
    /// suspension point for the game loop).
    fn choose_action(&mut self, game: &G, state: &G::State) -> Result<G::Action>;
}

/// An AI participant backed by a [`Minimax`] solver.
pub struct MinimaxStrategy<G: Game> {
    player: G::Player,
    solver: Minimax,
    alpha_beta: bool,
}

impl<G: Game> MinimaxStrategy<G> {
    /// Creates a strategy using plain minimax
    pub fn minimax(player: G::Player, config: MinimaxConfig) -> Self {
        MinimaxStrategy {
            player,
            solver: Minimax::new(config),
            alpha_beta: false,
        }
    }

    /// Creates a strategy using the alpha-beta-pruned variant
    pub fn alpha_beta(player: G::Player, config: MinimaxConfig) -> Self {
        MinimaxStrategy {
            player,
            solver: Minimax::new(config),
            alpha_beta: true,
        }
    }

    /// The underlying solver, e.g. for reading back [`SearchStats`]
    ///
    /// [`SearchStats`]: crate::SearchStats
    pub fn solver(&self) -> &Minimax {
        &self.solver
    }
}

impl<G: Game> Strategy<G> for MinimaxStrategy<G> {
    fn choose_action(&mut self, game: &G, state: &G::State) -> Result<G::Action> {
        let decision = if self.alpha_beta {
            self.solver.decide_alpha_beta(game, state, &self.player)?
        } else {
            self.solver.decide(game, state, &self.player)?
        };
        debug!(
            "{:?} plays {:?} (value {})",
            self.player, decision.action, decision.value
        );
        Ok(decision.action)
    }
}

/// An interactive participant fed through a channel.
///
/// `choose_action` blocks on the receiving end until a front end sends the
/// chosen action; a disconnected sender surfaces as
/// [`SearchError::ChannelClosed`].
pub struct ChannelStrategy<A> {
    receiver: Receiver<A>,
}

impl<A> ChannelStrategy<A> {
    /// Creates a strategy reading actions from `receiver`
    pub fn new(receiver: Receiver<A>) -> Self {
        ChannelStrategy { receiver }
    }
}

impl<G: Game> Strategy<G> for ChannelStrategy<G::Action> {
    fn choose_action(&mut self, _game: &G, _state: &G::State) -> Result<G::Action> {
        self.receiver.recv().map_err(|_| SearchError::ChannelClosed)
    }
}

/// Runs a game to completion, alternating over `strategies` in order.
///
/// Each chosen action is reported to `observer` as
/// `(strategy index, state before the move, action)` before being applied;
/// the loop is strictly sequential, so one participant's effect is visible
/// to the next before it chooses. Returns the terminal state.
///
/// # Panics
///
/// Panics if `strategies` is empty.
pub fn play<G: Game>(
    game: &G,
    strategies: &mut [&mut dyn Strategy<G>],
    mut observer: impl FnMut(usize, &G::State, &G::Action),
) -> Result<G::State> {
    assert!(!strategies.is_empty(), "play requires at least one strategy");

    let mut state = game.initial_state();
    let mut turn = 0;
    while !game.is_terminal(&state) {
        let index = turn % strategies.len();
        let action = strategies[index].choose_action(game, &state)?;
        observer(index, &state, &action);
        state = game.transition(&state, &action);
        turn += 1;
    }
    Ok(state)
}
