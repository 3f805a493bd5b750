//! Minimax decision procedure and its alpha-beta-pruned variant.
//!
//! Each decision is a fresh bounded tree search from the supplied state:
//! nothing persists between calls except the configuration, the statistics
//! of the last decision, and the tie-breaking random source. Identical
//! inputs recurse to the same leaves up to tie-break randomness.

use std::collections::HashSet;
use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::cancel::CancelToken;
use crate::config::MinimaxConfig;
use crate::stats::SearchStats;
use crate::task::Game;
use crate::{Result, SearchError};

/// The outcome of an adversarial decision: the chosen action and the root
/// value it achieves under optimal-adversary assumptions.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<A> {
    /// The chosen action
    pub action: A,
    /// The minimax value the action achieves at the root
    pub value: f64,
}

/// Adversarial game-tree solver.
///
/// Holds a [`MinimaxConfig`], the [`SearchStats`] of the most recent
/// decision, and a seedable random source for root tie-breaking. Both
/// decision variants select the action maximizing the value the minimizing
/// opponent can be held to.
///
/// # Example
///
/// ```no_run
/// use treesearch::{Game, Minimax, MinimaxConfig};
///
/// fn choose<G: Game>(game: &G, state: &G::State, me: &G::Player) -> G::Action {
///     let mut solver = Minimax::new(MinimaxConfig::default().with_depth_limit(4));
///     solver.decide_alpha_beta(game, state, me).unwrap().action
/// }
/// ```
pub struct Minimax {
    config: MinimaxConfig,
    stats: SearchStats,
    rng: StdRng,
}

impl Minimax {
    /// Creates a solver with the given configuration
    pub fn new(config: MinimaxConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Minimax {
            config,
            stats: SearchStats::new(),
            rng,
        }
    }

    /// Statistics of the most recent decision
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn cancelled(&self) -> bool {
        self.config
            .cancel
            .as_ref()
            .is_some_and(CancelToken::is_cancelled)
    }

    /// Plain minimax decision from `state`, maximizing for `player`.
    ///
    /// Computes the exact (depth-bounded) value of every legal root action
    /// by mutually recursive min/max evaluation, then applies the root
    /// tie-break policy. Recursion bottoms out at terminal states or when
    /// the ply budget reaches zero, scoring the state with the game's
    /// utility function (a static evaluation at the horizon).
    ///
    /// Errors with [`SearchError::NoLegalActions`] if `state` admits no
    /// action at all.
    pub fn decide<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        player: &G::Player,
    ) -> Result<Decision<G::Action>> {
        let started = Instant::now();
        self.stats = SearchStats::new();

        let actions = game.actions(state);
        if actions.is_empty() {
            return Err(SearchError::NoLegalActions);
        }

        let limit = self.config.depth_limit.unwrap_or(usize::MAX);
        self.stats.nodes_expanded += 1;

        let mut scored = Vec::with_capacity(actions.len());
        for action in &actions {
            if self.cancelled() {
                debug!("minimax: cancelled after {} root actions", scored.len());
                break;
            }
            let next = game.transition(state, action);
            let value = self.min_value(game, &next, player, limit.saturating_sub(1), 1);
            scored.push((action.clone(), value));
        }

        let decision = self.pick_at_root(game, state, player, &actions, scored);
        self.stats.total_time = started.elapsed();
        decision
    }

    /// Alpha-beta-pruned, cycle-avoiding minimax decision.
    ///
    /// Same recursive structure as [`Minimax::decide`], carrying
    /// `(alpha, beta)` bounds and pruning a branch as soon as its value can
    /// no longer influence the parent's choice. A `visited` state set is
    /// threaded through the recursion to guarantee termination on cyclic
    /// state spaces: a state already on the current branch is scored as if
    /// terminal. The set is backtracked on return, so visits on one branch
    /// never hide lines through legitimately revisitable states on sibling
    /// branches.
    ///
    /// On a fully searched tree the chosen value is identical to plain
    /// minimax; only which of several equal-valued actions gets picked may
    /// differ. Because a pruned sibling only yields an upper bound on its
    /// true value, root actions scored at or below the alpha in force are
    /// not tie candidates: ties resolve toward the earliest action whose
    /// exact value achieved the maximum.
    pub fn decide_alpha_beta<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        player: &G::Player,
    ) -> Result<Decision<G::Action>> {
        let started = Instant::now();
        self.stats = SearchStats::new();

        let actions = game.actions(state);
        if actions.is_empty() {
            return Err(SearchError::NoLegalActions);
        }

        let limit = self.config.depth_limit.unwrap_or(usize::MAX);
        self.stats.nodes_expanded += 1;

        let mut visited: HashSet<G::State> = HashSet::new();
        visited.insert(state.clone());

        let mut alpha = f64::NEG_INFINITY;
        let mut scored = Vec::with_capacity(actions.len());
        for action in &actions {
            if self.cancelled() {
                debug!("alpha-beta: cancelled after {} root actions", scored.len());
                break;
            }
            let next = game.transition(state, action);
            let value = self.ab_min_value(
                game,
                &next,
                player,
                limit.saturating_sub(1),
                1,
                alpha,
                f64::INFINITY,
                &mut visited,
            );
            // A value not exceeding the alpha in force is only an upper
            // bound: the subtree may have been pruned before its true
            // (possibly lower) value surfaced. Keep it out of the root tie
            // set so a pruned bound can never masquerade as the maximum.
            if scored.is_empty() || value > alpha {
                scored.push((action.clone(), value));
            }
            alpha = alpha.max(value);
        }

        let decision = self.pick_at_root(game, state, player, &actions, scored);
        self.stats.total_time = started.elapsed();
        decision
    }

    /// Root selection shared by both variants: keep every action achieving
    /// the maximum value, break ties by the utility of the immediately
    /// resulting state (no further lookahead), then uniformly at random.
    /// If nothing was scored at all, fall back to a uniformly random legal
    /// action rather than failing.
    fn pick_at_root<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        player: &G::Player,
        legal: &[G::Action],
        scored: Vec<(G::Action, f64)>,
    ) -> Result<Decision<G::Action>> {
        if scored.is_empty() {
            let action = legal
                .choose(&mut self.rng)
                .cloned()
                .ok_or(SearchError::NoLegalActions)?;
            let value = game.utility(&game.transition(state, &action), player);
            debug!("root: no scored actions, random fallback {action:?}");
            return Ok(Decision { action, value });
        }

        let best = scored
            .iter()
            .map(|(_, value)| *value)
            .fold(f64::NEG_INFINITY, f64::max);
        let mut candidates: Vec<G::Action> = scored
            .iter()
            .filter(|(_, value)| *value == best)
            .map(|(action, _)| action.clone())
            .collect();

        if candidates.len() > 1 {
            let secondary: Vec<f64> = candidates
                .iter()
                .map(|action| game.utility(&game.transition(state, action), player))
                .collect();
            let top = secondary.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            candidates = candidates
                .into_iter()
                .zip(secondary)
                .filter(|(_, s)| *s == top)
                .map(|(action, _)| action)
                .collect();
        }

        match candidates.choose(&mut self.rng) {
            Some(action) => {
                debug!("root: chose {action:?} with value {best}");
                Ok(Decision {
                    action: action.clone(),
                    value: best,
                })
            }
            // Unreachable: scored was non-empty, so candidates is too.
            None => Err(SearchError::NoLegalActions),
        }
    }

    fn min_value<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        player: &G::Player,
        limit: usize,
        ply: usize,
    ) -> f64 {
        self.stats.max_depth = self.stats.max_depth.max(ply);

        if self.cancelled() || game.is_terminal(state) || limit == 0 {
            self.stats.evaluations += 1;
            return game.utility(state, player);
        }

        let actions = game.actions(state);
        if actions.is_empty() {
            // Non-terminal dead end; score it statically.
            self.stats.evaluations += 1;
            return game.utility(state, player);
        }

        self.stats.nodes_expanded += 1;
        let mut best = f64::INFINITY;
        for action in actions {
            let next = game.transition(state, &action);
            best = best.min(self.max_value(game, &next, player, limit - 1, ply + 1));
        }
        best
    }

    fn max_value<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        player: &G::Player,
        limit: usize,
        ply: usize,
    ) -> f64 {
        self.stats.max_depth = self.stats.max_depth.max(ply);

        if self.cancelled() || game.is_terminal(state) || limit == 0 {
            self.stats.evaluations += 1;
            return game.utility(state, player);
        }

        let actions = game.actions(state);
        if actions.is_empty() {
            self.stats.evaluations += 1;
            return game.utility(state, player);
        }

        self.stats.nodes_expanded += 1;
        let mut best = f64::NEG_INFINITY;
        for action in actions {
            let next = game.transition(state, &action);
            best = best.max(self.min_value(game, &next, player, limit - 1, ply + 1));
        }
        best
    }

    #[allow(clippy::too_many_arguments)]
    fn ab_min_value<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        player: &G::Player,
        limit: usize,
        ply: usize,
        alpha: f64,
        beta: f64,
        visited: &mut HashSet<G::State>,
    ) -> f64 {
        self.stats.max_depth = self.stats.max_depth.max(ply);

        if self.cancelled()
            || game.is_terminal(state)
            || limit == 0
            || visited.contains(state)
        {
            self.stats.evaluations += 1;
            return game.utility(state, player);
        }

        let actions = game.actions(state);
        if actions.is_empty() {
            self.stats.evaluations += 1;
            return game.utility(state, player);
        }

        self.stats.nodes_expanded += 1;
        visited.insert(state.clone());

        let mut beta = beta;
        let mut best = f64::INFINITY;
        for action in actions {
            let next = game.transition(state, &action);
            let value =
                self.ab_max_value(game, &next, player, limit - 1, ply + 1, alpha, beta, visited);
            best = best.min(value);
            if best <= alpha {
                self.stats.prunes += 1;
                break;
            }
            beta = beta.min(best);
        }

        // Per-branch visited semantics: forget this state on backtrack.
        visited.remove(state);
        best
    }

    #[allow(clippy::too_many_arguments)]
    fn ab_max_value<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        player: &G::Player,
        limit: usize,
        ply: usize,
        alpha: f64,
        beta: f64,
        visited: &mut HashSet<G::State>,
    ) -> f64 {
        self.stats.max_depth = self.stats.max_depth.max(ply);

        if self.cancelled()
            || game.is_terminal(state)
            || limit == 0
            || visited.contains(state)
        {
            self.stats.evaluations += 1;
            return game.utility(state, player);
        }

        let actions = game.actions(state);
        if actions.is_empty() {
            self.stats.evaluations += 1;
            return game.utility(state, player);
        }

        self.stats.nodes_expanded += 1;
        visited.insert(state.clone());

        let mut alpha = alpha;
        let mut best = f64::NEG_INFINITY;
        for action in actions {
            let next = game.transition(state, &action);
            let value =
                self.ab_min_value(game, &next, player, limit - 1, ply + 1, alpha, beta, visited);
            best = best.max(value);
            if best >= beta {
                self.stats.prunes += 1;
                break;
            }
            alpha = alpha.max(best);
        }

        visited.remove(state);
        best
    }
}
