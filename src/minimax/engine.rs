//! Search driver that owns the live game state.
//!
//! `MinimaxEngine` keeps the authoritative current board. Each decision
//! searches from it, applies the chosen child's producing move to the live
//! game (`World`) and then adopts that child as the new current board.

use log::{debug, warn};

use crate::core::PlayerId;
use crate::rules::{GameState, Move};

use super::config::MinimaxConfig;
use super::error::SearchError;
use super::search::{Choice, MinimaxSearch, SearchResult, StopReason};
use super::stats::SearchStats;

/// The live system a state type's moves are applied to.
pub type WorldOf<S> = <<S as GameState>::Move as Move>::World;

/// What a call to `decide` did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decision {
    /// A move was applied and the current board advanced.
    Played { value: f32 },
    /// Nothing was applied; the current board is unchanged.
    NoMove { value: f32, reason: StopReason },
}

impl Decision {
    /// Minimax value of the searched position.
    #[must_use]
    pub fn value(&self) -> f32 {
        match *self {
            Decision::Played { value } | Decision::NoMove { value, .. } => value,
        }
    }

    #[must_use]
    pub fn is_played(&self) -> bool {
        matches!(self, Decision::Played { .. })
    }
}

/// Minimax engine for one game in progress.
///
/// Generic over the game's state type. Not meant to be shared between
/// concurrent searches; every method takes `&mut self`.
pub struct MinimaxEngine<S: GameState> {
    /// The authoritative state of the live game.
    current_board: S,

    /// Parameters for `decide_configured`.
    config: MinimaxConfig,

    search: MinimaxSearch,
}

impl<S: GameState> MinimaxEngine<S> {
    /// Create an engine rooted at `board` with the default config.
    pub fn new(board: S) -> Self {
        Self::with_config(board, MinimaxConfig::default())
    }

    /// Create an engine rooted at `board`.
    pub fn with_config(board: S, config: MinimaxConfig) -> Self {
        Self {
            current_board: board,
            config,
            search: MinimaxSearch::new(),
        }
    }

    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: MinimaxConfig) {
        self.config = config;
    }

    /// The current board, without searching.
    pub fn current_board(&self) -> &S {
        &self.current_board
    }

    pub fn current_board_mut(&mut self) -> &mut S {
        &mut self.current_board
    }

    pub fn into_current_board(self) -> S {
        self.current_board
    }

    /// Overwrite the current board's grid with `source`'s.
    ///
    /// Used when the live game changed outside the engine (an opponent's
    /// move made elsewhere, a reset).
    pub fn reroot(&mut self, source: &S) {
        self.current_board.copy_from(source);
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        self.search.stats()
    }

    /// Search from the current board without committing anything.
    pub fn search(
        &mut self,
        depth: u32,
        maximizing_player: PlayerId,
        use_pruning: bool,
    ) -> Result<SearchResult<S>, SearchError> {
        self.search
            .search(&self.current_board, depth, maximizing_player, use_pruning)
    }

    /// Search, then play the best move on `world`.
    ///
    /// Returns `Decision::NoMove` when the current board has nothing to
    /// play (depth zero, game decided, no legal move). In that case `world`
    /// and the current board are left untouched.
    pub fn decide(
        &mut self,
        world: &mut WorldOf<S>,
        depth: u32,
        maximizing_player: PlayerId,
        use_pruning: bool,
    ) -> Result<Decision, SearchError> {
        let result = self.search(depth, maximizing_player, use_pruning)?;
        self.commit(world, result)
    }

    /// `decide` with the engine's configured parameters.
    pub fn decide_configured(&mut self, world: &mut WorldOf<S>) -> Result<Decision, SearchError> {
        let MinimaxConfig {
            depth,
            maximizing_player,
            use_pruning,
        } = self.config.clone();
        self.decide(world, depth, maximizing_player, use_pruning)
    }

    /// Apply a search result's chosen child to `world` and adopt it.
    ///
    /// The current board only changes once `Move::apply` has succeeded.
    pub fn commit(
        &mut self,
        world: &mut WorldOf<S>,
        result: SearchResult<S>,
    ) -> Result<Decision, SearchError> {
        let SearchResult { value, choice } = result;

        let child = match choice {
            Choice::Child(child) => child,
            Choice::Stay(reason) => {
                debug!("no move to play ({:?}), value {}", reason, value);
                return Ok(Decision::NoMove { value, reason });
            }
        };

        let producing_move = child
            .producing_move()
            .ok_or(SearchError::MissingProducingMove)?;
        if let Err(err) = producing_move.apply(world) {
            warn!("applying decided move failed: {}", err);
            return Err(SearchError::ApplyFailed(Box::new(err)));
        }

        debug!(
            "played move for {}, value {}",
            self.current_board.player_ply(),
            value
        );
        self.current_board = child;
        Ok(Decision::Played { value })
    }
}
