//! Snake & Ladder Game Engine
//!
//! Platform-agnostic turn engine for the classic Snake & Ladder board game.
//! This crate owns every rule (rolls, overshoot, snakes, ladders, wins, turn
//! order) and exposes plain data for whatever layer draws the board.

pub mod board;
pub mod constants;
pub mod dice;
pub mod error;
pub mod events;
pub mod local;
pub mod palette;
pub mod player;
pub mod rules;
pub mod state;
pub mod turn;

// Re-export commonly used types
pub use board::{BoardCell, cell_of, cells, tile_at, tile_label};
pub use dice::Dice;
pub use error::EngineError;
pub use events::{GameEvent, GameLog, LogEntry, LogTone};
pub use local::LocalGame;
pub use palette::{PALETTE, PlayerColor, color_for};
pub use player::{Player, RosterSetup, default_player_name};
pub use rules::{BoardRule, RuleHit, RuleKind, RuleTable, RuleTableError};
pub use state::{GameSession, GameStatus};
pub use turn::{MoveEvents, MoveOutcome, MoveResult};

use std::collections::HashSet;

use constants::START_TILE;

/// Rule engine bound to a validated rule table.
///
/// The engine holds no game state of its own; every operation acts on the
/// [`GameSession`] passed in and leaves it untouched when it returns an error.
#[derive(Debug, Clone, Copy)]
pub struct GameEngine<'r> {
    rules: &'r RuleTable,
}

impl Default for GameEngine<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameEngine<'static> {
    /// Engine over the classic board.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(RuleTable::standard())
    }
}

impl<'r> GameEngine<'r> {
    #[must_use]
    pub const fn new(rules: &'r RuleTable) -> Self {
        Self { rules }
    }

    #[must_use]
    pub const fn rules(&self) -> &'r RuleTable {
        self.rules
    }

    /// Start a game with `roster` in seat order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRosterSize`] for fewer than 2 or more
    /// than 4 players, [`EngineError::RosterNotAtStart`] when a player is not
    /// on tile 1, and [`EngineError::DuplicatePlayerId`] when ids repeat.
    pub fn start_game(&self, roster: Vec<Player>) -> Result<GameSession, EngineError> {
        player::check_roster_size(roster.len())?;
        let mut ids = HashSet::with_capacity(roster.len());
        for (index, player) in roster.iter().enumerate() {
            if player.position != START_TILE {
                return Err(EngineError::RosterNotAtStart {
                    index,
                    position: player.position,
                });
            }
            if !ids.insert(player.id) {
                return Err(EngineError::DuplicatePlayerId { id: player.id });
            }
        }

        let mut session = GameSession {
            status: GameStatus::Playing,
            players: roster,
            ..GameSession::default()
        };
        session.record(GameEvent::GameStarted);
        log::info!("game started with {} players", session.players.len());
        Ok(session)
    }

    /// Apply `roll` to the current player without advancing the turn.
    ///
    /// # Errors
    ///
    /// See [`turn::resolve_roll`].
    pub fn resolve_roll(
        &self,
        session: &mut GameSession,
        roll: u8,
    ) -> Result<MoveOutcome, EngineError> {
        turn::resolve_roll(self.rules, session, roll)
    }

    /// Pass the turn to the next seat, wrapping after the last player.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoPlayers`] for an empty roster.
    pub fn advance_turn(&self, session: &mut GameSession) -> Result<usize, EngineError> {
        let count = session.players.len();
        if count == 0 {
            return Err(EngineError::NoPlayers);
        }
        session.current_player_index = (session.current_player_index + 1) % count;
        Ok(session.current_player_index)
    }

    /// Finish the game in favour of the player at `player_index`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotPlaying`] unless the game is in progress and
    /// [`EngineError::PlayerOutOfRange`] for an unknown seat.
    pub fn declare_winner(
        &self,
        session: &mut GameSession,
        player_index: usize,
    ) -> Result<(), EngineError> {
        if !session.is_playing() {
            return Err(EngineError::NotPlaying {
                status: session.status,
            });
        }
        let Some(player) = session.players.get(player_index) else {
            return Err(EngineError::PlayerOutOfRange {
                index: player_index,
                count: session.players.len(),
            });
        };
        let (id, name) = (player.id, player.name.clone());
        session.status = GameStatus::Finished;
        session.winner = Some(id);
        session.record(GameEvent::Won {
            player: name.clone(),
        });
        log::info!("{name} won the game");
        Ok(())
    }

    /// Resolve a roll and commit the step that always follows it: the win
    /// declaration, or the turn advance.
    ///
    /// # Errors
    ///
    /// See [`turn::resolve_roll`].
    pub fn play_roll(
        &self,
        session: &mut GameSession,
        roll: u8,
    ) -> Result<MoveOutcome, EngineError> {
        let outcome = self.resolve_roll(session, roll)?;
        if outcome.is_win() {
            self.declare_winner(session, outcome.player_index)?;
        } else {
            self.advance_turn(session)?;
        }
        Ok(outcome)
    }

    /// Replay with the same roster: everyone back on tile 1, first seat to
    /// move, log restarted.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoPlayers`] when there is no roster to reuse.
    pub fn rematch(&self, session: &mut GameSession) -> Result<(), EngineError> {
        if session.players.is_empty() {
            return Err(EngineError::NoPlayers);
        }
        for player in &mut session.players {
            player.position = START_TILE;
        }
        session.status = GameStatus::Playing;
        session.current_player_index = 0;
        session.winner = None;
        session.last_roll = None;
        session.log.clear();
        session.record(GameEvent::Restarted);
        log::info!("rematch with {} players", session.players.len());
        Ok(())
    }

    /// Return to setup so a new roster can be collected.
    pub fn new_game(&self, session: &mut GameSession) {
        session.status = GameStatus::Setup;
        session.winner = None;
        log::info!("returned to setup");
    }
}
