//! Shared-screen game wrapper around the engine, its session and a die.

use crate::dice::Dice;
use crate::error::EngineError;
use crate::player::RosterSetup;
use crate::state::GameSession;
use crate::turn::MoveOutcome;
use crate::GameEngine;

/// One shared-screen game: the engine, its session, and the die the players
/// take turns rolling.
#[derive(Debug, Clone)]
pub struct LocalGame {
    engine: GameEngine<'static>,
    session: GameSession,
    dice: Dice,
}

impl LocalGame {
    /// A game waiting in setup, rolling with `dice`.
    #[must_use]
    pub fn new(dice: Dice) -> Self {
        Self {
            engine: GameEngine::standard(),
            session: GameSession::default(),
            dice,
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Dice::from_seed(seed))
    }

    /// Unseeded game for casual play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(Dice::from_entropy())
    }

    /// Submit a roster and begin play.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRosterSize`] for fewer than 2 or more
    /// than 4 players.
    pub fn start(&mut self, setup: &RosterSetup) -> Result<(), EngineError> {
        let roster = setup.build()?;
        self.session = self.engine.start_game(roster)?;
        Ok(())
    }

    /// Roll for the current player and commit the whole turn.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotPlaying`] outside of play. The die is not
    /// rolled in that case.
    pub fn roll(&mut self) -> Result<MoveOutcome, EngineError> {
        if !self.session.is_playing() {
            return Err(EngineError::NotPlaying {
                status: self.session.status,
            });
        }
        let roll = self.dice.roll();
        self.engine.play_roll(&mut self.session, roll)
    }

    /// "Play Again" after a win.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoPlayers`] before any roster was submitted.
    pub fn play_again(&mut self) -> Result<(), EngineError> {
        self.engine.rematch(&mut self.session)
    }

    /// "Change Settings": back to setup for a new roster.
    pub fn change_settings(&mut self) {
        self.engine.new_game(&mut self.session);
    }

    #[must_use]
    pub const fn state(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn dice(&self) -> &Dice {
        &self.dice
    }

    #[must_use]
    pub const fn engine(&self) -> &GameEngine<'static> {
        &self.engine
    }

    #[must_use]
    pub fn into_state(self) -> GameSession {
        self.session
    }
}
