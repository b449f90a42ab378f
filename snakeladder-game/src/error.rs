use thiserror::Error;

use crate::rules::RuleTableError;
use crate::state::GameStatus;

/// Rejected engine calls. Every variant is a caller contract violation; the
/// session is left untouched when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("roster must have between {min} and {max} players (got {count})")]
    InvalidRosterSize { count: usize, min: usize, max: usize },
    #[error("player {index} does not start on tile 1 (at {position})")]
    RosterNotAtStart { index: usize, position: u8 },
    #[error("player id {id} appears more than once in the roster")]
    DuplicatePlayerId { id: u32 },
    #[error("operation requires a game in progress (status: {status})")]
    NotPlaying { status: GameStatus },
    #[error("session has no registered players")]
    NoPlayers,
    #[error("die roll must be between 1 and {faces} (got {roll})")]
    InvalidRoll { roll: u8, faces: u8 },
    #[error("player index {index} out of range for {count} players")]
    PlayerOutOfRange { index: usize, count: usize },
    #[error(transparent)]
    Rules(#[from] RuleTableError),
}
