//! Game events and the human-readable log built from them.
//!
//! The engine records structured [`GameEvent`]s; the log panel shows their
//! rendered text in order. Each entry keeps a [`LogTone`] so the view can
//! highlight ladder, snake, and victory lines without parsing the message.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::WIN_TILE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    GameStarted,
    Rolled {
        player: String,
        roll: u8,
    },
    /// The roll would have carried the player past the win tile.
    Overshoot {
        player: String,
        stayed: u8,
    },
    ClimbedLadder {
        player: String,
        to: u8,
    },
    BittenBySnake {
        player: String,
        to: u8,
    },
    Won {
        player: String,
    },
    Restarted,
}

impl GameEvent {
    #[must_use]
    pub const fn tone(&self) -> LogTone {
        match self {
            Self::ClimbedLadder { .. } => LogTone::Ladder,
            Self::BittenBySnake { .. } => LogTone::Snake,
            Self::Won { .. } => LogTone::Victory,
            _ => LogTone::Neutral,
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameStarted => f.write_str("Game started!"),
            Self::Rolled { player, roll } => write!(f, "{player} rolled a {roll}."),
            Self::Overshoot { player, stayed } => {
                let needed = WIN_TILE.saturating_sub(*stayed);
                write!(f, "{player} needs exact {needed} to win. Stayed at {stayed}.")
            }
            Self::ClimbedLadder { player, to } => {
                write!(f, "🪜 {player} found a ladder! Climbing to {to}.")
            }
            Self::BittenBySnake { player, to } => {
                write!(f, "🐍 {player} bitten by a snake! Sliding down to {to}.")
            }
            Self::Won { player } => write!(f, "🎉 {player} WINS THE GAME!"),
            Self::Restarted => f.write_str("Game restarted!"),
        }
    }
}

/// Highlight hint for a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogTone {
    #[default]
    Neutral,
    Ladder,
    Snake,
    Victory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// One-based line number within the current game.
    pub seq: u32,
    pub tone: LogTone,
    pub message: String,
    pub event: GameEvent,
}

impl LogEntry {
    /// Line number padded to two digits, as the log panel prints it.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02}", self.seq)
    }
}

/// Append-only event log, cleared when a game (re)starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct GameLog {
    entries: Vec<LogEntry>,
}

impl GameLog {
    pub fn push(&mut self, event: GameEvent) {
        let seq = u32::try_from(self.entries.len() + 1).unwrap_or(u32::MAX);
        self.entries.push(LogEntry {
            seq,
            tone: event.tone(),
            message: event.to_string(),
            event,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.message.as_str())
    }

    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
