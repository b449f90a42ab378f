use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::events::{GameEvent, GameLog};
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Setup,
    Playing,
    Finished,
}

impl GameStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Playing => "playing",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "setup" => Ok(Self::Setup),
            "playing" => Ok(Self::Playing),
            "finished" => Ok(Self::Finished),
            _ => Err(()),
        }
    }
}

impl From<GameStatus> for String {
    fn from(value: GameStatus) -> Self {
        value.as_str().to_string()
    }
}

/// Canonical state of one game: the snapshot a renderer reads after every
/// engine call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GameSession {
    pub status: GameStatus,
    /// Turn order is seat order.
    pub players: Vec<Player>,
    pub current_player_index: usize,
    #[serde(default)]
    pub log: GameLog,
    /// Id of the player who reached the win tile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<u32>,
    /// Most recent committed die value, for the dice display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_roll: Option<u8>,
}

impl GameSession {
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    #[must_use]
    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self.status, GameStatus::Playing)
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished)
    }

    pub fn log_messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.log.messages()
    }

    pub(crate) fn record(&mut self, event: GameEvent) {
        self.log.push(event);
    }

    /// Load a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a session.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [GameStatus::Setup, GameStatus::Playing, GameStatus::Finished] {
            assert_eq!(status.as_str().parse::<GameStatus>(), Ok(status));
        }
        assert!("paused".parse::<GameStatus>().is_err());
        assert_eq!(String::from(GameStatus::Finished), "finished");
    }

    #[test]
    fn default_session_is_empty_setup() {
        let session = GameSession::default();
        assert_eq!(session.status, GameStatus::Setup);
        assert!(session.players.is_empty());
        assert!(session.current_player().is_none());
        assert!(session.winner().is_none());
        assert!(session.log.is_empty());
    }

    #[test]
    fn snapshot_serializes_for_renderer() {
        let mut session = GameSession {
            status: GameStatus::Playing,
            players: vec![Player::new(0, "Ada", 0), Player::new(1, "Leo", 1)],
            current_player_index: 1,
            ..GameSession::default()
        };
        session.record(GameEvent::GameStarted);

        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["status"], "playing");
        assert_eq!(value["current_player_index"], 1);
        assert_eq!(value["players"][1]["position"], 1);
        assert_eq!(value["log"][0]["message"], "Game started!");
        assert!(value.get("winner").is_none());

        let restored = GameSession::from_json(&value.to_string()).unwrap();
        assert_eq!(restored, session);
        assert_eq!(restored.current_player().map(|p| p.name.as_str()), Some("Leo"));
    }
}
