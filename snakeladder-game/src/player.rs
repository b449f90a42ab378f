//! Players and roster submission.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_PLAYERS, MIN_PLAYERS, START_TILE};
use crate::error::EngineError;
use crate::palette::{self, PlayerColor};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique within a session; seat index for rosters built by [`RosterSetup`].
    pub id: u32,
    pub name: String,
    /// Index into [`palette::PALETTE`].
    pub color_index: usize,
    pub position: u8,
}

impl Player {
    /// A player placed on the start tile.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, color_index: usize) -> Self {
        Self {
            id,
            name: name.into(),
            color_index,
            position: START_TILE,
        }
    }

    #[must_use]
    pub fn color(&self) -> Option<&'static PlayerColor> {
        palette::color_for(self.color_index)
    }

    /// First letter of the name, shown inside the token.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

#[must_use]
pub fn default_player_name(seat: usize) -> String {
    format!("Player {}", seat + 1)
}

/// Roster as submitted by the setup form: a player count and names by seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSetup {
    #[serde(default = "RosterSetup::default_player_count")]
    pub player_count: usize,
    #[serde(default)]
    pub names: Vec<String>,
}

impl Default for RosterSetup {
    fn default() -> Self {
        Self {
            player_count: Self::default_player_count(),
            names: Vec::new(),
        }
    }
}

impl RosterSetup {
    const fn default_player_count() -> usize {
        MIN_PLAYERS
    }

    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            names: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a roster submission from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a roster.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build the ordered player list. Blank or missing names fall back to
    /// `"Player N"`; colours follow seat order. Extra names are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRosterSize`] when the count is outside
    /// 2..=4.
    pub fn build(&self) -> Result<Vec<Player>, EngineError> {
        check_roster_size(self.player_count)?;
        let players = (0..self.player_count)
            .map(|seat| {
                let name = self
                    .names
                    .get(seat)
                    .map(|n| n.trim())
                    .filter(|n| !n.is_empty())
                    .map_or_else(|| default_player_name(seat), str::to_string);
                let id = u32::try_from(seat).unwrap_or(u32::MAX);
                Player::new(id, name, seat)
            })
            .collect();
        Ok(players)
    }
}

pub(crate) fn check_roster_size(count: usize) -> Result<(), EngineError> {
    if count < MIN_PLAYERS || count > MAX_PLAYERS {
        return Err(EngineError::InvalidRosterSize {
            count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        });
    }
    Ok(())
}
