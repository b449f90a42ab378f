//! Move resolution for a single die roll.
//!
//! [`resolve_roll`] moves the acting player and writes the log lines for the
//! move. It never touches the turn index or the game status; the caller
//! follows up with either a turn advance or a winner declaration.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{DIE_FACES, WIN_TILE};
use crate::error::EngineError;
use crate::events::GameEvent;
use crate::rules::{RuleHit, RuleKind, RuleTable};
use crate::state::{GameSession, GameStatus};

/// Events emitted by one roll: the roll itself plus at most one follow-up.
pub type MoveEvents = SmallVec<[GameEvent; 2]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveResult {
    /// The player moved (possibly through a rule); the turn passes.
    Moved,
    /// The roll would pass the win tile; the player stays and the turn passes.
    Overshoot { needed: u8 },
    /// The player reached the win tile.
    Won,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub player_index: usize,
    pub player_id: u32,
    pub roll: u8,
    pub from: u8,
    /// Tile reached by the roll alone, before any rule; equals `from` on an
    /// overshoot.
    pub landed: u8,
    /// Final tile after any snake or ladder.
    pub to: u8,
    pub hop: Option<RuleHit>,
    pub result: MoveResult,
    pub events: MoveEvents,
}

impl MoveOutcome {
    #[must_use]
    pub const fn passes_turn(&self) -> bool {
        !self.is_win()
    }

    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.result, MoveResult::Won)
    }

    #[must_use]
    pub const fn is_overshoot(&self) -> bool {
        matches!(self.result, MoveResult::Overshoot { .. })
    }

    #[must_use]
    pub fn hop_kind(&self) -> Option<RuleKind> {
        self.hop.map(|hit| hit.kind)
    }
}

/// Resolve `roll` for the player whose turn it is.
///
/// # Errors
///
/// Returns [`EngineError::NotPlaying`] unless the session is in progress,
/// [`EngineError::NoPlayers`] for an empty roster,
/// [`EngineError::PlayerOutOfRange`] when the turn index is stale, and
/// [`EngineError::InvalidRoll`] for values outside `1..=6`. The session is
/// unchanged on error.
pub fn resolve_roll(
    rules: &RuleTable,
    session: &mut GameSession,
    roll: u8,
) -> Result<MoveOutcome, EngineError> {
    if session.status != GameStatus::Playing {
        return Err(EngineError::NotPlaying {
            status: session.status,
        });
    }
    if session.players.is_empty() {
        return Err(EngineError::NoPlayers);
    }
    if !(1..=DIE_FACES).contains(&roll) {
        return Err(EngineError::InvalidRoll {
            roll,
            faces: DIE_FACES,
        });
    }
    let player_index = session.current_player_index;
    let count = session.players.len();
    let Some(player) = session.players.get_mut(player_index) else {
        return Err(EngineError::PlayerOutOfRange {
            index: player_index,
            count,
        });
    };

    let from = player.position;
    let tentative = u16::from(from) + u16::from(roll);
    let mut events = MoveEvents::new();
    events.push(GameEvent::Rolled {
        player: player.name.clone(),
        roll,
    });

    let mut outcome = MoveOutcome {
        player_index,
        player_id: player.id,
        roll,
        from,
        landed: from,
        to: from,
        hop: None,
        result: MoveResult::Moved,
        events: MoveEvents::new(),
    };

    if tentative > u16::from(WIN_TILE) {
        events.push(GameEvent::Overshoot {
            player: player.name.clone(),
            stayed: from,
        });
        outcome.result = MoveResult::Overshoot {
            needed: WIN_TILE.saturating_sub(from),
        };
    } else {
        // tentative <= WIN_TILE, so it fits in a tile.
        let landed = u8::try_from(tentative).unwrap_or(WIN_TILE);
        outcome.landed = landed;
        let mut to = landed;
        if landed != WIN_TILE
            && let Some(hit) = rules.lookup(landed)
        {
            to = hit.end();
            outcome.hop = Some(hit);
            events.push(match hit.kind {
                RuleKind::Ladder => GameEvent::ClimbedLadder {
                    player: player.name.clone(),
                    to,
                },
                RuleKind::Snake => GameEvent::BittenBySnake {
                    player: player.name.clone(),
                    to,
                },
            });
        }
        player.position = to;
        outcome.to = to;
        if to == WIN_TILE {
            outcome.result = MoveResult::Won;
        }
    }

    for event in &events {
        session.record(event.clone());
    }
    session.last_roll = Some(roll);
    outcome.events = events;

    log::debug!(
        "player {} rolled {}: {} -> {} ({:?})",
        outcome.player_id,
        roll,
        outcome.from,
        outcome.to,
        outcome.result
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::LogTone;
    use crate::player::Player;
    use crate::rules::BoardRule;

    fn playing(positions: &[u8]) -> GameSession {
        let players = positions
            .iter()
            .enumerate()
            .map(|(seat, &position)| {
                let mut player = Player::new(seat as u32, format!("P{}", seat + 1), seat);
                player.position = position;
                player
            })
            .collect();
        GameSession {
            status: GameStatus::Playing,
            players,
            ..GameSession::default()
        }
    }

    #[test]
    fn overshoot_keeps_position_and_reports_exact_need() {
        let mut session = playing(&[95, 1]);
        let outcome = resolve_roll(RuleTable::standard(), &mut session, 6).unwrap();
        assert_eq!(outcome.result, MoveResult::Overshoot { needed: 5 });
        assert!(outcome.passes_turn());
        assert_eq!(outcome.to, 95);
        assert_eq!(session.players[0].position, 95);
        let messages: Vec<&str> = session.log_messages().collect();
        assert_eq!(
            messages,
            vec!["P1 rolled a 6.", "P1 needs exact 5 to win. Stayed at 95."]
        );
    }

    #[test]
    fn ladder_climb_emits_roll_and_climb() {
        let mut session = playing(&[1, 1]);
        let outcome = resolve_roll(RuleTable::standard(), &mut session, 3).unwrap();
        assert_eq!(outcome.landed, 4);
        assert_eq!(outcome.to, 14);
        assert_eq!(outcome.hop_kind(), Some(RuleKind::Ladder));
        assert_eq!(outcome.result, MoveResult::Moved);
        assert_eq!(outcome.events.len(), 2);
        assert_eq!(session.log.len(), 2);
        assert_eq!(session.log.last().unwrap().tone, LogTone::Ladder);
        assert_eq!(session.current_player_index, 0);
    }

    #[test]
    fn winning_ladder_wins_immediately() {
        let mut session = playing(&[74, 1]);
        let outcome = resolve_roll(RuleTable::standard(), &mut session, 6).unwrap();
        assert_eq!(outcome.landed, 80);
        assert_eq!(outcome.to, 100);
        assert!(outcome.is_win());
        assert!(!outcome.passes_turn());
        assert_eq!(session.players[0].position, 100);
    }

    #[test]
    fn exact_roll_onto_win_tile_skips_lookup() {
        let mut session = playing(&[97, 1]);
        let outcome = resolve_roll(RuleTable::standard(), &mut session, 3).unwrap();
        assert!(outcome.is_win());
        assert!(outcome.hop.is_none());
        assert_eq!(outcome.events.len(), 1);
    }

    #[test]
    fn snake_bite_can_net_zero() {
        let mut session = playing(&[60, 1]);
        let outcome = resolve_roll(RuleTable::standard(), &mut session, 4).unwrap();
        assert_eq!(outcome.landed, 64);
        assert_eq!(outcome.to, 60);
        assert_eq!(outcome.hop_kind(), Some(RuleKind::Snake));
        assert!(outcome.passes_turn());
        assert!(session.log.last().unwrap().message.contains("bitten by a snake"));
    }

    #[test]
    fn sweep_matches_rule_image_and_overshoot() {
        let rules = RuleTable::standard();
        for from in 1..=WIN_TILE {
            for roll in 1..=DIE_FACES {
                let mut session = playing(&[from, 1]);
                let outcome = resolve_roll(rules, &mut session, roll).unwrap();
                let tentative = u16::from(from) + u16::from(roll);
                let position = session.players[0].position;
                if tentative > u16::from(WIN_TILE) {
                    assert_eq!(position, from);
                    assert!(outcome.passes_turn());
                } else {
                    let landed = tentative as u8;
                    let expected = rules.lookup(landed).map_or(landed, RuleHit::end);
                    assert_eq!(position, expected, "from {from} roll {roll}");
                }
                if !outcome.is_overshoot() {
                    assert_eq!(outcome.is_win(), position == WIN_TILE);
                }
                assert!(position <= WIN_TILE);
                if position < from {
                    assert_eq!(outcome.hop_kind(), Some(RuleKind::Snake));
                }
            }
        }
    }

    #[test]
    fn rejects_calls_outside_play() {
        let mut session = playing(&[1, 1]);
        session.status = GameStatus::Finished;
        let before = session.clone();
        let err = resolve_roll(RuleTable::standard(), &mut session, 3).unwrap_err();
        assert_eq!(
            err,
            EngineError::NotPlaying {
                status: GameStatus::Finished
            }
        );
        assert_eq!(session, before);
    }

    #[test]
    fn rejects_empty_roster_and_bad_rolls() {
        let mut empty = GameSession {
            status: GameStatus::Playing,
            ..GameSession::default()
        };
        assert_eq!(
            resolve_roll(RuleTable::standard(), &mut empty, 2),
            Err(EngineError::NoPlayers)
        );

        let mut session = playing(&[1, 1]);
        for roll in [0, 7] {
            let err = resolve_roll(RuleTable::standard(), &mut session, roll).unwrap_err();
            assert!(matches!(err, EngineError::InvalidRoll { .. }));
        }
        assert!(session.log.is_empty());

        session.current_player_index = 5;
        let err = resolve_roll(RuleTable::standard(), &mut session, 2).unwrap_err();
        assert_eq!(err, EngineError::PlayerOutOfRange { index: 5, count: 2 });
    }

    #[test]
    fn custom_table_rule_is_followed_once() {
        // 10 -> 30 and 30 -> 50 chained; only the first hop applies.
        let ladders = [BoardRule::new(10, 30), BoardRule::new(30, 50)];
        let rules = RuleTable::new(&ladders, &[]).unwrap();
        let mut session = playing(&[8, 1]);
        let outcome = resolve_roll(&rules, &mut session, 2).unwrap();
        assert_eq!(outcome.to, 30);
    }
}
