//! Snake and ladder rule table.
//!
//! The table is immutable once built. [`RuleTable::new`] refuses any layout
//! that breaks the board invariants, so the resolver can rely on a single
//! exact-match hop per landing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

use crate::constants::{BOARD_SIZE, CLASSIC_LADDERS, CLASSIC_SNAKES, START_TILE, WIN_TILE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Ladder,
    Snake,
}

impl RuleKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ladder => "ladder",
            Self::Snake => "snake",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transition: landing exactly on `start` moves the token to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardRule {
    pub start: u8,
    pub end: u8,
}

impl BoardRule {
    #[must_use]
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Direction of travel. A zero-length rule reads as a snake; validation
    /// rejects it either way.
    #[must_use]
    pub const fn kind(self) -> RuleKind {
        if self.end > self.start {
            RuleKind::Ladder
        } else {
            RuleKind::Snake
        }
    }
}

/// Result of a table lookup: which rule fired and where it leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    pub kind: RuleKind,
    pub rule: BoardRule,
}

impl RuleHit {
    #[must_use]
    pub const fn end(self) -> u8 {
        self.rule.end
    }
}

/// Errors raised when a rule layout violates the board invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleTableError {
    #[error("{kind} {start}->{end} leaves the board")]
    OffBoard { kind: RuleKind, start: u8, end: u8 },
    #[error("ladder {start}->{end} does not climb")]
    LadderDoesNotClimb { start: u8, end: u8 },
    #[error("snake {start}->{end} does not descend")]
    SnakeDoesNotDescend { start: u8, end: u8 },
    #[error("{kind} starts on reserved tile {tile}")]
    ReservedStart { kind: RuleKind, tile: u8 },
    #[error("{kind} {start}->{end} ends on the start tile")]
    EndsOnStartTile { kind: RuleKind, start: u8, end: u8 },
    #[error("tile {tile} starts more than one rule")]
    DuplicateStart { tile: u8 },
}

/// Validated ladder and snake layout keyed by start tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleTable {
    ladders: Vec<BoardRule>,
    snakes: Vec<BoardRule>,
    #[serde(skip)]
    by_start: BTreeMap<u8, RuleHit>,
}

impl RuleTable {
    /// Build a table from explicit ladder and snake lists.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuleTableError`] found: a rule off the board, a
    /// ladder that does not climb, a snake that does not descend, a rule
    /// starting on tile 1 or 100, a rule ending on tile 1, or two rules
    /// sharing a start tile. A descending snake that cannot start on the win
    /// tile can never end on it.
    pub fn new(ladders: &[BoardRule], snakes: &[BoardRule]) -> Result<Self, RuleTableError> {
        let mut by_start = BTreeMap::new();
        let tagged = ladders
            .iter()
            .map(|rule| (RuleKind::Ladder, *rule))
            .chain(snakes.iter().map(|rule| (RuleKind::Snake, *rule)));

        for (kind, rule) in tagged {
            validate_rule(kind, rule)?;
            if by_start.insert(rule.start, RuleHit { kind, rule }).is_some() {
                return Err(RuleTableError::DuplicateStart { tile: rule.start });
            }
        }

        Ok(Self {
            ladders: ladders.to_vec(),
            snakes: snakes.to_vec(),
            by_start,
        })
    }

    /// The classic layout, built and validated once per process.
    #[must_use]
    pub fn standard() -> &'static Self {
        static CLASSIC: OnceLock<RuleTable> = OnceLock::new();
        CLASSIC.get_or_init(Self::load_classic)
    }

    fn load_classic() -> Self {
        let ladders = CLASSIC_LADDERS.map(|(start, end)| BoardRule::new(start, end));
        let snakes = CLASSIC_SNAKES.map(|(start, end)| BoardRule::new(start, end));
        Self::new(&ladders, &snakes).expect("classic rule table is valid")
    }

    /// Exact-match lookup on the start tile.
    #[must_use]
    pub fn lookup(&self, tile: u8) -> Option<RuleHit> {
        self.by_start.get(&tile).copied()
    }

    #[must_use]
    pub fn ladders(&self) -> &[BoardRule] {
        &self.ladders
    }

    #[must_use]
    pub fn snakes(&self) -> &[BoardRule] {
        &self.snakes
    }

    /// All rules in ascending start order.
    pub fn iter(&self) -> impl Iterator<Item = RuleHit> + '_ {
        self.by_start.values().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_start.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_start.is_empty()
    }
}

fn validate_rule(kind: RuleKind, rule: BoardRule) -> Result<(), RuleTableError> {
    let BoardRule { start, end } = rule;
    let on_board = |tile: u8| (START_TILE..=BOARD_SIZE).contains(&tile);
    if !on_board(start) || !on_board(end) {
        return Err(RuleTableError::OffBoard { kind, start, end });
    }
    match kind {
        RuleKind::Ladder if end <= start => {
            return Err(RuleTableError::LadderDoesNotClimb { start, end });
        }
        RuleKind::Snake if end >= start => {
            return Err(RuleTableError::SnakeDoesNotDescend { start, end });
        }
        _ => {}
    }
    if start == START_TILE || start == WIN_TILE {
        return Err(RuleTableError::ReservedStart { kind, tile: start });
    }
    if end == START_TILE {
        return Err(RuleTableError::EndsOnStartTile { kind, start, end });
    }
    Ok(())
}
