use anyhow::{Result, bail, ensure};
use std::hash::Hasher;
use twox_hash::XxHash64;

use snakeladder_game::constants::{START_TILE, WIN_TILE};
use snakeladder_game::{GameSession, GameStatus, LocalGame, MoveOutcome, RosterSetup, RuleKind};

pub const DEFAULT_TURN_CAP: usize = 1_000;

/// Configuration for one simulated game.
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub seed: u64,
    pub players: usize,
    pub turn_cap: usize,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(seed: u64, players: usize) -> Self {
        Self {
            seed,
            players,
            turn_cap: DEFAULT_TURN_CAP,
        }
    }

    #[must_use]
    pub const fn with_turn_cap(mut self, turn_cap: usize) -> Self {
        self.turn_cap = turn_cap;
        self
    }
}

/// Everything observed while playing one seeded game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub seed: u64,
    pub players: usize,
    pub turns: usize,
    pub winner_seat: Option<usize>,
    pub ladders: usize,
    pub snakes: usize,
    pub overshoots: usize,
    pub log_digest: u64,
    pub final_state: GameSession,
}

impl GameRecord {
    #[must_use]
    pub const fn finished(&self) -> bool {
        self.winner_seat.is_some()
    }
}

/// Play a full game from `config`, checking the board invariants after every
/// committed turn.
pub fn run_game(config: SimulationConfig) -> Result<GameRecord> {
    let mut game = LocalGame::with_seed(config.seed);
    game.start(&RosterSetup::new(config.players))?;

    let mut record = GameRecord {
        seed: config.seed,
        players: config.players,
        turns: 0,
        winner_seat: None,
        ladders: 0,
        snakes: 0,
        overshoots: 0,
        log_digest: 0,
        final_state: GameSession::default(),
    };

    while game.state().is_playing() {
        if record.turns >= config.turn_cap {
            bail!(
                "seed {} with {} players did not finish within {} turns",
                config.seed,
                config.players,
                config.turn_cap
            );
        }
        let before = game.state().clone();
        let outcome = game.roll()?;
        check_turn(&before, game.state(), &outcome)?;

        record.turns += 1;
        match outcome.hop_kind() {
            Some(RuleKind::Ladder) => record.ladders += 1,
            Some(RuleKind::Snake) => record.snakes += 1,
            None => {}
        }
        if outcome.is_overshoot() {
            record.overshoots += 1;
        }
        if outcome.is_win() {
            record.winner_seat = Some(outcome.player_index);
        }
    }

    let state = game.into_state();
    check_final(&state)?;
    record.log_digest = log_digest(&state)?;
    log::debug!(
        "seed {} finished in {} turns (winner seat {:?})",
        record.seed,
        record.turns,
        record.winner_seat
    );
    record.final_state = state;
    Ok(record)
}

fn check_turn(before: &GameSession, after: &GameSession, outcome: &MoveOutcome) -> Result<()> {
    let seat = before.current_player_index;
    ensure!(
        outcome.player_index == seat,
        "seat {} moved out of turn (expected seat {seat})",
        outcome.player_index
    );

    for (index, (old, new)) in before.players.iter().zip(&after.players).enumerate() {
        ensure!(
            (START_TILE..=WIN_TILE).contains(&new.position),
            "player {} left the board at {}",
            new.id,
            new.position
        );
        if index != seat {
            ensure!(
                old.position == new.position,
                "player {} moved on another player's turn",
                new.id
            );
        } else if new.position < old.position {
            ensure!(
                outcome.hop_kind() == Some(RuleKind::Snake),
                "player {} dropped from {} to {} without a snake",
                new.id,
                old.position,
                new.position
            );
        }
    }

    if outcome.is_win() {
        ensure!(
            after.status == GameStatus::Finished,
            "win did not finish the game"
        );
        ensure!(
            after.current_player_index == seat,
            "turn advanced after a win"
        );
    } else {
        let expected = (seat + 1) % before.players.len();
        ensure!(
            after.current_player_index == expected,
            "turn went to seat {} instead of {expected}",
            after.current_player_index
        );
    }
    Ok(())
}

fn check_final(state: &GameSession) -> Result<()> {
    let at_goal = state
        .players
        .iter()
        .filter(|p| p.position == WIN_TILE)
        .count();
    ensure!(at_goal == 1, "{at_goal} players finished on the win tile");
    let Some(winner) = state.winner() else {
        bail!("finished game has no winner");
    };
    ensure!(
        winner.position == WIN_TILE,
        "winner {} is on tile {}",
        winner.id,
        winner.position
    );
    Ok(())
}

pub fn log_digest(state: &GameSession) -> Result<u64> {
    let bytes = serde_json::to_vec(&state.log)?;
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(&bytes);
    Ok(hasher.finish())
}
