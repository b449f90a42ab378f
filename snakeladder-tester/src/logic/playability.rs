use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::logic::simulation::{GameRecord, SimulationConfig, run_game};

/// One finished game, reduced to the numbers the reports care about.
#[derive(Debug, Clone, Serialize)]
pub struct PlayabilityRecord {
    pub players: usize,
    pub seed: u64,
    pub turns: usize,
    pub winner_seat: usize,
    pub ladders: usize,
    pub snakes: usize,
    pub overshoots: usize,
}

impl PlayabilityRecord {
    fn from_game(record: &GameRecord) -> Option<Self> {
        Some(Self {
            players: record.players,
            seed: record.seed,
            turns: record.turns,
            winner_seat: record.winner_seat?,
            ladders: record.ladders,
            snakes: record.snakes,
            overshoots: record.overshoots,
        })
    }
}

/// Per-table-size summary across every seed and iteration.
#[derive(Debug, Clone, Serialize)]
pub struct PlayabilityAggregate {
    pub players: usize,
    pub games: usize,
    pub mean_turns: f64,
    pub std_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub mean_ladders: f64,
    pub mean_snakes: f64,
    pub mean_overshoots: f64,
    /// Share of games won from each seat, indexed by seat.
    pub seat_win_share: Vec<f64>,
}

pub fn run_playability_analysis(
    seeds: &[u64],
    player_counts: &[usize],
    iterations: usize,
    turn_cap: usize,
) -> Result<Vec<PlayabilityRecord>> {
    let iterations = iterations.max(1);
    let mut records = Vec::with_capacity(seeds.len() * player_counts.len() * iterations);

    for &players in player_counts {
        for &seed in seeds {
            for iteration in 0..iterations {
                let iteration_offset = u64::try_from(iteration).unwrap_or(0);
                let config = SimulationConfig::new(seed.wrapping_add(iteration_offset), players)
                    .with_turn_cap(turn_cap);
                let game = run_game(config)?;
                if let Some(record) = PlayabilityRecord::from_game(&game) {
                    records.push(record);
                }
            }
        }
    }

    Ok(records)
}

pub fn aggregate_playability(records: &[PlayabilityRecord]) -> Vec<PlayabilityAggregate> {
    let mut builders: BTreeMap<usize, AggregateBuilder> = BTreeMap::new();
    for record in records {
        builders
            .entry(record.players)
            .or_insert_with(|| AggregateBuilder::new(record.players))
            .ingest(record);
    }
    builders
        .into_values()
        .map(AggregateBuilder::finish)
        .collect()
}

#[derive(Debug, Clone)]
struct AggregateBuilder {
    players: usize,
    turns: RunningStats,
    min_turns: usize,
    max_turns: usize,
    ladders: RunningStats,
    snakes: RunningStats,
    overshoots: RunningStats,
    seat_wins: Vec<u32>,
}

impl AggregateBuilder {
    fn new(players: usize) -> Self {
        Self {
            players,
            turns: RunningStats::default(),
            min_turns: usize::MAX,
            max_turns: 0,
            ladders: RunningStats::default(),
            snakes: RunningStats::default(),
            overshoots: RunningStats::default(),
            seat_wins: vec![0; players],
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn ingest(&mut self, record: &PlayabilityRecord) {
        self.turns.add(record.turns as f64);
        self.min_turns = self.min_turns.min(record.turns);
        self.max_turns = self.max_turns.max(record.turns);
        self.ladders.add(record.ladders as f64);
        self.snakes.add(record.snakes as f64);
        self.overshoots.add(record.overshoots as f64);
        if let Some(wins) = self.seat_wins.get_mut(record.winner_seat) {
            *wins += 1;
        }
    }

    fn finish(self) -> PlayabilityAggregate {
        let games = self.turns.count;
        let seat_win_share = self
            .seat_wins
            .iter()
            .map(|&wins| {
                if games == 0 {
                    0.0
                } else {
                    f64::from(wins) / f64::from(games)
                }
            })
            .collect();
        PlayabilityAggregate {
            players: self.players,
            games: games as usize,
            mean_turns: self.turns.mean(),
            std_turns: self.turns.std_dev(),
            min_turns: if games == 0 { 0 } else { self.min_turns },
            max_turns: self.max_turns,
            mean_ladders: self.ladders.mean(),
            mean_snakes: self.snakes.mean(),
            mean_overshoots: self.overshoots.mean(),
            seat_win_share,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct RunningStats {
    count: u32,
    mean: f64,
    m2: f64,
}

impl RunningStats {
    fn add(&mut self, value: f64) {
        self.count += 1;
        let count = f64::from(self.count);
        let delta = value - self.mean;
        self.mean += delta / count;
        self.m2 += delta * (value - self.mean);
    }

    const fn mean(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.mean }
    }

    fn std_dev(&self) -> f64 {
        if self.count > 1 {
            (self.m2 / f64::from(self.count - 1)).sqrt()
        } else {
            0.0
        }
    }
}
