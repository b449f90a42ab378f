use anyhow::{Result, ensure};

use snakeladder_game::constants::START_TILE;
use snakeladder_game::{GameStatus, LocalGame, RosterSetup, RuleTable};

use crate::logic::simulation::{SimulationConfig, run_game};

type ScenarioCheck = fn(SimulationConfig) -> Result<()>;

/// A named check run once per seed and iteration.
#[derive(Clone)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub check: ScenarioCheck,
}

impl std::fmt::Debug for TestScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestScenario")
            .field("key", &self.key)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

pub fn catalog() -> Vec<TestScenario> {
    vec![
        TestScenario {
            key: "smoke",
            name: "Smoke",
            description: "Start a game, roll once, snapshot stays consistent",
            check: smoke,
        },
        TestScenario {
            key: "full-game",
            name: "Full Game",
            description: "Play a seeded game to a win, checking invariants every turn",
            check: full_game,
        },
        TestScenario {
            key: "rematch",
            name: "Rematch",
            description: "Finish, rematch, and confirm the reset keeps the roster",
            check: rematch,
        },
        TestScenario {
            key: "deterministic-replay",
            name: "Deterministic Replay",
            description: "The same seed produces an identical game log",
            check: deterministic_replay,
        },
        TestScenario {
            key: "rule-table",
            name: "Rule Table",
            description: "Classic ladders and snakes satisfy the board invariants",
            check: rule_table,
        },
    ]
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog()
        .into_iter()
        .map(|scenario| (scenario.key, scenario.description))
        .collect()
}

pub fn get_scenario(key: &str) -> Option<TestScenario> {
    catalog().into_iter().find(|scenario| scenario.key == key)
}

pub fn all_keys() -> Vec<String> {
    catalog()
        .into_iter()
        .map(|scenario| scenario.key.to_string())
        .collect()
}

fn smoke(config: SimulationConfig) -> Result<()> {
    let mut game = LocalGame::with_seed(config.seed);
    game.start(&RosterSetup::new(config.players))?;
    ensure!(game.state().log.len() == 1, "start should log exactly once");

    let outcome = game.roll()?;
    let state = game.state();
    ensure!(
        state.last_roll == Some(outcome.roll),
        "dice display out of sync"
    );
    ensure!(
        state.players[0].position == outcome.to,
        "token not moved to resolved tile"
    );
    ensure!(state.current_player_index == 1, "turn did not pass");
    let snapshot = serde_json::to_value(state)?;
    ensure!(snapshot["status"] == "playing", "snapshot status mismatch");
    Ok(())
}

fn full_game(config: SimulationConfig) -> Result<()> {
    let record = run_game(config)?;
    ensure!(record.finished(), "game ended without a winner");
    ensure!(
        record.final_state.status == GameStatus::Finished,
        "final snapshot is {}",
        record.final_state.status
    );
    Ok(())
}

fn rematch(config: SimulationConfig) -> Result<()> {
    let mut game = LocalGame::with_seed(config.seed);
    game.start(&RosterSetup::new(config.players))?;
    let mut turns = 0;
    while game.state().is_playing() && turns < config.turn_cap {
        game.roll()?;
        turns += 1;
    }
    ensure!(game.state().is_finished(), "game did not finish");
    let roster_before: Vec<(u32, String)> = game
        .state()
        .players
        .iter()
        .map(|p| (p.id, p.name.clone()))
        .collect();

    game.play_again()?;

    let state = game.state();
    ensure!(state.status == GameStatus::Playing, "rematch not playing");
    ensure!(
        state.players.iter().all(|p| p.position == START_TILE),
        "rematch left tokens off the start tile"
    );
    ensure!(state.winner.is_none(), "rematch kept the winner");
    ensure!(state.current_player_index == 0, "rematch did not reset turn");
    let roster_after: Vec<(u32, String)> = state
        .players
        .iter()
        .map(|p| (p.id, p.name.clone()))
        .collect();
    ensure!(roster_before == roster_after, "rematch changed the roster");
    Ok(())
}

fn deterministic_replay(config: SimulationConfig) -> Result<()> {
    let first = run_game(config)?;
    let second = run_game(config)?;
    ensure!(
        first.log_digest == second.log_digest,
        "log digest {:016x} != {:016x}",
        first.log_digest,
        second.log_digest
    );
    ensure!(first.turns == second.turns, "turn counts diverged");
    Ok(())
}

fn rule_table(_config: SimulationConfig) -> Result<()> {
    let table = RuleTable::standard();
    let rebuilt = RuleTable::new(table.ladders(), table.snakes())?;
    ensure!(&rebuilt == table, "classic table does not rebuild");
    for hit in table.iter() {
        ensure!(
            hit.rule.kind() == hit.kind,
            "rule {}->{} filed under the wrong kind",
            hit.rule.start,
            hit.rule.end
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_passes_for_a_sample_seed() {
        for scenario in catalog() {
            for players in 2..=4 {
                let result = (scenario.check)(SimulationConfig::new(42, players));
                assert!(result.is_ok(), "{}: {:?}", scenario.key, result);
            }
        }
    }

    #[test]
    fn lookup_by_key() {
        assert!(get_scenario("full-game").is_some());
        assert!(get_scenario("missing").is_none());
        assert_eq!(all_keys().len(), list_scenarios().len());
    }
}
