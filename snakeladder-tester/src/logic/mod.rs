pub mod playability;
pub mod reports;
pub mod scenarios;
pub mod seeds;
pub mod simulation;
pub mod tester;

pub use playability::{
    PlayabilityAggregate, PlayabilityRecord, aggregate_playability, run_playability_analysis,
};
pub use scenarios::{all_keys, get_scenario, list_scenarios};
pub use seeds::{resolve_player_counts, resolve_seed_inputs};
pub use tester::*;
