use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::{PlayabilityAggregate, PlayabilityRecord, ScenarioResult};

#[allow(clippy::cast_precision_loss)]
fn success_rate(results: &[ScenarioResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    (passed as f64 / results.len() as f64) * 100.0
}

fn format_shares(shares: &[f64]) -> String {
    shares
        .iter()
        .enumerate()
        .map(|(seat, share)| format!("P{}: {:.0}%", seat + 1, share * 100.0))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    aggregates: &[PlayabilityAggregate],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Logic Test Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "==============================".cyan())?;

    let total_tests = results.len();
    let passed_tests = results.iter().filter(|r| r.passed).count();
    let failed_tests = total_tests - passed_tests;

    writeln!(out, "Total scenarios: {total_tests}")?;
    writeln!(out, "Passed: {}", passed_tests.to_string().green())?;
    writeln!(out, "Failed: {}", failed_tests.to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };

        writeln!(
            out,
            "{} {} ({} players, seed {})",
            status,
            result.scenario_name.bold(),
            result.players,
            result.seed
        )?;
        writeln!(
            out,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "   Average time: {:?}", result.average_duration)?;

        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }

    if !aggregates.is_empty() {
        writeln!(out, "{}", "🎲 Playability Summary".bright_yellow().bold())?;
        writeln!(out, "{}", "======================".yellow())?;
        for aggregate in aggregates {
            writeln!(
                out,
                "{} players over {} games: {:.1} turns avg (±{:.1}, {}..{})",
                aggregate.players,
                aggregate.games,
                aggregate.mean_turns,
                aggregate.std_turns,
                aggregate.min_turns,
                aggregate.max_turns
            )?;
            writeln!(
                out,
                "   Ladders {:.1} · Snakes {:.1} · Overshoots {:.1} per game",
                aggregate.mean_ladders, aggregate.mean_snakes, aggregate.mean_overshoots
            )?;
            writeln!(
                out,
                "   Wins by seat: {}",
                format_shares(&aggregate.seat_win_share)
            )?;
        }
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    writeln!(out, "# Snake & Ladder Logic Test Results\n")?;

    let total_tests = results.len();
    let passed_tests = results.iter().filter(|r| r.passed).count();

    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total scenarios**: {total_tests}")?;
    writeln!(out, "- **Passed**: {passed_tests}")?;
    writeln!(out, "- **Failed**: {}", total_tests - passed_tests)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(out, "## Detailed Results\n")?;

    for result in results {
        let status = if result.passed { "✅" } else { "❌" };

        writeln!(
            out,
            "### {} {} ({} players, seed {})\n",
            status, result.scenario_name, result.players, result.seed
        )?;
        writeln!(
            out,
            "- **Iterations**: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "- **Average time**: {:?}", result.average_duration)?;

        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn generate_csv_report(out: &mut dyn Write, records: &[PlayabilityRecord]) -> Result<()> {
    writeln!(out, "players,seed,turns,winner_seat,ladders,snakes,overshoots")?;
    for record in records {
        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            record.players,
            record.seed,
            record.turns,
            record.winner_seat + 1,
            record.ladders,
            record.snakes,
            record.overshoots
        )?;
    }
    Ok(())
}
