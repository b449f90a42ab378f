use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "snakeladder-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_snakeladder-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("full-game"));
}

#[test]
fn cli_runs_all_scenarios_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_snakeladder-tester");
    let output_path = temp_path("run");
    let output = Command::new(exe)
        .args([
            "--report",
            "json",
            "--scenarios",
            "all",
            "--iterations",
            "2",
            "--seeds",
            "1,0x2a",
            "--players",
            "2,4",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Snake & Ladder Automated Tester"));

    let content = std::fs::read_to_string(output_path).expect("read output");
    let json_end = content.rfind(']').expect("json array");
    let results: serde_json::Value =
        serde_json::from_str(&content[..=json_end]).expect("parse report");
    let results = results.as_array().expect("array");
    // five scenarios over two seeds and two table sizes
    assert_eq!(results.len(), 20);
    assert!(results.iter().all(|r| r["passed"] == true));
}

#[test]
fn cli_csv_report_lists_games() {
    let exe = env!("CARGO_BIN_EXE_snakeladder-tester");
    let output_path = temp_path("csv");
    let status = Command::new(exe)
        .args([
            "--report",
            "csv",
            "--iterations",
            "3",
            "--players",
            "3",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("players,seed,turns,winner_seat,ladders,snakes,overshoots")
    );
    assert_eq!(lines.count(), 3);
}

#[test]
fn cli_rejects_bad_player_counts() {
    let exe = env!("CARGO_BIN_EXE_snakeladder-tester");
    let output = Command::new(exe)
        .args(["--players", "5"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}
