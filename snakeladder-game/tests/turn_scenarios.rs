use snakeladder_game::{
    EngineError, GameEngine, GameSession, GameStatus, LogTone, MoveResult, RosterSetup, RuleKind,
    RuleTable,
};

fn start(count: usize) -> (GameEngine<'static>, GameSession) {
    let engine = GameEngine::standard();
    let session = engine
        .start_game(RosterSetup::new(count).build().unwrap())
        .unwrap();
    (engine, session)
}

#[test]
fn two_players_overshoot_from_ninety_five() {
    let (engine, mut session) = start(2);
    session.players[0].position = 95;

    let outcome = engine.play_roll(&mut session, 6).unwrap();

    assert_eq!(outcome.result, MoveResult::Overshoot { needed: 5 });
    assert_eq!(session.players[0].position, 95);
    assert_eq!(session.current_player_index, 1);
    let last = session.log.last().unwrap();
    assert!(last.message.contains("needs exact 5 to win"));
}

#[test]
fn ladder_from_four_to_fourteen() {
    let (engine, mut session) = start(2);
    let log_before = session.log.len();

    let outcome = engine.play_roll(&mut session, 3).unwrap();

    assert_eq!(outcome.to, 14);
    assert_eq!(session.players[0].position, 14);
    assert_eq!(session.log.len() - log_before, 2);
    let tones: Vec<LogTone> = session.log.entries()[log_before..]
        .iter()
        .map(|e| e.tone)
        .collect();
    assert_eq!(tones, vec![LogTone::Neutral, LogTone::Ladder]);
    assert_eq!(session.current_player_index, 1);
}

#[test]
fn ladder_to_one_hundred_wins_at_once() {
    let (engine, mut session) = start(3);
    session.current_player_index = 2;
    session.players[2].position = 74;

    let outcome = engine.play_roll(&mut session, 6).unwrap();

    assert!(outcome.is_win());
    assert_eq!(outcome.hop_kind(), Some(RuleKind::Ladder));
    assert_eq!(session.status, GameStatus::Finished);
    assert_eq!(session.current_player_index, 2);
    assert_eq!(session.winner().map(|p| p.name.as_str()), Some("Player 3"));
    let messages: Vec<&str> = session.log_messages().collect();
    assert_eq!(
        messages[messages.len() - 3..],
        [
            "Player 3 rolled a 6.",
            "🪜 Player 3 found a ladder! Climbing to 100.",
            "🎉 Player 3 WINS THE GAME!",
        ]
    );
}

#[test]
fn snake_at_sixty_four_nets_zero() {
    let (engine, mut session) = start(2);
    session.players[0].position = 60;

    let outcome = engine.play_roll(&mut session, 4).unwrap();

    assert_eq!(outcome.landed, 64);
    assert_eq!(session.players[0].position, 60);
    assert_eq!(session.log.last().unwrap().tone, LogTone::Snake);
    assert_eq!(session.current_player_index, 1);
}

#[test]
fn four_player_turn_cycle() {
    let (engine, mut session) = start(4);
    // Rolls of 2 from tile 1 land on 3, a ladder; none of these can win.
    let mut order = Vec::new();
    for _ in 0..4 {
        order.push(session.current_player_index);
        engine.play_roll(&mut session, 2).unwrap();
    }
    order.push(session.current_player_index);
    assert_eq!(order, vec![0, 1, 2, 3, 0]);
}

#[test]
fn resolve_roll_alone_never_moves_the_turn() {
    let (engine, mut session) = start(2);
    for roll in 1..=6 {
        let outcome = engine.resolve_roll(&mut session, roll).unwrap();
        assert_eq!(session.current_player_index, 0);
        assert!(outcome.passes_turn());
    }
}

#[test]
fn win_is_signalled_iff_final_tile_is_one_hundred() {
    let engine = GameEngine::standard();
    let rules = RuleTable::standard();
    for from in 1..100u8 {
        for roll in 1..=6u8 {
            let mut session = engine
                .start_game(RosterSetup::new(2).build().unwrap())
                .unwrap();
            session.players[0].position = from;
            let outcome = engine.play_roll(&mut session, roll).unwrap();
            let position = session.players[0].position;
            assert_eq!(outcome.is_win(), position == 100, "from {from} roll {roll}");
            assert_eq!(session.is_finished(), position == 100);
            if from + roll <= 100 {
                let landed = from + roll;
                let expected = rules.lookup(landed).map_or(landed, |hit| hit.end());
                assert_eq!(position, expected);
            } else {
                assert_eq!(position, from);
            }
        }
    }
}

#[test]
fn rematch_after_win_restores_start_positions() {
    let (engine, mut session) = start(3);
    session.players[0].position = 99;
    session.players[1].position = 40;
    engine.play_roll(&mut session, 1).unwrap();
    assert!(session.is_finished());

    engine.rematch(&mut session).unwrap();

    assert_eq!(session.status, GameStatus::Playing);
    assert!(session.players.iter().all(|p| p.position == 1));
    assert!(session.winner().is_none());
}

#[test]
fn rolling_outside_play_is_rejected() {
    let engine = GameEngine::standard();
    let mut session = GameSession::default();
    assert!(matches!(
        engine.play_roll(&mut session, 3),
        Err(EngineError::NotPlaying {
            status: GameStatus::Setup
        })
    ));
}

#[test]
fn start_game_rejects_five_players() {
    let engine = GameEngine::standard();
    let mut roster = RosterSetup::new(4).build().unwrap();
    let mut extra = roster[0].clone();
    extra.id = 9;
    roster.push(extra);
    assert!(matches!(
        engine.start_game(roster),
        Err(EngineError::InvalidRosterSize { count: 5, .. })
    ));
}
