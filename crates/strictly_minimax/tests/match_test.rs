//! Tests for match orchestration and driver configuration.

use std::io::{Cursor, Write};
use strictly_minimax::{DriverConfig, EnginePlayer, GameEvent, HumanPlayer, Match};
use strictly_tictactoe::{Action, Board, Outcome, Player};

#[test]
fn test_engine_self_play_draws() {
    let mut game = Match::new(
        Box::new(EnginePlayer::new("Engine X")),
        Box::new(EnginePlayer::new("Engine O")),
    );
    let mut events = Vec::new();
    let outcome = game.run(|event| events.push(event.clone())).unwrap();

    assert_eq!(outcome, Outcome::Draw);
    let moves = events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveMade { .. }))
        .count();
    assert_eq!(moves, 9);
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            outcome: Outcome::Draw,
            winner: None,
        })
    );
}

#[test]
fn test_moves_alternate_marks() {
    let mut game = Match::new(
        Box::new(EnginePlayer::new("Engine X")),
        Box::new(EnginePlayer::new("Engine O")),
    );
    let mut marks = Vec::new();
    game.run(|event| {
        if let GameEvent::MoveMade { mark, .. } = event {
            marks.push(*mark);
        }
    })
    .unwrap();

    for (index, mark) in marks.iter().enumerate() {
        let expected = if index % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(*mark, expected);
    }
}

#[test]
fn test_engine_converts_winning_position() {
    // X X . / O . . / . . O, X to move
    let board: Board = "XX. O.. ..O".parse().unwrap();
    let mut game = Match::from_board(
        board,
        Box::new(EnginePlayer::new("Engine X")),
        Box::new(EnginePlayer::new("Engine O")),
    );
    let mut events = Vec::new();
    let outcome = game.run(|event| events.push(event.clone())).unwrap();

    assert_eq!(outcome, Outcome::XWins);
    assert!(events.contains(&GameEvent::MoveMade {
        name: "Engine X".to_string(),
        mark: Player::X,
        action: Action::new(0, 2),
    }));
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            outcome: Outcome::XWins,
            winner: Some("Engine X".to_string()),
        })
    );
}

#[test]
fn test_scripted_human_cannot_beat_engine() {
    // The human tries the corners in order; any cell already taken is
    // rejected and the next line is read.
    let script = "1\n3\n7\n9\n2\n4\n6\n8\n5\n".repeat(5);
    let human = HumanPlayer::new("Human", Cursor::new(script), std::io::sink());
    let mut game = Match::new(Box::new(human), Box::new(EnginePlayer::new("Engine")));

    let outcome = game.run(|_| {}).unwrap();
    assert_ne!(outcome, Outcome::XWins);
    assert!(outcome.is_over());
}

#[test]
fn test_human_running_out_of_input_fails_the_match() {
    let human = HumanPlayer::new("Human", Cursor::new("5\n"), std::io::sink());
    let mut game = Match::new(Box::new(human), Box::new(EnginePlayer::new("Engine")));

    assert!(game.run(|_| {}).is_err());
    // One human move and one engine reply were played before input ran out.
    assert_eq!(game.board().filled(), 2);
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human_mark = \"X\"\nshow_value = false\nlog_filter = \"debug\"").unwrap();

    let config = DriverConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.human_mark(), Player::X);
    assert!(!*config.show_value());
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = DriverConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, DriverConfig::default());
}

#[test]
fn test_invalid_config_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human_mark = \"Z\"").unwrap();

    let err = DriverConfig::load(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
