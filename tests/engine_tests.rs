//! Whole-engine scenarios driven through `GameState`

use tetrino::core::{dispatch, EngineEvent, GameState, Phase};
use tetrino::term::BoardCanvas;
use tetrino::types::{GameCommand, PieceColor, ShapeKind, COLUMNS, ROWS};

fn soft_drop_until_locked(game: &mut GameState) -> usize {
    let mut drops = 0;
    while game.phase() == Phase::PieceActive {
        game.apply(GameCommand::SoftDrop).unwrap();
        drops += 1;
    }
    drops
}

#[test]
fn test_i_piece_falls_to_floor() {
    let mut game = GameState::new(7);
    game.spawn(ShapeKind::I).unwrap();

    let mut applied = 0;
    for _ in 0..19 {
        if game.apply(GameCommand::SoftDrop).unwrap() {
            applied += 1;
        }
    }

    assert_eq!(applied, 16);
    assert_eq!(game.phase(), Phase::NoActivePiece);
    for row in 16..20 {
        assert_eq!(game.grid().get(row, 5), Ok(Some(PieceColor::Cyan)));
    }
    assert_eq!(game.grid().occupied_count(), 4);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_completing_bottom_row_clears_it() {
    let mut game = GameState::new(7);
    for col in 0..COLUMNS as i8 {
        if col != 5 {
            game.grid_mut().set(19, col, Some(PieceColor::Blue)).unwrap();
        }
    }
    game.grid_mut().set(18, 0, Some(PieceColor::Red)).unwrap();
    game.drain_events().for_each(drop);

    game.spawn(ShapeKind::I).unwrap();
    soft_drop_until_locked(&mut game);

    assert_eq!(game.score(), 10);
    // Former row 18 is now the bottom row.
    assert_eq!(game.grid().get(19, 0), Ok(Some(PieceColor::Red)));
    assert_eq!(game.grid().get(19, 5), Ok(Some(PieceColor::Cyan)));
    for col in [1, 2, 3, 4, 6, 7, 8, 9] {
        assert_eq!(game.grid().get(19, col), Ok(None), "col {}", col);
    }
    for row in [17, 18] {
        assert_eq!(game.grid().get(row, 5), Ok(Some(PieceColor::Cyan)));
    }
    assert_eq!(game.grid().get(16, 5), Ok(None));

    let events: Vec<_> = game.drain_events().collect();
    let locked = events
        .iter()
        .position(|ev| {
            *ev == EngineEvent::Locked {
                row: 16,
                col: 4,
                lines_cleared: 1,
            }
        })
        .unwrap();
    let scored = events
        .iter()
        .position(|ev| *ev == EngineEvent::ScoreChanged { total: 10 })
        .unwrap();
    // Lock comes first, then the sweep's score and redraw.
    assert!(locked < scored);
    assert!(events[locked + 1..]
        .iter()
        .all(|ev| !matches!(ev, EngineEvent::Locked { .. } | EngineEvent::Spawned { .. })));
}

#[test]
fn test_blocked_spawn_ends_game() {
    let mut game = GameState::new(99);
    // Every shape covers at least one of these at the spawn point.
    for col in 4..=6 {
        game.grid_mut().set(0, col, Some(PieceColor::Green)).unwrap();
    }
    game.drain_events().for_each(drop);

    assert_eq!(game.update(1000), Ok(1));
    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.game_over());

    let grid_before = game.grid().clone();
    assert_eq!(game.update(10_000), Ok(0));
    assert_eq!(game.apply(GameCommand::MoveLeft), Ok(false));
    assert_eq!(game.grid(), &grid_before);

    let game_overs = game
        .drain_events()
        .filter(|e| *e == EngineEvent::GameOver)
        .count();
    assert_eq!(game_overs, 1);
}

#[test]
fn test_spawn_already_resting_ends_game() {
    let mut game = GameState::new(1);
    game.grid_mut().set(4, 5, Some(PieceColor::Red)).unwrap();
    assert_eq!(game.spawn(ShapeKind::I), Ok(Phase::GameOver));
    assert!(game.active().is_none());
}

#[test]
fn test_commands_ignored_without_piece() {
    let mut game = GameState::new(1);
    for command in [
        GameCommand::MoveLeft,
        GameCommand::MoveRight,
        GameCommand::RotateCw,
        GameCommand::SoftDrop,
    ] {
        assert_eq!(game.apply(command), Ok(false));
    }
    assert_eq!(game.phase(), Phase::NoActivePiece);
}

#[test]
fn test_gravity_follows_drop_interval() {
    let mut game = GameState::with_drop_interval(3, 100);
    assert_eq!(game.update(99), Ok(0));
    assert_eq!(game.update(1), Ok(1));
    assert_eq!(game.phase(), Phase::PieceActive);
    assert_eq!(game.active().unwrap().row(), 0);

    assert_eq!(game.update(250), Ok(2));
    assert_eq!(game.active().unwrap().row(), 2);
}

#[test]
fn test_same_seed_same_game() {
    let run = |seed| {
        let mut game = GameState::with_drop_interval(seed, 10);
        let mut kinds = Vec::new();
        for _ in 0..400 {
            game.update(10).unwrap();
            for ev in game.drain_events() {
                if let EngineEvent::Spawned { kind } = ev {
                    kinds.push(kind);
                }
            }
        }
        (kinds, game.score(), game.grid().clone())
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn test_restart_after_game_over() {
    let mut game = GameState::new(5);
    game.grid_mut().set(4, 5, Some(PieceColor::Red)).unwrap();
    game.spawn(ShapeKind::I).unwrap();
    assert_eq!(game.phase(), Phase::GameOver);

    game.restart();
    assert_eq!(game.phase(), Phase::NoActivePiece);
    assert_eq!(game.grid().occupied_count(), 0);
    assert_eq!(game.update(1000), Ok(1));
    assert_eq!(game.phase(), Phase::PieceActive);
}

/// The canvas rebuilt from events always shows the grid plus the active piece.
#[test]
fn test_canvas_mirrors_engine_state() {
    let mut game = GameState::with_drop_interval(2024, 1);
    let mut canvas = BoardCanvas::new();
    let commands = [
        GameCommand::MoveLeft,
        GameCommand::RotateCw,
        GameCommand::MoveRight,
        GameCommand::MoveRight,
        GameCommand::SoftDrop,
    ];

    for step in 0..600usize {
        if step % 3 == 0 {
            game.apply(commands[step % commands.len()]).unwrap();
        } else {
            game.update(1).unwrap();
        }
        let events: Vec<_> = game.drain_events().collect();
        dispatch(&events, &mut canvas);

        // The rejected spawn is shown but never enters the grid.
        if game.game_over() {
            assert!(canvas.game_over());
            break;
        }

        for row in 0..ROWS as i8 {
            for col in 0..COLUMNS as i8 {
                let mut expected = game.grid().get(row, col).unwrap();
                if let Some(active) = game.active() {
                    if active.cells().any(|cell| cell == (row, col)) {
                        expected = Some(active.color());
                    }
                }
                assert_eq!(canvas.square(row, col), expected, "step {} ({}, {})", step, row, col);
            }
        }
        assert_eq!(canvas.score(), game.score());
        assert!(!canvas.game_over());
    }
}
