//! Engine scenarios - spawning, gravity, clears, rotation and game over

use tui_blockfall::core::{
    EngineConfig, EngineState, GameEngine, GravityClock, Position, SimpleRng, TickOutcome,
};
use tui_blockfall::types::{GameAction, PieceKind, Rgb};

const GRAY: Rgb = Rgb::new(128, 128, 128);

fn engine() -> GameEngine {
    GameEngine::new(EngineConfig::default()).unwrap()
}

#[test]
fn test_first_tick_spawns_at_top_center() {
    let mut engine = engine();
    assert_eq!(engine.state(), EngineState::Spawning);

    let TickOutcome::Spawned(kind) = engine.tick() else {
        panic!("first tick should spawn");
    };
    let active = engine.active().unwrap();
    assert_eq!(active.kind, kind);
    assert_eq!(active.anchor, Position::new(0, 7));
    assert_eq!(engine.state(), EngineState::Falling);
    assert_eq!(engine.pieces_spawned(), 1);
}

#[test]
fn test_o_piece_falls_to_floor_then_locks() {
    let mut engine = engine();
    assert!(engine.spawn_kind(PieceKind::O));
    assert!(engine.grid().can_place(engine.active().unwrap(), 0, 0));

    for expected_row in 1..=18 {
        assert_eq!(engine.tick(), TickOutcome::Fell);
        assert_eq!(engine.active().unwrap().anchor.row, expected_row);
    }
    assert_eq!(engine.active().unwrap().anchor, Position::new(18, 7));
    assert_eq!(engine.grid().filled_count(), 0);

    assert_eq!(engine.tick(), TickOutcome::Locked { lines_cleared: 0 });
    assert_eq!(engine.grid().filled_count(), 4);
    for (col, row) in [(7, 18), (8, 18), (7, 19), (8, 19)] {
        assert!(engine.grid().is_occupied(col, row));
    }
    assert_eq!(engine.active().unwrap().anchor.row, 0);
    assert_eq!(engine.pieces_spawned(), 2);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_vertical_i_completes_bottom_row() {
    let mut engine = engine();
    for col in 0..15 {
        if col != 10 {
            engine.grid_mut().set(col, 19, Some(GRAY));
        }
    }

    assert!(engine.spawn_kind(PieceKind::I));
    assert!(engine.rotate());
    let cols: Vec<_> = engine.active().unwrap().cells().map(|p| p.col).collect();
    assert_eq!(cols, vec![10, 10, 10, 10]);

    for _ in 0..16 {
        assert_eq!(engine.tick(), TickOutcome::Fell);
    }
    assert_eq!(engine.active().unwrap().anchor.row, 16);

    assert_eq!(engine.tick(), TickOutcome::Locked { lines_cleared: 1 });
    assert_eq!(engine.score(), 1);

    // The filler row is gone; only the rest of the I remains, shifted down
    let bottom = engine.grid().row(19).unwrap();
    let filled: Vec<_> = (0..15).filter(|&c| bottom[c].is_some()).collect();
    assert_eq!(filled, vec![10]);
    assert_eq!(engine.grid().filled_count(), 3);
    assert!(engine.grid().row(16).unwrap().iter().all(|c| c.is_none()));
}

#[test]
fn test_blocked_spawn_ends_game_and_freezes_state() {
    let mut engine = engine();
    // Every row filled except column 0, so nothing is full but the spawn area is blocked
    for row in 0..20 {
        for col in 1..15 {
            engine.grid_mut().set(col, row, Some(GRAY));
        }
    }

    assert_eq!(engine.tick(), TickOutcome::GameOver);
    assert!(engine.is_game_over());
    assert_eq!(engine.state(), EngineState::GameOver);
    assert!(engine.active().is_none());

    let grid_before = engine.grid().clone();
    assert_eq!(engine.tick(), TickOutcome::Halted);
    assert!(!engine.move_by(-1, 0));
    assert!(!engine.rotate());
    assert!(!engine.apply_action(GameAction::SoftDrop));
    assert!(!engine.spawn_kind(PieceKind::O));
    assert_eq!(engine.grid(), &grid_before);
    assert_eq!(engine.pieces_spawned(), 0);
}

#[test]
fn test_lock_that_blocks_spawn_ends_game() {
    let mut engine = engine();
    // Rows 2.. filled except column 0: the O can't fall and no row completes
    for row in 2..20 {
        for col in 1..15 {
            engine.grid_mut().set(col, row, Some(GRAY));
        }
    }
    assert!(engine.spawn_kind(PieceKind::O));

    // Locking the O fills (0..=1, 7..=8), which every template needs at spawn
    assert_eq!(engine.tick(), TickOutcome::GameOver);
    assert!(engine.is_game_over());
    assert!(engine.active().is_none());
    assert_eq!(engine.grid().filled_count(), 18 * 14 + 4);
    for (col, row) in [(7, 0), (8, 0), (7, 1), (8, 1)] {
        assert!(engine.grid().is_occupied(col, row));
    }

    let grid_before = engine.grid().clone();
    let score_before = engine.score();
    assert!(!engine.move_by(1, 0));
    assert!(!engine.rotate());
    assert_eq!(engine.tick(), TickOutcome::Halted);
    assert!(!engine.apply_action(GameAction::MoveLeft));
    assert_eq!(engine.grid(), &grid_before);
    assert_eq!(engine.score(), score_before);
    assert_eq!(engine.pieces_spawned(), 1);
}

#[test]
fn test_move_by_extreme_deltas_is_noop() {
    let mut engine = engine();
    assert!(engine.spawn_kind(PieceKind::O));
    let before = engine.active().unwrap().clone();

    for (dcol, drow) in [
        (i16::MAX, 0),
        (i16::MIN, 0),
        (0, i16::MAX),
        (0, i16::MIN),
        (i16::MIN, i16::MAX),
    ] {
        assert!(!engine.move_by(dcol, drow), "({}, {})", dcol, drow);
        assert_eq!(engine.active().unwrap(), &before);
    }
}

#[test]
fn test_rotation_into_left_wall_is_rejected() {
    let mut engine = engine();
    assert!(engine.spawn_kind(PieceKind::I));
    assert!(engine.rotate());

    // Slide the vertical bar flush against the left wall
    let mut moves = 0;
    while engine.move_by(-1, 0) {
        moves += 1;
    }
    assert_eq!(moves, 10);
    let before = engine.active().unwrap().clone();
    assert_eq!(before.anchor, Position::new(0, -3));

    // Horizontal again would need columns -3..=0
    assert!(!engine.rotate());
    assert_eq!(engine.active().unwrap(), &before);
}

#[test]
fn test_move_by_is_all_or_nothing() {
    let mut rng = SimpleRng::new(5);
    let mut engine = GameEngine::new(EngineConfig::default().with_seed(5)).unwrap();
    for row in 10..20 {
        for col in 0..15 {
            if rng.next_range(3) == 0 {
                engine.grid_mut().set(col, row, Some(GRAY));
            }
        }
    }
    engine.tick();

    for _ in 0..500 {
        if engine.is_game_over() {
            break;
        }
        let dcol = rng.next_range(3) as i16 - 1;
        let drow = rng.next_range(2) as i16;
        let before = engine.active().unwrap().clone();
        let fits = engine.grid().can_place(&before, dcol, drow);

        let moved = engine.move_by(dcol, drow);
        assert_eq!(moved, fits);
        let after = engine.active().unwrap();
        if moved {
            assert_eq!(after.anchor, before.anchor.offset(dcol, drow));
        } else {
            assert_eq!(after, &before);
        }
        assert!(after.cells().all(|p| !engine.grid().is_occupied(p.col, p.row)));

        if rng.next_range(8) == 0 {
            engine.tick();
        }
    }
}

#[test]
fn test_soft_drop_moves_two_rows() {
    let mut engine = engine();
    assert!(engine.spawn_kind(PieceKind::O));
    assert!(engine.apply_action(GameAction::SoftDrop));
    assert_eq!(engine.active().unwrap().anchor.row, 2);

    // One row above the floor: only the first step succeeds
    while engine.move_by(0, 1) {}
    engine.move_by(0, -1);
    assert!(engine.apply_action(GameAction::SoftDrop));
    assert_eq!(engine.active().unwrap().anchor.row, 18);
    assert!(!engine.apply_action(GameAction::SoftDrop));
}

#[test]
fn test_same_seed_same_game() {
    let run = |seed| {
        let mut engine = GameEngine::new(EngineConfig::default().with_seed(seed)).unwrap();
        let mut kinds = Vec::new();
        for _ in 0..400 {
            match engine.tick() {
                TickOutcome::Spawned(kind) => kinds.push(kind),
                TickOutcome::Locked { .. } => kinds.push(engine.active().unwrap().kind),
                TickOutcome::GameOver | TickOutcome::Halted => break,
                TickOutcome::Fell => {}
            }
        }
        (kinds, engine.snapshot())
    };
    assert_eq!(run(31), run(31));
}

#[test]
fn test_gravity_clock_drives_ticks() {
    let mut engine = engine();
    let mut clock = GravityClock::new(10);
    let mut steps = 0;
    for _ in 0..30 {
        if clock.advance() {
            engine.tick();
            steps += 1;
        }
    }
    // Frames 1, 11 and 21
    assert_eq!(steps, 3);
    assert_eq!(engine.active().unwrap().anchor.row, 2);
}

#[test]
fn test_game_runs_to_completion() {
    let mut engine = GameEngine::new(EngineConfig::new(8, 8, 3)).unwrap();
    let mut ticks = 0;
    while !engine.is_game_over() {
        engine.tick();
        ticks += 1;
        assert!(ticks < 10_000, "game never ended");
    }
    assert_eq!(engine.tick(), TickOutcome::Halted);
    assert!(engine.summary().game_over);
}
