//! Grid tests - placement, merging and line clears through the public API

use tui_blockfall::core::{template, GameEngine, Grid, Position, SimpleRng};
use tui_blockfall::types::{PieceKind, Rgb, GRID_HEIGHT, GRID_WIDTH};

const GRAY: Rgb = Rgb::new(128, 128, 128);

/// Random grid where each row is full with probability ~1/3 and otherwise
/// has random holes.
fn random_grid(rng: &mut SimpleRng, width: u16, height: u16) -> Grid {
    let mut grid = Grid::new(width, height);
    for row in 0..height as i16 {
        let full = rng.next_range(3) == 0;
        for col in 0..width as i16 {
            if full || rng.next_range(2) == 0 {
                grid.set(col, row, Some(GRAY));
            }
        }
    }
    grid
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
    assert_eq!(grid.width(), 15);
    assert_eq!(grid.height(), 20);
    assert_eq!(grid.filled_count(), 0);
    for row in 0..GRID_HEIGHT as i16 {
        for col in 0..GRID_WIDTH as i16 {
            assert!(!grid.is_occupied(col, row), "({}, {}) should be empty", col, row);
        }
    }
}

#[test]
fn test_second_clear_finds_nothing() {
    let mut rng = SimpleRng::new(2024);
    for _ in 0..200 {
        let mut grid = random_grid(&mut rng, 15, 20);
        grid.clear_full_rows();
        assert_eq!(grid.clear_full_rows(), 0);
        assert!((0..20).all(|row| !grid.is_row_full(row)));
    }
}

#[test]
fn test_clear_preserves_dimensions_and_counts() {
    let mut rng = SimpleRng::new(77);
    for (w, h) in [(15, 20), (8, 4), (64, 64), (9, 30)] {
        let mut grid = random_grid(&mut rng, w, h);
        let full = (0..h as usize).filter(|&r| grid.is_row_full(r)).count();
        let before = grid.filled_count();

        let cleared = grid.clear_full_rows();
        assert_eq!(cleared as usize, full);
        assert_eq!((grid.width(), grid.height()), (w, h));
        assert_eq!(grid.cells().len(), w as usize * h as usize);
        assert_eq!(grid.filled_count(), before - full * w as usize);
        // Cleared rows come back empty at the top
        for row in 0..full {
            assert!(grid.row(row).unwrap().iter().all(|c| c.is_none()));
        }
    }
}

#[test]
fn test_clear_shifts_partial_rows_down_in_order() {
    let mut grid = Grid::new(8, 5);
    grid.set(0, 1, Some(Rgb::new(1, 0, 0)));
    for col in 0..8 {
        grid.set(col, 2, Some(GRAY));
        grid.set(col, 4, Some(GRAY));
    }
    grid.set(3, 3, Some(Rgb::new(0, 1, 0)));

    assert_eq!(grid.clear_full_rows(), 2);
    assert_eq!(grid.get(0, 3), Some(Some(Rgb::new(1, 0, 0))));
    assert_eq!(grid.get(3, 4), Some(Some(Rgb::new(0, 1, 0))));
    assert_eq!(grid.filled_count(), 2);
}

#[test]
fn test_can_place_rejects_walls_floor_and_blocks() {
    let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
    let mut o = template(PieceKind::O);
    o.anchor = Position::new(18, 13);

    assert!(grid.can_place(&o, 0, 0));
    assert!(!grid.can_place(&o, 1, 0), "right wall");
    assert!(!grid.can_place(&o, 0, 1), "floor");
    assert!(grid.can_place(&o, -13, 0));
    assert!(!grid.can_place(&o, -14, 0), "left wall");

    grid.set(12, 19, Some(GRAY));
    assert!(!grid.can_place(&o, -1, 0), "settled block");
}

#[test]
fn test_engine_grid_matches_config() {
    let engine = GameEngine::default();
    assert_eq!(engine.grid().width(), GRID_WIDTH);
    assert_eq!(engine.grid().height(), GRID_HEIGHT);
}
