//! Piece movement and collision tests

use tetrino::core::{rotate_cw, shape, CoreError, Descent, EngineEvent, Grid, Piece};
use tetrino::types::{PieceColor, ShapeKind};

fn piece(kind: ShapeKind, row: i8, col: i8) -> Piece {
    Piece::new(*shape(kind), kind.color(), row, col)
}

#[test]
fn test_spawn_position() {
    let p = Piece::spawn(ShapeKind::T);
    assert_eq!((p.row(), p.col()), (0, 4));
    assert_eq!(p.color(), PieceColor::Purple);
}

#[test]
fn test_o_at_left_wall_cannot_move_left() {
    let mut grid = Grid::new();
    let mut events = Vec::new();
    let mut p = piece(ShapeKind::O, 5, 0);

    assert!(p.has_reached_maximum_left(&grid));
    assert_eq!(p.move_left(&mut grid, &mut events), Ok(false));
    assert_eq!(p.col(), 0);
    assert!(events.is_empty());
}

#[test]
fn test_settled_block_stops_horizontal_moves() {
    let mut grid = Grid::new();
    grid.set(5, 7, Some(PieceColor::Red)).unwrap();
    let mut events = Vec::new();
    // O at (5,5) covers columns 5 and 6.
    let mut p = piece(ShapeKind::O, 5, 5);

    assert_eq!(p.move_right(&mut grid, &mut events), Ok(false));
    assert_eq!(p.move_left(&mut grid, &mut events), Ok(true));
    assert_eq!(p.col(), 4);
}

#[test]
fn test_move_emits_clear_then_draw() {
    let mut grid = Grid::new();
    let mut events = Vec::new();
    let mut p = piece(ShapeKind::O, 0, 4);
    p.move_right(&mut grid, &mut events).unwrap();

    assert_eq!(events.len(), 8);
    assert!(events[..4]
        .iter()
        .all(|e| matches!(e, EngineEvent::ClearCell { .. })));
    assert!(events[4..]
        .iter()
        .all(|e| matches!(e, EngineEvent::DrawCell { color: PieceColor::Yellow, .. })));
}

#[test]
fn test_i_bottom_detection_matches_floor() {
    let grid = Grid::new();
    for row in 0..=16 {
        let p = piece(ShapeKind::I, row, 4);
        // Lowest block of the vertical I is at row + 3.
        assert_eq!(p.has_reached_maximum_bottom(&grid), row + 3 + 1 == 20, "row {}", row);
    }
}

#[test]
fn test_move_down_locks_on_landing() {
    let mut grid = Grid::new();
    let mut events = Vec::new();
    let mut p = piece(ShapeKind::O, 17, 0);

    assert_eq!(p.move_down(&mut grid, &mut events), Ok(Descent::Locked));
    assert_eq!(p.row(), 18);
    for (row, col) in [(18, 0), (18, 1), (19, 0), (19, 1)] {
        assert_eq!(grid.get(row, col), Ok(Some(PieceColor::Yellow)));
    }
}

#[test]
fn test_piece_resting_on_ledge_locks_in_place() {
    let mut grid = Grid::new();
    grid.set(10, 0, Some(PieceColor::Red)).unwrap();
    let mut events = Vec::new();
    // O rows 8..=9 over column 0: already resting.
    let mut p = piece(ShapeKind::O, 8, 0);

    assert_eq!(p.move_down(&mut grid, &mut events), Ok(Descent::Locked));
    assert_eq!(p.row(), 8);
    assert_eq!(grid.get(9, 0), Ok(Some(PieceColor::Yellow)));
    assert_eq!(grid.get(10, 0), Ok(Some(PieceColor::Red)));
}

#[test]
fn test_rotation_blocked_by_settled_block() {
    let mut grid = Grid::new();
    let mut events = Vec::new();
    // Vertical I in column 5; rotated it would lie on row 6, columns 4..=7.
    grid.set(6, 7, Some(PieceColor::Green)).unwrap();
    let mut p = piece(ShapeKind::I, 5, 4);

    assert_eq!(p.rotate(&mut grid, &mut events), Ok(false));
    assert_eq!(p.matrix(), shape(ShapeKind::I));
    assert!(events.is_empty());
}

#[test]
fn test_rotation_has_no_wall_kick() {
    let mut grid = Grid::new();
    let mut events = Vec::new();
    // Rotated I would need columns 7..=10.
    let mut p = piece(ShapeKind::I, 5, 7);
    assert_eq!(p.rotate(&mut grid, &mut events), Ok(false));
    assert_eq!(p.col(), 7);
}

#[test]
fn test_rotation_below_floor_is_blocked() {
    let grid = Grid::new();
    // Rotated T reaches row + 2 = 20.
    let p = piece(ShapeKind::T, 18, 4);
    assert!(!p.can_rotate(&grid, &rotate_cw(p.matrix())));
}

#[test]
fn test_rotation_check_skips_rows_above_grid() {
    let grid = Grid::new();
    // Rotated I lies on row -1, which is never checked.
    let p = piece(ShapeKind::I, -2, 4);
    assert!(p.can_rotate(&grid, &rotate_cw(p.matrix())));
}

#[test]
fn test_rotation_above_grid_fails_without_side_effects() {
    let mut grid = Grid::new();
    let mut events = Vec::new();
    let mut p = piece(ShapeKind::I, -2, 4);
    assert!(p.can_rotate(&grid, &rotate_cw(p.matrix())));

    assert_eq!(
        p.rotate(&mut grid, &mut events),
        Err(CoreError::OutOfBounds { row: -2, col: 5 })
    );
    assert_eq!(p.matrix(), shape(ShapeKind::I));
    assert_eq!(grid, Grid::new());
    assert!(events.is_empty());
}

#[test]
fn test_rotate_in_open_space() {
    let mut grid = Grid::new();
    let mut events = Vec::new();
    let mut p = piece(ShapeKind::T, 5, 4);
    assert_eq!(p.rotate(&mut grid, &mut events), Ok(true));
    assert_eq!(p.matrix().to_string(), ".#.\n.##\n.#.");
    assert!(p.fits(&grid));
}
