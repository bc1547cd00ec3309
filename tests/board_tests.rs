//! Board tests - layout factoring and dealing

use tui_memory::core::{grid_dimensions, Board, GameConfig, GameRng, GridDims};
use tui_memory::types::{Position, TileFace};

#[test]
fn test_grid_rows_are_largest_divisor_under_sqrt() {
    for grid_size in (2..=400).step_by(2) {
        let dims = grid_dimensions(grid_size);
        assert_eq!(dims.rows * dims.cols, grid_size, "size {}", grid_size);
        assert!(dims.rows <= dims.cols);

        let expected = (1..=grid_size)
            .take_while(|r| r * r <= grid_size)
            .filter(|r| grid_size % r == 0)
            .max()
            .unwrap();
        assert_eq!(dims.rows, expected, "size {}", grid_size);
    }
}

#[test]
fn test_presets_are_square() {
    assert_eq!(grid_dimensions(16), GridDims { rows: 4, cols: 4 });
    assert_eq!(grid_dimensions(36), GridDims { rows: 6, cols: 6 });
    assert_eq!(grid_dimensions(64), GridDims { rows: 8, cols: 8 });
}

#[test]
fn test_prime_half_degrades_to_single_row() {
    assert_eq!(grid_dimensions(14), GridDims { rows: 2, cols: 7 });
    assert_eq!(grid_dimensions(2), GridDims { rows: 1, cols: 2 });
    assert_eq!(grid_dimensions(26), GridDims { rows: 2, cols: 13 });
}

#[test]
fn test_every_value_dealt_exactly_twice() {
    for grid_size in [2usize, 8, 16, 36, 64, 100] {
        let config = GameConfig::new(grid_size, 30).unwrap();
        let mut rng = GameRng::new(grid_size as u64);
        let board = Board::deal(&config, &mut rng);

        assert_eq!(board.len(), grid_size);
        let mut counts = vec![0u32; config.total_pairs() + 1];
        for tile in board.tiles() {
            assert!(tile.value >= 1);
            assert_eq!(tile.face, TileFace::Hidden);
            counts[tile.value as usize] += 1;
        }
        assert!(counts[1..].iter().all(|&c| c == 2), "size {}", grid_size);
    }
}

#[test]
fn test_deal_is_shuffled_and_seeded() {
    let config = GameConfig::new(64, 90).unwrap();
    let a = Board::deal(&config, &mut GameRng::new(1));
    let b = Board::deal(&config, &mut GameRng::new(1));
    let c = Board::deal(&config, &mut GameRng::new(2));
    assert_eq!(a.tiles(), b.tiles());
    assert_ne!(a.tiles(), c.tiles());
}

#[test]
fn test_position_round_trips_through_index() {
    let board = Board::from_values(GridDims { rows: 3, cols: 4 }, &[1; 12]);
    for i in 0..board.len() {
        let pos = board.position(i);
        assert_eq!(board.index(pos), Some(i));
    }
    assert_eq!(board.index(Position::new(3, 0)), None);
    assert_eq!(board.index(Position::new(0, 4)), None);
}
