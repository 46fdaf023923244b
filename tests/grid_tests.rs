//! Grid tests - the toggle rule and win condition.

use tui_lightsout::core::{Grid, GridError, SimpleRng};
use tui_lightsout::types::{Coord, GameOutcome, GridConfig};

#[test]
fn test_new_grid_is_all_unlit() {
    let grid = Grid::new(4, 3).unwrap();
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.cols(), 3);

    for row in 0..4 {
        for col in 0..3 {
            assert_eq!(grid.get(row, col), Some(false), "({}, {})", row, col);
        }
    }

    // An all-unlit board is a won board, whatever its size.
    assert!(grid.is_all_unlit());
    assert_eq!(grid.outcome(), GameOutcome::Won);
}

#[test]
fn test_zero_dimension_is_rejected() {
    assert!(matches!(
        Grid::new(0, 3),
        Err(GridError::InvalidDimension { .. })
    ));
    assert!(matches!(
        Grid::new(3, 0),
        Err(GridError::InvalidDimension { .. })
    ));
}

#[test]
fn test_get_out_of_bounds_is_none() {
    let grid = Grid::new(3, 3).unwrap();
    assert_eq!(grid.get(3, 0), None);
    assert_eq!(grid.get(0, 3), None);
    assert_eq!(grid.get(2, 2), Some(false));
}

#[test]
fn test_toggle_flips_plus_shape() {
    let grid = Grid::new(3, 3).unwrap();
    let next = grid.toggled(Coord::new(1, 1)).unwrap();

    assert_eq!(next.lit_count(), 5);
    assert_eq!(
        next.to_rows(),
        vec![
            vec![false, true, false],
            vec![true, true, true],
            vec![false, true, false],
        ]
    );
}

#[test]
fn test_toggle_matches_hand_worked_example() {
    // 3x3 board with the middle-left region lit; toggling (1, 0) flips the
    // center cell, (1, 1), (0, 0) and (2, 0), and skips the off-board left
    // neighbor.
    let grid = Grid::from_rows(vec![
        vec![false, false, false],
        vec![true, true, false],
        vec![false, false, false],
    ])
    .unwrap();

    let next = grid.toggled(Coord::new(1, 0)).unwrap();
    assert_eq!(
        next.to_rows(),
        vec![
            vec![true, false, false],
            vec![false, false, false],
            vec![true, false, false],
        ]
    );
}

#[test]
fn test_toggle_twice_restores_the_board() {
    let config = GridConfig::new(5, 4, 0.5);
    let mut rng = SimpleRng::new(2024);
    let grid = Grid::random(&config, &mut rng).unwrap();

    for row in 0..5 {
        for col in 0..4 {
            let coord = Coord::new(row, col);
            let twice = grid.toggled(coord).unwrap().toggled(coord).unwrap();
            assert_eq!(twice, grid, "involution failed at ({}, {})", row, col);
        }
    }
}

#[test]
fn test_toggle_does_not_mutate_the_input() {
    let grid = Grid::new(3, 3).unwrap();
    let before = grid.clone();
    let _ = grid.toggled(Coord::new(1, 1)).unwrap();
    assert_eq!(grid, before);
}

#[test]
fn test_toggle_out_of_bounds_center_is_an_error() {
    let grid = Grid::new(2, 2).unwrap();
    assert_eq!(
        grid.toggled(Coord::new(2, 0)),
        Err(GridError::OutOfBounds {
            row: 2,
            col: 0,
            rows: 2,
            cols: 2
        })
    );
    assert!(grid.toggled(Coord::new(0, 5)).is_err());
}

#[test]
fn test_chance_zero_deals_an_unlit_board() {
    let config = GridConfig::new(4, 4, 0.0);
    let mut rng = SimpleRng::new(7);
    let grid = Grid::random(&config, &mut rng).unwrap();

    assert!(grid.is_all_unlit());
    assert_eq!(grid.outcome(), GameOutcome::Won);
}

#[test]
fn test_chance_one_deals_a_fully_lit_board() {
    let config = GridConfig::new(4, 4, 1.0);
    let mut rng = SimpleRng::new(7);
    let grid = Grid::random(&config, &mut rng).unwrap();

    assert_eq!(grid.lit_count(), 16);
    assert_eq!(grid.outcome(), GameOutcome::InProgress);
}

#[test]
fn test_same_seed_deals_the_same_board() {
    let config = GridConfig::new(8, 8, 0.5);

    let mut rng_a = SimpleRng::new(99);
    let mut rng_b = SimpleRng::new(99);
    let a = Grid::random(&config, &mut rng_a).unwrap();
    let b = Grid::random(&config, &mut rng_b).unwrap();
    assert_eq!(a, b);

    let mut rng_c = SimpleRng::new(100);
    let c = Grid::random(&config, &mut rng_c).unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_full_sweep_lights_cells_with_even_neighbor_count() {
    // Toggling every cell exactly once toggles each cell 1 + degree times,
    // so a cell ends lit iff its in-bounds neighbor count is even.
    for n in 1..=5usize {
        let mut grid = Grid::new(n, n).unwrap();
        for row in 0..n {
            for col in 0..n {
                grid = grid.toggled(Coord::new(row, col)).unwrap();
            }
        }

        for row in 0..n {
            for col in 0..n {
                let mut neighbors = 0;
                if row > 0 {
                    neighbors += 1;
                }
                if row + 1 < n {
                    neighbors += 1;
                }
                if col > 0 {
                    neighbors += 1;
                }
                if col + 1 < n {
                    neighbors += 1;
                }
                let expected = neighbors % 2 == 0;
                assert_eq!(
                    grid.get(row, col),
                    Some(expected),
                    "cell ({}, {}) after full {n}x{n} sweep",
                    row,
                    col
                );
            }
        }
    }
}
