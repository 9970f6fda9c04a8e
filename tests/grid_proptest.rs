use proptest::prelude::*;
use traverse::{island_count, minimum_island_size, Cell, Grid};

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(
            proptest::collection::vec(prop_oneof![Just(Cell::Water), Just(Cell::Land)], cols),
            rows,
        )
        .prop_map(|cells| Grid::new(cells).unwrap())
    })
}

/// Union-find labeling of land cells, skipping row 0 and column 0
fn reference_island_count(grid: &Grid) -> usize {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut parent: Vec<usize> = (0..rows * cols).collect();

    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    let land = |row: usize, col: usize| row > 0 && col > 0 && grid.get(row, col) == Some(Cell::Land);

    for row in 0..rows {
        for col in 0..cols {
            if !land(row, col) {
                continue;
            }
            for (r, c) in [(row + 1, col), (row, col + 1)] {
                if r < rows && c < cols && land(r, c) {
                    let (a, b) = (find(&mut parent, row * cols + col), find(&mut parent, r * cols + c));
                    parent[a] = b;
                }
            }
        }
    }

    (0..rows * cols)
        .filter(|&i| land(i / cols, i % cols) && find(&mut parent, i) == i)
        .count()
}

proptest! {
    #[test]
    fn test_island_count_matches_reference(grid in grid_strategy()) {
        prop_assert_eq!(island_count(&grid), reference_island_count(&grid));
    }

    #[test]
    fn test_minimum_island_size_above_one(grid in grid_strategy()) {
        if let Some(size) = minimum_island_size(&grid) {
            // one cell plus at most four neighbor steps
            prop_assert!((2..=5).contains(&size));
        }
    }

    #[test]
    fn test_display_round_trips(grid in grid_strategy()) {
        let parsed: Grid = grid.to_string().parse().unwrap();
        prop_assert_eq!(parsed, grid);
    }
}
