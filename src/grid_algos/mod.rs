pub mod islands;

use std::{fmt, str::FromStr};

use crate::errors::GridError;


/// Label of a single grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Water,
    Land,
}

impl Cell {
    pub fn label(self) -> char {
        match self {
            Cell::Water => 'W',
            Cell::Land => 'L',
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = char;

    fn try_from(label: char) -> Result<Self, Self::Error> {
        match label {
            'W' => Ok(Cell::Water),
            'L' => Ok(Cell::Land),
            other => Err(other),
        }
    }
}


/// Rectangular 2D field of land and water
/// Cells are addressed as (row, col).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    cols: usize,
}

impl Grid {

    /// Create a grid from rows of cells
    /// All rows must have the width of the first one.
    pub fn new(cells: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let cols = cells.first().map_or(0, Vec::len);

        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GridError::Ragged { row, expected: cols, found });
        }

        Ok(Self { cells, cols })
    }

    /// Create a grid from rows of 'W' / 'L' labels
    pub fn from_labels<R, L>(rows: R) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let cells = rows
            .into_iter()
            .enumerate()
            .map(|(row, labels)| {
                labels
                    .as_ref()
                    .chars()
                    .enumerate()
                    .map(|(col, label)| {
                        Cell::try_from(label).map_err(|label| GridError::UnknownLabel { label, row, col })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(cells)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at (row, col), None outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Iterate over every (row, col) in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
    }
}

/// One row per line, whitespace between labels is ignored
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<String> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_labels(rows)
    }
}

/// Each label left aligned in a column of width 4
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{:4}", cell.label())?;
            }
        }
        Ok(())
    }
}


#[cfg(test)]
pub(crate) mod samples {
    use super::Grid;

    pub const ISLANDS: [&str; 6] = [
        "WLWWW",
        "WLWWW",
        "WWWLW",
        "WWLLW",
        "LWWLL",
        "LLWWW",
    ];

    pub fn islands() -> Grid {
        Grid::from_labels(ISLANDS).unwrap()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        let grid = samples::islands();
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.get(0, 1), Some(Cell::Land));
        assert_eq!(grid.get(0, 0), Some(Cell::Water));
        assert_eq!(grid.get(6, 0), None);
        assert_eq!(grid.get(0, 5), None);
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let result = Grid::new(vec![
            vec![Cell::Land, Cell::Water],
            vec![Cell::Land, Cell::Water],
            vec![Cell::Land],
        ]);
        assert_eq!(result, Err(GridError::Ragged { row: 2, expected: 2, found: 1 }));
    }

    #[test]
    fn test_unknown_label_rejected() {
        let result = Grid::from_labels(["WL", "WX"]);
        assert_eq!(result, Err(GridError::UnknownLabel { label: 'X', row: 1, col: 1 }));
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new(vec![]).unwrap();
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.cols(), 0);
        assert_eq!(grid.positions().count(), 0);
    }

    #[test]
    fn test_parse_and_display() {
        let grid: Grid = "W L\nL W\n".parse().unwrap();
        assert_eq!(grid, Grid::from_labels(["WL", "LW"]).unwrap());
        assert_eq!(grid.to_string(), "W   L   \nL   W   ");
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::from_labels(["WL", "LW"]).unwrap();
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
