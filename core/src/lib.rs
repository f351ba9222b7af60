#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Validated board parameters: edge length of the square grid and the number
/// of bombs to hide in it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    grid_size: Coord,
    bombs: CellCount,
}

impl BoardConfig {
    /// Rejects impossible settings instead of clamping them: the session
    /// must not start on a silently adjusted board.
    pub fn new(grid_size: Coord, bombs: CellCount) -> Result<Self> {
        if grid_size < 1 {
            return Err(BoardError::InvalidGridSize(grid_size));
        }
        if bombs < 1 || bombs >= square(grid_size) {
            return Err(BoardError::InvalidBombCount { grid_size, bombs });
        }
        Ok(Self { grid_size, bombs })
    }

    pub const fn grid_size(&self) -> Coord {
        self.grid_size
    }

    pub const fn bombs(&self) -> CellCount {
        self.bombs
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.grid_size)
    }
}

/// Immutable bomb layout with per-cell adjacency clues, fully computed at
/// construction time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    cells: Array2<LayoutCell>,
    bomb_count: CellCount,
}

impl MineLayout {
    /// Builds a layout from explicit bomb positions, mostly useful for
    /// deterministic fixtures. Duplicate positions collapse into one bomb.
    pub fn from_bomb_coords(grid_size: Coord, bomb_coords: &[Coord2]) -> Result<Self> {
        if grid_size < 1 {
            return Err(BoardError::InvalidGridSize(grid_size));
        }

        let edge = usize::from(grid_size);
        let mut cells: Array2<LayoutCell> = Array2::default((edge, edge));
        for &(row, col) in bomb_coords {
            if row >= grid_size || col >= grid_size {
                return Err(BoardError::BombOutOfBounds {
                    row,
                    col,
                    grid_size,
                });
            }
            if !cells[(row, col).to_nd_index()].is_bomb() {
                place_bomb(&mut cells, (row, col));
            }
        }

        Ok(Self::from_cells(cells))
    }

    pub(crate) fn from_cells(cells: Array2<LayoutCell>) -> Self {
        let bomb_count = cells
            .iter()
            .filter(|cell| cell.is_bomb())
            .count()
            .try_into()
            .unwrap();
        Self { cells, bomb_count }
    }

    pub fn grid_size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.bomb_count
    }

    pub fn in_bounds(&self, coords: Coord2) -> bool {
        let edge = self.grid_size();
        coords.0 < edge && coords.1 < edge
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = LayoutCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// Marks `coords` as a bomb and bumps the clue of every non-bomb neighbor.
pub(crate) fn place_bomb(cells: &mut Array2<LayoutCell>, coords: Coord2) {
    cells[coords.to_nd_index()] = LayoutCell::Bomb;
    for neighbor in cells.iter_neighbors(coords) {
        if let LayoutCell::Clue(count) = cells[neighbor.to_nd_index()] {
            cells[neighbor.to_nd_index()] = LayoutCell::Clue(count + 1);
        }
    }
}

/// Outcome of a single uncover request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UncoverOutcome {
    /// Rejected without effect: the target was out of bounds or already
    /// uncovered.
    Failure,
    /// The target is flagged and must be unflagged before uncovering.
    Flagged,
    /// The target was a blank cell; a flood reveal ran from it.
    Blank,
    /// The target carried a positive adjacency clue.
    Number,
    /// The target was a bomb.
    Bomb,
}

impl UncoverOutcome {
    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }

    pub const fn has_update(self) -> bool {
        use UncoverOutcome::*;
        match self {
            Failure => false,
            Flagged => false,
            Blank => true,
            Number => true,
            Bomb => true,
        }
    }
}

/// Outcome of a single flag-toggle request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    /// Rejected without effect: the target was out of bounds.
    Failure,
    /// The flag was toggled.
    Success,
    /// Flags are meaningless on revealed cells.
    AlreadyUncovered,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_bomb_count_filling_the_grid() {
        assert_eq!(
            BoardConfig::new(1, 1),
            Err(BoardError::InvalidBombCount {
                grid_size: 1,
                bombs: 1
            })
        );
    }

    #[test]
    fn config_rejects_degenerate_sizes() {
        assert_eq!(BoardConfig::new(0, 1), Err(BoardError::InvalidGridSize(0)));
        assert_eq!(
            BoardConfig::new(3, 0),
            Err(BoardError::InvalidBombCount {
                grid_size: 3,
                bombs: 0
            })
        );
    }

    #[test]
    fn config_accepts_five_bombs_on_five_by_five() {
        let config = BoardConfig::new(5, 5).unwrap();

        assert_eq!(config.grid_size(), 5);
        assert_eq!(config.bombs(), 5);
        assert_eq!(config.total_cells(), 25);
    }

    #[test]
    fn layout_places_bombs_and_increments_neighbors() {
        let layout = MineLayout::from_bomb_coords(3, &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(layout.bomb_count(), 2);
        assert_eq!(layout[(0, 0)], LayoutCell::Bomb);
        assert_eq!(layout[(2, 2)], LayoutCell::Bomb);
        assert_eq!(layout[(1, 1)], LayoutCell::Clue(2));
        assert_eq!(layout[(0, 1)], LayoutCell::Clue(1));
        assert_eq!(layout[(0, 2)], LayoutCell::Clue(1));
    }

    #[test]
    fn clues_match_brute_force_recount() {
        let bombs = [(0, 1), (1, 1), (3, 0), (3, 3), (2, 2)];
        let layout = MineLayout::from_bomb_coords(4, &bombs).unwrap();

        for row in 0..4 {
            for col in 0..4 {
                let expected = layout
                    .iter_neighbors((row, col))
                    .filter(|&pos| layout[pos].is_bomb())
                    .count() as u8;
                match layout[(row, col)] {
                    LayoutCell::Bomb => assert!(bombs.contains(&(row, col))),
                    LayoutCell::Clue(count) => {
                        assert_eq!(count, expected, "clue mismatch at ({row}, {col})");
                        assert!(count <= 8);
                    }
                }
            }
        }
    }

    #[test]
    fn duplicate_bomb_coords_collapse() {
        let layout = MineLayout::from_bomb_coords(2, &[(0, 0), (0, 0)]).unwrap();

        assert_eq!(layout.bomb_count(), 1);
        assert_eq!(layout[(1, 1)], LayoutCell::Clue(1));
    }

    #[test]
    fn layout_rejects_out_of_bounds_bombs() {
        assert_eq!(
            MineLayout::from_bomb_coords(2, &[(2, 0)]),
            Err(BoardError::BombOutOfBounds {
                row: 2,
                col: 0,
                grid_size: 2
            })
        );
    }

    #[test]
    fn surrounded_cell_reaches_the_maximum_clue() {
        let ring = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ];
        let layout = MineLayout::from_bomb_coords(3, &ring).unwrap();

        assert_eq!(layout[(1, 1)], LayoutCell::Clue(8));
        assert_eq!(layout.safe_cell_count(), 1);
    }
}
