use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owns the mine layout and the player-visibility layer, and applies the
/// per-move rules: uncovering (with flood reveal of blank regions), flag
/// toggling, and progress accounting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardEngine {
    layout: MineLayout,
    visibility: Array2<Visibility>,
    uncovered_count: Saturating<CellCount>,
}

impl BoardEngine {
    pub fn new(config: BoardConfig, placer: impl BombPlacer) -> Result<Self> {
        Ok(Self::from_layout(placer.place(config)?))
    }

    /// Wraps an already built layout with an all-covered visibility layer.
    pub fn from_layout(layout: MineLayout) -> Self {
        let edge = usize::from(layout.grid_size());
        Self {
            visibility: Array2::default((edge, edge)),
            layout,
            uncovered_count: Saturating(0),
        }
    }

    pub fn grid_size(&self) -> Coord {
        self.layout.grid_size()
    }

    pub fn uncovered_count(&self) -> CellCount {
        self.uncovered_count.0
    }

    pub fn total_cells(&self) -> CellCount {
        self.layout.total_cells()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.layout.bomb_count()
    }

    /// True when every non-bomb cell has been uncovered.
    pub fn is_cleared(&self) -> bool {
        self.uncovered_count.0 == self.layout.safe_cell_count()
    }

    pub fn visibility_at(&self, coords: Coord2) -> Visibility {
        self.visibility[coords.to_nd_index()]
    }

    pub fn has_bomb_at(&self, coords: Coord2) -> bool {
        self.layout[coords].is_bomb()
    }

    /// Uncovers the cell at `coords`. A blank target triggers a flood
    /// reveal of its whole blank region plus the region's clue border; any
    /// other target reveals that single cell. The returned outcome always
    /// reflects the triggering cell, not the flooded ones.
    pub fn uncover(&mut self, coords: Coord2) -> UncoverOutcome {
        if !self.layout.in_bounds(coords) {
            log::warn!(
                "uncover ({}, {}) is outside the board, row and column must be below {}",
                coords.0,
                coords.1,
                self.grid_size()
            );
            return UncoverOutcome::Failure;
        }

        match self.visibility[coords.to_nd_index()] {
            Visibility::Flagged => return UncoverOutcome::Flagged,
            Visibility::Uncovered => {
                log::warn!("({}, {}) already uncovered", coords.0, coords.1);
                return UncoverOutcome::Failure;
            }
            Visibility::Covered => {}
        }

        if self.layout[coords].is_blank() {
            self.flood_uncover(coords);
        } else {
            self.uncover_single(coords);
        }

        match self.layout[coords] {
            LayoutCell::Bomb => UncoverOutcome::Bomb,
            LayoutCell::Clue(0) => UncoverOutcome::Blank,
            LayoutCell::Clue(_) => UncoverOutcome::Number,
        }
    }

    /// Work-list traversal of the 8-connected blank region around `start`.
    /// Blank cells propagate; clue cells on the region border are revealed
    /// but stop the walk. The visited set keeps every cell enqueued at most
    /// once, which bounds the walk by the cell count of the board.
    fn flood_uncover(&mut self, start: Coord2) {
        let mut visited = BTreeSet::from([start]);
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            if self.visibility[coords.to_nd_index()].is_uncovered() {
                continue;
            }

            self.uncover_single(coords);
            if !self.layout[coords].is_blank() {
                continue;
            }

            to_visit.extend(
                self.layout
                    .iter_neighbors(coords)
                    .filter(|&pos| !self.visibility[pos.to_nd_index()].is_uncovered())
                    .filter(|&pos| visited.insert(pos)),
            );
        }
    }

    fn uncover_single(&mut self, coords: Coord2) {
        let cell = &mut self.visibility[coords.to_nd_index()];
        if !cell.is_uncovered() {
            *cell = Visibility::Uncovered;
            self.uncovered_count += 1;
        }
    }

    /// Flips the flag on a covered cell. Revealed cells cannot carry flags.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        if !self.layout.in_bounds(coords) {
            log::warn!(
                "flag ({}, {}) is outside the board, row and column must be below {}",
                coords.0,
                coords.1,
                self.grid_size()
            );
            return FlagOutcome::Failure;
        }

        let cell = &mut self.visibility[coords.to_nd_index()];
        match *cell {
            Visibility::Uncovered => FlagOutcome::AlreadyUncovered,
            Visibility::Flagged => {
                *cell = Visibility::Covered;
                FlagOutcome::Success
            }
            Visibility::Covered => {
                *cell = Visibility::Flagged;
                FlagOutcome::Success
            }
        }
    }

    /// Row-major glyph rows as the player currently sees the board.
    pub fn render_player_view(&self) -> Vec<Vec<char>> {
        self.render_with(|coords| {
            self.visibility[coords.to_nd_index()].glyph(self.layout[coords])
        })
    }

    /// Row-major glyph rows of the full layout, ignoring visibility. Used
    /// for the end-of-game disclosure only.
    pub fn render_revealed_view(&self) -> Vec<Vec<char>> {
        self.render_with(|coords| self.layout[coords].glyph())
    }

    fn render_with(&self, glyph_at: impl Fn(Coord2) -> char) -> Vec<Vec<char>> {
        let edge = self.grid_size();
        (0..edge)
            .map(|row| (0..edge).map(|col| glyph_at((row, col))).collect())
            .collect()
    }
}
