use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, RngExt, SeedableRng};

use super::*;

/// Attempt budget for finding a free cell for a single bomb. Rejection
/// sampling on a nearly full board could otherwise spin for a very long
/// time; bomb density in practice is far too low for the bound to trigger.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1_000;

/// Uniform rejection-sampling placement, seeded from a single `u64`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBombPlacer {
    seed: u64,
}

impl RandomBombPlacer {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BombPlacer for RandomBombPlacer {
    fn place(self, config: BoardConfig) -> Result<MineLayout> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        place_with_rng(config, &mut rng)
    }
}

/// Places `config.bombs()` bombs through `rng`, one free cell at a time,
/// bumping the clue of every non-bomb neighbor after each placement.
pub fn place_with_rng<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Result<MineLayout> {
    let edge = usize::from(config.grid_size());
    let mut cells: Array2<LayoutCell> = Array2::default((edge, edge));

    for _ in 0..config.bombs() {
        let coords = free_cell(&cells, config.grid_size(), rng)?;
        place_bomb(&mut cells, coords);
    }

    Ok(MineLayout::from_cells(cells))
}

fn free_cell<R: Rng + ?Sized>(
    cells: &Array2<LayoutCell>,
    grid_size: Coord,
    rng: &mut R,
) -> Result<Coord2> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let row = rng.random_range(0..grid_size);
        let col = rng.random_range(0..grid_size);
        if !cells[(row, col).to_nd_index()].is_bomb() {
            return Ok((row, col));
        }
    }

    log::warn!(
        "gave up looking for a free bomb cell on a {0}x{0} grid after {1} attempts",
        grid_size,
        MAX_PLACEMENT_ATTEMPTS
    );
    Err(BoardError::PlacementExhausted(MAX_PLACEMENT_ATTEMPTS))
}
