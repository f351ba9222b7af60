use crate::*;
pub use random::*;

mod random;

/// Strategy that fills a fresh mine layout for the given configuration.
pub trait BombPlacer {
    fn place(self, config: BoardConfig) -> Result<MineLayout>;
}
