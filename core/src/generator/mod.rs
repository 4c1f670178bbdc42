use core::fmt;

use crate::*;
pub use random::*;

mod random;

/// Chooses where mines go once the first click is known.
pub trait MineGenerator: fmt::Debug {
    /// Returns exactly `config.mines` distinct coordinates, none within one cell of `start`.
    fn generate(&mut self, config: &GameConfig, start: Coord2) -> Vec<Coord2>;
}
