use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::*;

/// Uniformly random placement that keeps the 3x3 zone around the first click clear.
///
/// The generator owns its RNG, so one seed chosen at process start drives every game
/// generated from it and a fixed seed reproduces the same sequence of boards.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        log::debug!("Mine generator seeded with {}", seed);
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: &GameConfig, start: Coord2) -> Vec<Coord2> {
        let (width, height) = config.size;
        let mut candidates: Vec<Coord2> = (0..width)
            .flat_map(|x| (0..height).map(move |y| (x, y)))
            .filter(|&coords| !is_adjacent_or_same(coords, start))
            .collect();

        let wanted = config.mines as usize;
        if wanted > candidates.len() {
            log::warn!(
                "Cannot fit {} mines outside the safe zone, only {} cells available",
                wanted,
                candidates.len()
            );
        }

        let (chosen, _) = candidates.partial_shuffle(&mut self.rng, wanted);
        let mut mines = chosen.to_vec();
        // keeps the output independent of how partial_shuffle orders its picks
        mines.sort_unstable();
        debug_assert!(mines.iter().all(|&coords| !is_adjacent_or_same(coords, start)));
        log::trace!("Placed mines at {:?}", mines);
        mines
    }
}
