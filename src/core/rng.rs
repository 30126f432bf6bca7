//! RNG module - deterministic gem color generation.
//!
//! A small LCG keeps sessions reproducible from a seed, which the tests and
//! benchmarks rely on. Colors are drawn uniformly and independently per gem.

use crate::types::{GemColor, GEM_COLORS, PIECE_LEN};

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223.
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Source of random gem colors for spawned pieces.
#[derive(Debug, Clone)]
pub struct ColorWell {
    rng: SimpleRng,
    seed: u32,
}

impl ColorWell {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// The seed this well was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Draw one uniform random color.
    pub fn draw(&mut self) -> GemColor {
        GEM_COLORS[self.rng.next_range(GEM_COLORS.len() as u32) as usize]
    }

    /// Draw the color sequence for a fresh piece, leading cell first.
    pub fn draw_piece_colors(&mut self) -> [GemColor; PIECE_LEN] {
        [self.draw(), self.draw(), self.draw()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ColorWell::new(42);
        let mut b = ColorWell::new(42);
        for _ in 0..50 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(5) < 5);
        }
    }

    #[test]
    fn all_colors_appear_eventually() {
        let mut well = ColorWell::new(12345);
        let mut seen = [false; GEM_COLORS.len()];
        for _ in 0..200 {
            let color = well.draw();
            seen[GEM_COLORS.iter().position(|&c| c == color).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s), "uniform draw should hit every color");
    }
}
