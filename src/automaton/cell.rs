//! Cell: The atomic unit of the automaton.
//!
//! A cell is a closed three-state enumeration. There is deliberately no
//! integer-backed constructor in the public API: the only ways to obtain a
//! `Cell` are the named variants and uniform random sampling, so corrupted
//! states are unrepresentable.

use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// The state of a single automaton cell.
///
/// States cycle Ready → Firing → Refractory → Ready. A ready cell ignites
/// only when exactly two of its in-bounds Moore neighbors are firing; the
/// refractory stage prevents a cell from re-firing immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Quiescent. Ignites next generation iff exactly two neighbors are firing.
    #[default]
    Ready,
    /// Firing this generation. Always refractory next generation.
    Firing,
    /// Recovering after a firing. Always ready next generation.
    Refractory,
}

impl Distribution<Cell> for Standard {
    /// Sample one of the three states independently and uniformly.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        match rng.gen_range(0..3u8) {
            0 => Cell::Ready,
            1 => Cell::Firing,
            _ => Cell::Refractory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_is_ready() {
        assert_eq!(Cell::default(), Cell::Ready);
    }

    #[test]
    fn test_sampling_covers_all_states() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let mut seen = [false; 3];

        for _ in 0..100 {
            match rng.gen::<Cell>() {
                Cell::Ready => seen[0] = true,
                Cell::Firing => seen[1] = true,
                Cell::Refractory => seen[2] = true,
            }
        }

        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_sampling_is_deterministic_with_seed() {
        let a: Vec<Cell> = StdRng::seed_from_u64(42).sample_iter(Standard).take(32).collect();
        let b: Vec<Cell> = StdRng::seed_from_u64(42).sample_iter(Standard).take(32).collect();
        assert_eq!(a, b);
    }
}
