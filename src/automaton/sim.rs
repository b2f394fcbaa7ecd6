//! Simulation: Double-buffered automaton state.
//!
//! The simulation owns two grid arenas and flips an index to decide which
//! one holds the current generation, so stepping never allocates and
//! ownership of both buffers stays explicit.

use std::time::Duration;

use rand::Rng;

use super::grid::Grid;
use super::rule;
use crate::config::SimConfig;

/// The complete state of one automaton run.
///
/// Holds the two grid arenas, the configured frame interval, and the
/// `frozen` latch. `frozen` becomes true the first time a generation step
/// changes nothing and is never reset afterwards.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// The two grid arenas. Both always share the configured dimensions.
    grids: [Grid; 2],
    /// Index of the arena holding the current generation (0 or 1).
    current: usize,
    /// Pause between frames.
    interval: Duration,
    /// Latched once a step produces zero cell changes.
    frozen: bool,
}

impl Simulation {
    /// Create a simulation with a uniformly random initial generation.
    ///
    /// Randomness is consumed here and never again: stepping is fully
    /// deterministic.
    pub fn new<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Self {
        let mut initial = Grid::new(config.rows, config.cols);
        for cell in initial.cells_mut() {
            *cell = rng.gen();
        }
        Self::from_initial(initial, config.interval)
    }

    /// Create a simulation from a prepared initial generation.
    pub fn from_initial(initial: Grid, interval: Duration) -> Self {
        let scratch = Grid::new(initial.rows(), initial.cols());
        Self {
            grids: [initial, scratch],
            current: 0,
            interval,
            frozen: false,
        }
    }

    /// Get the grid holding the current generation.
    #[inline]
    pub fn current(&self) -> &Grid {
        &self.grids[self.current]
    }

    /// Get the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.current().rows()
    }

    /// Get the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.current().cols()
    }

    /// Get the configured frame interval.
    #[inline]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Check whether the simulation has reached the dormant terminal state.
    #[inline]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Advance one generation.
    ///
    /// The next generation is written into the off arena, then the arena
    /// index flips so the fresh generation becomes current. Returns `true`
    /// if any cell changed; a `false` return latches [`Self::is_frozen`].
    pub fn step(&mut self) -> bool {
        let (head, tail) = self.grids.split_at_mut(1);
        let (previous, next) = if self.current == 0 {
            (&head[0], &mut tail[0])
        } else {
            (&tail[0], &mut head[0])
        };

        let changed = rule::step_into(previous, next);
        self.current ^= 1;
        if !changed {
            self.frozen = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Cell;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn test_random_construction() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let sim = Simulation::new(&config, &mut rng);

        assert_eq!(sim.rows(), config.rows);
        assert_eq!(sim.cols(), config.cols);
        assert_eq!(sim.interval(), config.interval);
        assert!(!sim.is_frozen());
    }

    #[test]
    fn test_single_ready_cell_freezes_immediately() {
        let mut sim = Simulation::from_initial(Grid::new(1, 1), INTERVAL);

        assert!(!sim.step());
        assert!(sim.is_frozen());
        assert_eq!(sim.current().get(0, 0), Cell::Ready);
    }

    #[test]
    fn test_frozen_latches() {
        let mut sim = Simulation::from_initial(Grid::new(2, 2), INTERVAL);

        assert!(!sim.step());
        assert!(sim.is_frozen());

        // Further steps on a dormant grid keep the latch set.
        assert!(!sim.step());
        assert!(sim.is_frozen());
    }

    #[test]
    fn test_arena_flip_tracks_generations() {
        let mut initial = Grid::new(5, 5);
        initial.set(2, 2, Cell::Firing);
        let mut sim = Simulation::from_initial(initial, INTERVAL);

        assert!(sim.step());
        assert_eq!(sim.current().get(2, 2), Cell::Refractory);
        assert!(!sim.is_frozen());

        assert!(sim.step());
        assert!(sim.current().cells().iter().all(|&c| c == Cell::Ready));

        assert!(!sim.step());
        assert!(sim.is_frozen());
    }

    #[test]
    fn test_dimensions_invariant_across_generations() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut sim = Simulation::new(&config, &mut rng);

        for _ in 0..10 {
            sim.step();
            assert_eq!(sim.rows(), config.rows);
            assert_eq!(sim.cols(), config.cols);
        }
    }
}
