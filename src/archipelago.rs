//! Archipelago composition root.
//!
//! Owns the validated configuration and the generated grid, and caches the
//! island count so repeated queries never rerun the flood fill. The count
//! only goes stale when the grid is regenerated.

use thiserror::Error;

use crate::grid::Grid;
use crate::islands;
use crate::terrain;

/// Highest accepted seed value.
pub const MAX_SEED: i64 = 0xFFFF;

/// A constraint violated while building a [`Config`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be greater than 0. n = {0}")]
    GridSize(usize),
    #[error("seed must be between 0 and {MAX_SEED}. seed = {0}")]
    Seed(i64),
    #[error("sea level must be between -1 and 1. sea_level = {0}")]
    SeaLevel(f64),
    #[error("weathering must be between 1 and 5. weathering = {0}")]
    Weathering(u32),
}

/// Validated, immutable generation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    grid_size: usize,
    seed: i64,
    sea_level: f64,
    weathering: u32,
}

impl Config {
    /// Validate and build a configuration.
    ///
    /// Constraints are checked in order and the first violation is returned:
    /// `grid_size > 0`, `seed` in `[0, 65535]`, `sea_level` in `[-1, 1]`,
    /// `weathering` in `[1, 5]`.
    pub fn new(
        grid_size: usize,
        seed: i64,
        sea_level: f64,
        weathering: u32,
    ) -> Result<Self, ConfigError> {
        if grid_size == 0 {
            return Err(ConfigError::GridSize(grid_size));
        }
        if !(0..=MAX_SEED).contains(&seed) {
            return Err(ConfigError::Seed(seed));
        }
        if !(-1.0..=1.0).contains(&sea_level) {
            return Err(ConfigError::SeaLevel(sea_level));
        }
        if !(1..=5).contains(&weathering) {
            return Err(ConfigError::Weathering(weathering));
        }
        Ok(Self {
            grid_size,
            seed,
            sea_level,
            weathering,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn sea_level(&self) -> f64 {
        self.sea_level
    }

    /// Octave count for the noise field; fewer octaves mean smoother coasts.
    pub fn weathering(&self) -> u32 {
        self.weathering
    }
}

/// A generated land/water map with a lazily counted number of islands.
pub struct Archipelago {
    config: Config,
    grid: Grid,
    num_islands: usize,
    counted: bool,
}

impl Archipelago {
    /// Generate the map for an already-validated configuration.
    pub fn new(config: Config) -> Self {
        let grid = terrain::generate(&config);
        Self {
            config,
            grid,
            num_islands: 0,
            counted: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read-only view of the map, for export and inspection.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether the cached island count is current for this grid.
    pub fn is_counted(&self) -> bool {
        self.counted
    }

    /// Number of islands on the current grid.
    ///
    /// Counts on first call after (re)generation and returns the cached
    /// value afterwards; the flood fill never runs twice on the same grid.
    pub fn island_count(&mut self) -> usize {
        if !self.counted {
            self.num_islands = islands::count_islands(&mut self.grid);
            self.counted = true;
        }
        self.num_islands
    }

    /// Rebuild the grid from the configuration and drop the cached count.
    pub fn regenerate(&mut self) {
        self.grid = terrain::generate(&self.config);
        self.num_islands = 0;
        self.counted = false;
    }
}

/// Generate and count one parameter combination.
///
/// The unit of work the sweep driver dispatches per combination; returns the
/// island count together with the archipelago so the map can still be
/// exported.
pub fn run_one(
    seed: i64,
    weathering: u32,
    sea_level: f64,
    grid_size: usize,
) -> Result<(usize, Archipelago), ConfigError> {
    let config = Config::new(grid_size, seed, sea_level, weathering)?;
    let mut archipelago = Archipelago::new(config);
    let count = archipelago.island_count();
    Ok((count, archipelago))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_out_of_range_values() {
        assert_eq!(
            Config::new(0, 0, 0.0, 5).unwrap_err(),
            ConfigError::GridSize(0)
        );
        assert_eq!(
            Config::new(100, -1, 0.0, 5).unwrap_err(),
            ConfigError::Seed(-1)
        );
        assert_eq!(
            Config::new(100, 65536, 0.0, 5).unwrap_err(),
            ConfigError::Seed(65536)
        );
        assert_eq!(
            Config::new(100, 0, 1.5, 5).unwrap_err(),
            ConfigError::SeaLevel(1.5)
        );
        assert_eq!(
            Config::new(100, 0, -1.5, 5).unwrap_err(),
            ConfigError::SeaLevel(-1.5)
        );
        assert_eq!(
            Config::new(100, 0, 0.0, 0).unwrap_err(),
            ConfigError::Weathering(0)
        );
        assert_eq!(
            Config::new(100, 0, 0.0, 6).unwrap_err(),
            ConfigError::Weathering(6)
        );
    }

    #[test]
    fn test_config_accepts_boundary_values() {
        assert!(Config::new(1, 0, 0.0, 1).is_ok());
        assert!(Config::new(100, 65535, 0.0, 5).is_ok());
        assert!(Config::new(100, 0, -1.0, 1).is_ok());
        assert!(Config::new(100, 0, 1.0, 5).is_ok());
    }

    #[test]
    fn test_error_messages_name_the_value() {
        let err = Config::new(100, 70000, 0.0, 5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "seed must be between 0 and 65535. seed = 70000"
        );
    }

    #[test]
    fn test_generate_and_count_are_deterministic() {
        let config = Config::new(48, 42, 0.0, 3).unwrap();
        let mut a = Archipelago::new(config);
        let mut b = Archipelago::new(config);

        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.island_count(), b.island_count());
    }

    #[test]
    fn test_count_is_cached_and_grid_untouched_by_second_call() {
        let config = Config::new(48, 7, 0.0, 5).unwrap();
        let mut archipelago = Archipelago::new(config);
        assert!(!archipelago.is_counted());

        let first = archipelago.island_count();
        assert!(archipelago.is_counted());
        let snapshot = archipelago.grid().clone();

        let second = archipelago.island_count();
        assert_eq!(first, second);
        assert_eq!(archipelago.grid(), &snapshot);
    }

    #[test]
    fn test_regenerate_resets_the_count() {
        let config = Config::new(48, 9, 0.0, 5).unwrap();
        let mut archipelago = Archipelago::new(config);
        let first = archipelago.island_count();
        assert!(archipelago.is_counted());

        archipelago.regenerate();
        assert!(!archipelago.is_counted());

        // Same configuration, so the recount lands on the same value.
        assert_eq!(archipelago.island_count(), first);
    }

    #[test]
    fn test_max_sea_level_has_no_islands() {
        let (count, _) = run_one(0, 5, 1.0, 32).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_min_sea_level_has_land() {
        let (count, archipelago) = run_one(0, 5, -1.0, 32).unwrap();
        assert!(count >= 1);
        assert!(archipelago.grid().land_cell_count() > 0);
    }

    #[test]
    fn test_run_one_propagates_config_errors() {
        assert!(run_one(-1, 5, 0.0, 32).is_err());
    }
}
