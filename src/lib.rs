//! Archipelago generation library
//!
//! Generates binary land/water maps from coherent noise shaped by a radial
//! falloff and counts the connected land regions. Re-exports modules for use
//! by the binaries.

pub mod archipelago;
pub mod export;
pub mod grid;
pub mod islands;
pub mod noise_field;
pub mod terrain;

pub use archipelago::{run_one, Archipelago, Config, ConfigError, MAX_SEED};
pub use grid::{CellState, Grid};
