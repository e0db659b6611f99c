//! # total-kinetic-energy
//!
//! Reports the volume-integrated kinetic energy `Σ 0.5 |U|² V ρ` of a
//! finite-volume case for each selected time directory.
//!
//! In incompressible mode the density is the uniform `rho` entry of
//! `constant/transportProperties` and the dimensions of the result are
//! checked against `[1 2 -2 0 0 0 0]`. With `-compressible` the per-cell
//! `rho` field of each time directory is used instead.

pub mod app;
pub mod case;
pub mod cli;
pub mod driver;
pub mod energy;
pub mod error;
pub mod report;

pub use app::execute;
pub use cli::{Cli, OutputFormat};
pub use driver::{RunSummary, StepOutcome, process_step, run};
pub use energy::{DensitySource, Mode, total_kinetic_energy};
pub use error::EnergyError;
