//! 体積重み付き運動エネルギー `Σ 0.5 (U·U) V ρ`。

use foamke_fields::{GlobalReduce, VolScalarField, VolVectorField};
use foamke_types::dimension::{Energy, Volume};
use foamke_types::{Dimension, DimensionSet, DimensionedScalar};

use crate::error::EnergyError;

/// 結果の名前。
pub const TOTAL_KE: &str = "totalKE";

/// 密度の与え方。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// 各時刻の `rho` 場を読む。
    Compressible,
    /// `transportProperties` の一様な `rho` を使う。
    #[default]
    Incompressible,
}

/// 1 時刻分の密度。
#[derive(Debug, Clone, PartialEq)]
pub enum DensitySource {
    Field(VolScalarField),
    Uniform(DimensionedScalar),
}

impl DensitySource {
    pub fn dimensions(&self) -> DimensionSet {
        match self {
            DensitySource::Field(f) => f.dimensions(),
            DensitySource::Uniform(s) => s.dimensions,
        }
    }

    #[inline]
    fn at(&self, cell: usize) -> f64 {
        match self {
            DensitySource::Field(f) => f.values()[cell],
            DensitySource::Uniform(s) => s.value,
        }
    }
}

/// 全セルの運動エネルギーを `reducer` で総和する。
///
/// 一様密度の場合のみ、結果の次元が `U² ρ V` と一致することを確かめる。
pub fn total_kinetic_energy(
    velocity: &VolVectorField,
    density: &DensitySource,
    cell_volumes: &[f64],
    reducer: &dyn GlobalReduce,
) -> Result<DimensionedScalar, EnergyError> {
    let n_cells = cell_volumes.len();
    velocity.check_size(n_cells)?;
    if let DensitySource::Field(rho) = density {
        rho.check_size(n_cells)?;
    }

    let per_cell: Vec<f64> = velocity
        .mag_sqr()
        .iter()
        .zip(cell_volumes)
        .enumerate()
        .map(|(i, (u2, v))| 0.5 * u2 * v * density.at(i))
        .collect();

    let energy = DimensionedScalar::with_dimension::<Energy>(TOTAL_KE, reducer.sum(&per_cell));

    if let DensitySource::Uniform(rho) = density {
        check_dimensions(&energy, velocity.dimensions(), rho.dimensions)?;
    }
    Ok(energy)
}

/// `dims(U)² · dims(rho) · dims(V)` が `energy` の次元と等しいか確かめる。
pub fn check_dimensions(
    energy: &DimensionedScalar,
    velocity: DimensionSet,
    density: DimensionSet,
) -> Result<(), EnergyError> {
    let computed = velocity * velocity * density * Volume::SET;
    if computed == energy.dimensions {
        Ok(())
    } else {
        Err(EnergyError::DimensionMismatch {
            computed,
            expected: energy.dimensions,
            velocity,
            density,
            volume: Volume::SET,
        })
    }
}
