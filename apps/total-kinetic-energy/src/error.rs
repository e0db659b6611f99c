use foamke_fields::FieldError;
use foamke_io::FoamError;
use foamke_types::DimensionSet;

/// 運動エネルギー計算の致命的エラー。
#[derive(Debug, thiserror::Error)]
pub enum EnergyError {
    #[error(
        "Incorrect dimensions of totalKE: {computed} should be {expected}\n\n\
         Dimensions in calculation are:\n\
         U   {velocity}\n\
         rho {density}\n\
         V   {volume}"
    )]
    DimensionMismatch {
        computed: DimensionSet,
        expected: DimensionSet,
        velocity: DimensionSet,
        density: DimensionSet,
        volume: DimensionSet,
    },

    #[error(transparent)]
    Foam(#[from] FoamError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("cannot write report: {0}")]
    Report(#[from] std::io::Error),
}
