//! 時刻ループ。

use foamke_io::Instant;
use foamke_types::DimensionedScalar;
use tracing::{debug, info};

use crate::case::{CaseGeometry, DictionaryLookup, FieldLoader};
use crate::energy::{DensitySource, Mode, total_kinetic_energy};
use crate::error::EnergyError;
use crate::report::Reporter;

pub const VELOCITY: &str = "U";
pub const DENSITY: &str = "rho";
pub const TRANSPORT_PROPERTIES: &str = "transportProperties";

/// 1 時刻の処理結果。
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    NoVelocity,
    NoDensity,
    Computed(DimensionedScalar),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub computed: usize,
    pub skipped: usize,
}

/// 選択された時刻を昇順に処理し、最後に `End` を報告する。
///
/// 欠けている `U`（および圧縮性モードの `rho`）はその時刻を飛ばすだけだが、
/// それ以外のエラーは実行全体を中断する。
pub fn run<C>(
    times: &[Instant],
    mode: Mode,
    case: &C,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary, EnergyError>
where
    C: FieldLoader + DictionaryLookup + CaseGeometry + ?Sized,
{
    let mut summary = RunSummary::default();
    for time in times {
        reporter.time(time)?;
        match process_step(time, mode, case, reporter)? {
            StepOutcome::Computed(_) => summary.computed += 1,
            StepOutcome::NoVelocity | StepOutcome::NoDensity => summary.skipped += 1,
        }
    }
    reporter.end()?;
    info!(
        "processed {} time(s): {} computed, {} skipped",
        times.len(),
        summary.computed,
        summary.skipped
    );
    Ok(summary)
}

/// 時刻 `time` について `U` と密度を読み、運動エネルギーを求めて報告する。
pub fn process_step<C>(
    time: &Instant,
    mode: Mode,
    case: &C,
    reporter: &mut dyn Reporter,
) -> Result<StepOutcome, EnergyError>
where
    C: FieldLoader + DictionaryLookup + CaseGeometry + ?Sized,
{
    if !case.has_field(VELOCITY, time) {
        debug!("no {VELOCITY} at time {time}");
        return Ok(StepOutcome::NoVelocity);
    }
    reporter.reading_field(VELOCITY)?;
    let velocity = case.read_vector(VELOCITY, time)?;

    let Some(density) = resolve_density(time, mode, case, reporter)? else {
        return Ok(StepOutcome::NoDensity);
    };

    let energy = total_kinetic_energy(&velocity, &density, case.cell_volumes(), case.reducer())?;
    reporter.total_kinetic_energy(&energy)?;
    Ok(StepOutcome::Computed(energy))
}

fn resolve_density<C>(
    time: &Instant,
    mode: Mode,
    case: &C,
    reporter: &mut dyn Reporter,
) -> Result<Option<DensitySource>, EnergyError>
where
    C: FieldLoader + DictionaryLookup + ?Sized,
{
    match mode {
        Mode::Compressible => {
            if !case.has_field(DENSITY, time) {
                reporter.missing_field(DENSITY)?;
                return Ok(None);
            }
            reporter.reading_field(DENSITY)?;
            Ok(Some(DensitySource::Field(case.read_scalar(DENSITY, time)?)))
        }
        Mode::Incompressible => {
            reporter.reading_dictionary(TRANSPORT_PROPERTIES)?;
            let rho = case.dimensioned_scalar(TRANSPORT_PROPERTIES, DENSITY)?;
            Ok(Some(DensitySource::Uniform(rho)))
        }
    }
}
