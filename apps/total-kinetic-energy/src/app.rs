use std::io::Write;

use anyhow::{Context, Result};
use foamke_io::{DEFAULT_REGION, FoamCase, Instant, TimeSelector};
use tracing::info;

use crate::case::{
    CaseGeometry, DecomposedCase, DictionaryLookup, FieldLoader, SerialCase, TimeEnumerator,
};
use crate::cli::{Cli, OutputFormat};
use crate::driver::{RunSummary, run};
use crate::report::{JsonReporter, Reporter, TextReporter};

/// コマンドラインに従ってケースを開き、選択時刻の報告を `out` に書く。
pub fn execute(cli: &Cli, out: &mut dyn Write) -> Result<RunSummary> {
    let foam_case = cli.foam_case();
    let selector = cli.time_selector().context("invalid -time option")?;
    info!(
        "case {} (region {})",
        foam_case.root().display(),
        foam_case.region().unwrap_or(DEFAULT_REGION)
    );

    let mut reporter: Box<dyn Reporter + '_> = match cli.format {
        OutputFormat::Text => Box::new(TextReporter::new(out)),
        OutputFormat::Json => Box::new(JsonReporter::new(out)),
    };

    if cli.parallel {
        let case = DecomposedCase::open(foam_case.clone()).with_context(|| {
            format!("cannot open decomposed case {}", foam_case.root().display())
        })?;
        info!("reading {} processor domains", case.n_domains());
        report_case(cli, &foam_case, &case, &selector, reporter.as_mut())
    } else {
        let case = SerialCase::open(foam_case.clone())
            .with_context(|| format!("cannot open case {}", foam_case.root().display()))?;
        report_case(cli, &foam_case, &case, &selector, reporter.as_mut())
    }
}

fn report_case<C>(
    cli: &Cli,
    foam_case: &FoamCase,
    case: &C,
    selector: &TimeSelector,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary>
where
    C: FieldLoader + DictionaryLookup + CaseGeometry + TimeEnumerator,
{
    let times: Vec<Instant> = selector.select0(&case.times()?);
    if let Some(first) = times.first() {
        reporter.start(foam_case.region(), first)?;
    }
    Ok(run(&times, cli.mode(), case, reporter)?)
}
