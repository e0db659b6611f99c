//! コマンドライン引数。
//!
//! OpenFOAM の慣例どおり `-latestTime` のような単一ハイフンの長いオプションを受け付ける。
//! clap に渡す前に [`normalize_foam_args`] で `--latestTime` に書き換える。

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use foamke_io::{FoamCase, FoamError, TimeSelector, parse_time_ranges};
use tracing::Level;

use crate::energy::Mode;

/// 標準出力の形式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 選択した時刻ごとに全運動エネルギーを計算して報告する
#[derive(Debug, Parser)]
#[command(name = "total-kinetic-energy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Calculates and reports the total kinetic energy for the selected times", long_about = None)]
pub struct Cli {
    /// ケースディレクトリ
    #[arg(long = "case", value_name = "DIR", default_value = ".")]
    pub case: PathBuf,

    /// 既定以外のメッシュ領域
    #[arg(long)]
    pub region: Option<String>,

    /// 各時刻の rho 場を密度として使う
    #[arg(long)]
    pub compressible: bool,

    /// 時刻の指定（例: 0.1,0.3:0.5,:0.2）
    #[arg(long = "time", value_name = "RANGES")]
    pub time: Option<String>,

    /// 最新の時刻のみ
    #[arg(long = "latestTime")]
    pub latest_time: bool,

    /// 0 ディレクトリを除く
    #[arg(long = "noZero")]
    pub no_zero: bool,

    /// 0 ディレクトリを含める
    #[arg(long = "zeroTime")]
    pub zero_time: bool,

    /// constant ディレクトリを含める
    #[arg(long)]
    pub constant: bool,

    /// processor* に分割されたケースを読む
    #[arg(long)]
    pub parallel: bool,

    /// 出力形式
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// ログレベル (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// OpenFOAM 形式の引数を正規化してから解析する。
    pub fn parse_foam_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_foam_args(args))
    }

    pub fn try_parse_foam_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_foam_args(args))
    }

    pub fn mode(&self) -> Mode {
        if self.compressible {
            Mode::Compressible
        } else {
            Mode::Incompressible
        }
    }

    pub fn foam_case(&self) -> FoamCase {
        FoamCase::new(&self.case, self.region.clone())
    }

    pub fn time_selector(&self) -> Result<TimeSelector, FoamError> {
        let ranges = self.time.as_deref().map(parse_time_ranges).transpose()?;
        Ok(TimeSelector {
            ranges,
            latest_time: self.latest_time,
            no_zero: self.no_zero,
            zero_time: self.zero_time,
            constant: self.constant,
        })
    }

    /// `--log-level` の値。解釈できなければ `WARN`。
    pub fn log_level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        }
    }
}

/// `-word` を `--word` に書き換える。
///
/// 先頭の要素（プログラム名）、`--` 以降、負の数（`-0.5` など）、1 文字の短いオプションは
/// そのまま残す。
pub fn normalize_foam_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                passthrough = true;
                return arg;
            }
            let mut chars = s.chars();
            let is_long_single_dash = chars.next() == Some('-')
                && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.next().is_some();
            if is_long_single_dash {
                OsString::from(format!("-{s}"))
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use foamke_io::TimeRange;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_foam_args(std::iter::once("total-kinetic-energy").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn single_dash_options_are_normalised() {
        let args = normalize_foam_args(["prog", "-latestTime", "--format", "json", "-V", "-0.5"]);
        assert_eq!(
            args,
            vec!["prog", "--latestTime", "--format", "json", "-V", "-0.5"]
        );
    }

    #[test]
    fn arguments_after_double_dash_are_untouched() {
        let args = normalize_foam_args(["prog", "--", "-case"]);
        assert_eq!(args, vec!["prog", "--", "-case"]);
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.case, PathBuf::from("."));
        assert_eq!(cli.mode(), Mode::Incompressible);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.log_level(), Level::WARN);
        assert_eq!(cli.time_selector().unwrap(), TimeSelector::default());
        assert_eq!(cli.foam_case().region(), None);
    }

    #[test]
    fn foam_style_command_line() {
        let cli = parse(&[
            "-case",
            "/tmp/cavity",
            "-region",
            "fluid",
            "-compressible",
            "-time",
            "0.1,0.2:",
            "-noZero",
            "-parallel",
        ]);
        assert_eq!(cli.mode(), Mode::Compressible);
        assert!(cli.parallel);
        assert_eq!(cli.foam_case().region(), Some("fluid"));
        let selector = cli.time_selector().unwrap();
        assert!(selector.no_zero);
        assert_eq!(
            selector.ranges,
            Some(vec![
                TimeRange::Exact(0.1),
                TimeRange::Between {
                    lower: Some(0.2),
                    upper: None
                }
            ])
        );
    }

    #[test]
    fn bad_time_option_is_an_error() {
        let cli = parse(&["-time", "later"]);
        assert!(cli.time_selector().is_err());
    }

    #[test]
    fn unknown_log_level_falls_back_to_warn() {
        let cli = parse(&["--log-level", "verbose"]);
        assert_eq!(cli.log_level(), Level::WARN);
        assert_eq!(parse(&["--log-level", "DEBUG"]).log_level(), Level::DEBUG);
    }
}
