use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::FoamError;

/// ケース内の時刻ディレクトリ。`name` はディレクトリ名そのもの（`0.1`, `1e-05` など）。
#[derive(Debug, Clone, PartialEq)]
pub struct Instant {
    pub value: f64,
    pub name: String,
}

pub const CONSTANT: &str = "constant";

impl Instant {
    pub fn new(value: f64, name: impl Into<String>) -> Self {
        Self {
            value,
            name: name.into(),
        }
    }

    /// `constant` ディレクトリを表す擬似時刻。
    pub fn constant() -> Self {
        Self::new(0.0, CONSTANT)
    }

    pub fn is_constant(&self) -> bool {
        self.name == CONSTANT
    }

    fn is_zero(&self) -> bool {
        !self.is_constant() && self.value == 0.0
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// 名前が数値として読めるサブディレクトリを時刻の昇順で返す。
pub fn find_times(dir: &Path) -> Result<Vec<Instant>, FoamError> {
    let entries = fs::read_dir(dir).map_err(|source| FoamError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut times = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| FoamError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.path().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if let Ok(value) = name.parse::<f64>() {
            if value.is_finite() {
                times.push(Instant::new(value, name));
            }
        }
    }
    times.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
    Ok(times)
}

/// `-time` に与える時刻指定の 1 要素。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeRange {
    /// 単一の値。最も近い時刻を選ぶ。
    Exact(f64),
    /// `a:b`, `:b`, `a:`。両端を含む。
    Between { lower: Option<f64>, upper: Option<f64> },
}

impl TimeRange {
    fn contains(&self, value: f64) -> bool {
        match *self {
            TimeRange::Exact(v) => v == value,
            TimeRange::Between { lower, upper } => {
                lower.is_none_or(|lo| value >= lo) && upper.is_none_or(|hi| value <= hi)
            }
        }
    }
}

/// `0.1,0.3:0.5,:0.2` 形式（カンマまたは空白区切り）を解釈する。
pub fn parse_time_ranges(text: &str) -> Result<Vec<TimeRange>, FoamError> {
    let invalid = || FoamError::InvalidTimeRange(text.to_string());
    let bound = |s: &str| -> Result<Option<f64>, FoamError> {
        let s = s.trim();
        if s.is_empty() {
            Ok(None)
        } else {
            s.parse::<f64>().map(Some).map_err(|_| invalid())
        }
    };

    let ranges = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|item| match item.split_once(':') {
            Some((lo, hi)) => Ok(TimeRange::Between {
                lower: bound(lo)?,
                upper: bound(hi)?,
            }),
            None => bound(item)?.map(TimeRange::Exact).ok_or_else(invalid),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if ranges.is_empty() {
        return Err(invalid());
    }
    Ok(ranges)
}

/// 標準の時刻選択オプション（`-time`, `-latestTime`, `-noZero`, `-zeroTime`, `-constant`）。
///
/// 何も指定しなければ全時刻を選ぶ。`-latestTime` は `-time` より優先する。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSelector {
    pub ranges: Option<Vec<TimeRange>>,
    pub latest_time: bool,
    pub no_zero: bool,
    pub zero_time: bool,
    pub constant: bool,
}

impl TimeSelector {
    /// `times` から選択された時刻を昇順で返す。`-constant` 指定時は先頭に `constant` を置く。
    pub fn select(&self, times: &[Instant]) -> Vec<Instant> {
        let mut times: Vec<&Instant> = times.iter().filter(|t| !t.is_constant()).collect();
        times.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));

        let explicit = self.ranges.is_some() || self.latest_time;
        let mut selected = vec![!explicit; times.len()];

        if let Some(ranges) = &self.ranges {
            for range in ranges {
                match *range {
                    TimeRange::Exact(v) => {
                        if let Some(i) = closest(&times, v) {
                            selected[i] = true;
                        }
                    }
                    TimeRange::Between { .. } => {
                        for (i, t) in times.iter().enumerate() {
                            if range.contains(t.value) {
                                selected[i] = true;
                            }
                        }
                    }
                }
            }
        }

        if self.latest_time {
            selected.iter_mut().for_each(|s| *s = false);
            if let Some(last) = selected.last_mut() {
                *last = true;
            }
        }

        for (i, t) in times.iter().enumerate() {
            if t.is_zero() {
                if self.no_zero {
                    selected[i] = false;
                } else if self.zero_time {
                    selected[i] = true;
                }
            }
        }

        let mut result = Vec::new();
        if self.constant {
            result.push(Instant::constant());
        }
        result.extend(
            times
                .into_iter()
                .zip(selected)
                .filter_map(|(t, s)| s.then(|| t.clone())),
        );
        result
    }

    /// [`select`](Self::select) と同じだが、何も選ばれなければ `constant` を返す。
    pub fn select0(&self, times: &[Instant]) -> Vec<Instant> {
        let selected = self.select(times);
        if selected.is_empty() {
            warn!("No time specified or available, selecting 'constant'");
            vec![Instant::constant()]
        } else {
            selected
        }
    }
}

fn closest(times: &[&Instant], value: f64) -> Option<usize> {
    times
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (a.value - value)
                .abs()
                .partial_cmp(&(b.value - value).abs())
                .unwrap_or(Ordering::Equal)
        })
        .map(|(i, _)| i)
}
