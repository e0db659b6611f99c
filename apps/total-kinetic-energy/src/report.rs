//! 標準出力への報告。
//!
//! [`TextReporter`] は OpenFOAM のユーティリティと同じ行を出し、[`JsonReporter`] は
//! 時刻ごとに 1 行の JSON レコードを出す。診断ログは `tracing` 経由で標準エラーへ出るので
//! ここでは扱わない。

use std::io::{self, Write};

use foamke_io::Instant;
use foamke_types::DimensionedScalar;
use serde::Serialize;

/// ドライバから呼ばれる出力先。
pub trait Reporter {
    /// 実行開始時に 1 回、最初に選択された時刻とともに呼ばれる。
    fn start(&mut self, _region: Option<&str>, _first_time: &Instant) -> io::Result<()> {
        Ok(())
    }
    fn time(&mut self, time: &Instant) -> io::Result<()>;
    fn reading_field(&mut self, name: &str) -> io::Result<()>;
    fn reading_dictionary(&mut self, name: &str) -> io::Result<()>;
    fn missing_field(&mut self, name: &str) -> io::Result<()>;
    fn total_kinetic_energy(&mut self, energy: &DimensionedScalar) -> io::Result<()>;
    fn end(&mut self) -> io::Result<()>;
}

/// `%g` と同じ 6 桁有効数字の表記。
///
/// 指数が -5 未満または 6 以上なら `1.5e+07` 形式、それ以外は固定小数点で末尾の 0 を削る。
pub fn format_scalar(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }

    // 丸めた後の指数で判定する（999999.5 → 1e+06）
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse::<i32>().unwrap_or(0)),
        None => (sci.clone(), 0),
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(&mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// OpenFOAM 形式のテキスト出力。
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn start(&mut self, region: Option<&str>, first_time: &Instant) -> io::Result<()> {
        writeln!(self.out, "Create time\n")?;
        match region {
            Some(region) => writeln!(self.out, "Create mesh {region} for time = {first_time}\n"),
            None => writeln!(self.out, "Create mesh for time = {first_time}\n"),
        }
    }

    fn time(&mut self, time: &Instant) -> io::Result<()> {
        writeln!(self.out, "Time = {time}")
    }

    fn reading_field(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "Reading field {name}")
    }

    fn reading_dictionary(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "Reading {name} dictionary\n")
    }

    fn missing_field(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "    no {name} field\n")
    }

    fn total_kinetic_energy(&mut self, energy: &DimensionedScalar) -> io::Result<()> {
        writeln!(
            self.out,
            "    Total kinetic energy: {} [J]\n",
            format_scalar(energy.value)
        )
    }

    fn end(&mut self) -> io::Result<()> {
        writeln!(self.out, "End\n")?;
        self.out.flush()
    }
}

/// 時刻ごとの処理結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    NoVelocity,
    NoDensity,
    Computed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct EnergyRecord {
    time: String,
    time_value: f64,
    status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_kinetic_energy: Option<f64>,
}

/// 1 時刻 1 行の JSON Lines 出力。
///
/// 時刻の記録は次の時刻が始まるか [`end`](Reporter::end) が呼ばれた時点で書き出す。
/// 致命的エラーで中断した時刻は出力しない。
pub struct JsonReporter<W: Write> {
    out: W,
    pending: Option<EnergyRecord>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, pending: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_pending(&mut self) -> io::Result<()> {
        if let Some(record) = self.pending.take() {
            serde_json::to_writer(&mut self.out, &record)?;
            writeln!(self.out)?;
        }
        Ok(())
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn time(&mut self, time: &Instant) -> io::Result<()> {
        self.flush_pending()?;
        self.pending = Some(EnergyRecord {
            time: time.name.clone(),
            time_value: time.value,
            status: StepStatus::NoVelocity,
            total_kinetic_energy: None,
        });
        Ok(())
    }

    fn reading_field(&mut self, _name: &str) -> io::Result<()> {
        Ok(())
    }

    fn reading_dictionary(&mut self, _name: &str) -> io::Result<()> {
        Ok(())
    }

    fn missing_field(&mut self, _name: &str) -> io::Result<()> {
        if let Some(record) = &mut self.pending {
            record.status = StepStatus::NoDensity;
        }
        Ok(())
    }

    fn total_kinetic_energy(&mut self, energy: &DimensionedScalar) -> io::Result<()> {
        if let Some(record) = &mut self.pending {
            record.status = StepStatus::Computed;
            record.total_kinetic_energy = Some(energy.value);
        }
        Ok(())
    }

    fn end(&mut self) -> io::Result<()> {
        self.flush_pending()?;
        self.out.flush()
    }
}
