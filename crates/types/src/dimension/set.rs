use std::fmt;
use std::ops::{Div, Mul};

/// 基本次元の数: 質量・長さ・時間・温度・物質量・電流・光度。
pub const N_DIMENSIONS: usize = 7;

/// 指数を同一視する許容誤差。
const SMALL_EXPONENT: f64 = 1e-10;

/// 7 つの基本次元の指数 `[M L T Θ N I J]`。
///
/// 指数は `f64` で保持し、比較は [`SMALL_EXPONENT`] 以内の差を等しいとみなす。
/// 積は指数の和、商は指数の差になる。
#[derive(Debug, Clone, Copy)]
pub struct DimensionSet([f64; N_DIMENSIONS]);

impl DimensionSet {
    pub const DIMLESS: DimensionSet = DimensionSet::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    pub const fn new(
        mass: f64,
        length: f64,
        time: f64,
        temperature: f64,
        moles: f64,
        current: f64,
        luminous_intensity: f64,
    ) -> Self {
        Self([
            mass,
            length,
            time,
            temperature,
            moles,
            current,
            luminous_intensity,
        ])
    }

    /// 5 成分または 7 成分の指数列から構築する。5 成分の場合、電流と光度は 0 とする。
    ///
    /// それ以外の長さでは `None` を返す。
    pub fn from_exponents(exponents: &[f64]) -> Option<Self> {
        match exponents.len() {
            5 | N_DIMENSIONS => {
                let mut e = [0.0; N_DIMENSIONS];
                e[..exponents.len()].copy_from_slice(exponents);
                Some(Self(e))
            }
            _ => None,
        }
    }

    pub fn exponents(&self) -> &[f64; N_DIMENSIONS] {
        &self.0
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMLESS
    }

    /// 全指数を `p` 倍する（`dims^p`）。
    pub fn pow(self, p: f64) -> Self {
        Self(self.0.map(|e| e * p))
    }
}

impl Default for DimensionSet {
    fn default() -> Self {
        Self::DIMLESS
    }
}

impl PartialEq for DimensionSet {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= SMALL_EXPONENT)
    }
}

impl Mul for DimensionSet {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut e = self.0;
        for (a, b) in e.iter_mut().zip(rhs.0) {
            *a += b;
        }
        Self(e)
    }
}

impl Div for DimensionSet {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.pow(-1.0)
    }
}

/// `[1 2 -2 0 0 0 0]` 形式で出力する。
impl fmt::Display for DimensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            // -0 を出さない
            if *e == 0.0 {
                f.write_str("0")?;
            } else {
                write!(f, "{e}")?;
            }
        }
        f.write_str("]")
    }
}
