use std::ops::{Add, Mul, Neg, Sub};

use crate::tensor::Vector;

/// フィールド値として使用可能な型の共通インターフェース。
///
/// スーパートレイトバウンドとして加算・減算・スカラー倍・符号反転を要求し、
/// 零元（加法単位元）とノルム、および自己内積 `x · x` を定義する。
pub trait FieldValue:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self> + Neg<Output = Self>
{
    /// OpenFOAM のフィールドクラス名の接頭辞（`volScalarField` の `Scalar` など）。
    const TYPE_NAME: &'static str;

    /// 加法単位元を返す。`Self::zero() + x == x` をすべての `x` について保証する。
    fn zero() -> Self;

    /// Euclidean ノルム。常に非負。
    fn mag(&self) -> f64;

    /// 自己内積 `x · x`。運動エネルギー `0.5 (U & U)` の計算に用いる。
    fn mag_sqr(&self) -> f64;
}

// ===== f64 =====

impl FieldValue for f64 {
    const TYPE_NAME: &'static str = "Scalar";

    fn zero() -> Self {
        0.0_f64
    }

    fn mag(&self) -> f64 {
        self.abs()
    }

    fn mag_sqr(&self) -> f64 {
        self * self
    }
}

// ===== Vector =====

impl FieldValue for Vector {
    const TYPE_NAME: &'static str = "Vector";

    fn zero() -> Self {
        Vector::zero()
    }

    fn mag(&self) -> f64 {
        Vector::mag(self)
    }

    fn mag_sqr(&self) -> f64 {
        self.dot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_zero_mag_is_zero() {
        assert!(f64::zero().mag() < 1e-14);
    }

    #[test]
    fn test_vector_zero_mag_is_zero() {
        assert!(<Vector as FieldValue>::zero().mag() < 1e-14);
    }

    #[test]
    fn test_vector_mag_sqr_matches_mag() {
        let v = Vector::new(3.0, 4.0, 12.0);
        let expected = FieldValue::mag(&v).powi(2);
        let got = v.mag_sqr();
        let rel_err = (got - expected).abs() / expected;
        assert!(rel_err < 1e-14, "relative error {rel_err} >= 1e-14");
    }

    #[test]
    fn test_scalar_mag_sqr() {
        assert!(((-1.5_f64).mag_sqr() - 2.25).abs() < 1e-14);
    }
}
