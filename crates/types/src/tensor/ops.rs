/// ベクトルの算術演算。
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::vector::Vector;

impl Add for Vector {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vector::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl Sub for Vector {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vector::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl Neg for Vector {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    /// スカラー倍（右）: `v * s`。
    #[inline]
    fn mul(self, s: f64) -> Self {
        let [x, y, z] = *self.as_array();
        Vector::new(x * s, y * s, z * s)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    /// スカラー倍（左）: `s * v`。`v * s` に委譲する。
    #[inline]
    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

impl Mul<Vector> for Vector {
    type Output = f64;

    /// 内積（単縮約）。[`Vector::dot`] に委譲する。
    #[inline]
    fn mul(self, rhs: Vector) -> f64 {
        self.dot(&rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Self;

    #[inline]
    fn div(self, s: f64) -> Self {
        self * s.recip()
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vector {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        *self = *self * s;
    }
}

impl DivAssign<f64> for Vector {
    #[inline]
    fn div_assign(&mut self, s: f64) {
        *self = *self / s;
    }
}
