/// 3 次元ベクトル `(x, y, z)`。
///
/// 速度場のセル値、メッシュの点座標・面積ベクトルとして用いる。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector([f64; 3]);

impl Vector {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    #[inline]
    pub const fn zero() -> Self {
        Self([0.0; 3])
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0[2]
    }

    #[inline]
    pub fn as_array(&self) -> &[f64; 3] {
        &self.0
    }

    /// 内積 `a · b`。OpenFOAM の `a & b` に相当する。
    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.0[0] * other.0[0] + self.0[1] * other.0[1] + self.0[2] * other.0[2]
    }

    /// クロス積: `a × b → Vector`
    #[inline]
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    /// Euclidean ノルム。
    #[inline]
    pub fn mag(&self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl From<[f64; 3]> for Vector {
    fn from(a: [f64; 3]) -> Self {
        Self(a)
    }
}
