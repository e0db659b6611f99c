use std::fmt;

use super::markers::Dimension;
use super::set::DimensionSet;

/// 名前と次元を伴うスカラー値（`transportProperties` の `rho` など）。
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionedScalar {
    pub name: String,
    pub dimensions: DimensionSet,
    pub value: f64,
}

impl DimensionedScalar {
    pub fn new(name: impl Into<String>, dimensions: DimensionSet, value: f64) -> Self {
        Self {
            name: name.into(),
            dimensions,
            value,
        }
    }

    /// 型レベルの次元 `D` を持つ値を構築する。
    pub fn with_dimension<D: Dimension>(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, D::SET, value)
    }

    pub fn dimensionless(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, DimensionSet::DIMLESS, value)
    }
}

/// `rho [1 -3 0 0 0 0 0] 1.2`
impl fmt::Display for DimensionedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.dimensions, self.value)
    }
}
