use foamke_types::tensor::Vector;
use foamke_types::{DimensionSet, FieldValue};

use crate::error::FieldError;

/// セル中心に値を持つフィールド（内部場のみ）。
///
/// 境界値は保持しない。運動エネルギーのような体積積分には内部場だけで足りる。
#[derive(Debug, Clone, PartialEq)]
pub struct VolField<T: FieldValue> {
    name: String,
    dimensions: DimensionSet,
    internal: Vec<T>,
}

pub type VolScalarField = VolField<f64>;
pub type VolVectorField = VolField<Vector>;

impl<T: FieldValue> VolField<T> {
    pub fn new(name: impl Into<String>, dimensions: DimensionSet, internal: Vec<T>) -> Self {
        Self {
            name: name.into(),
            dimensions,
            internal,
        }
    }

    /// 全セルに同じ値を持つフィールド。
    pub fn uniform(name: impl Into<String>, dimensions: DimensionSet, value: T, n_cells: usize) -> Self {
        Self::new(name, dimensions, vec![value; n_cells])
    }

    /// OpenFOAM のクラス名（`volScalarField` / `volVectorField`）。
    pub fn class_name() -> String {
        format!("vol{}Field", T::TYPE_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> DimensionSet {
        self.dimensions
    }

    pub fn values(&self) -> &[T] {
        &self.internal
    }

    pub fn len(&self) -> usize {
        self.internal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.internal.is_empty()
    }

    /// セル数が `n_cells` と一致することを確認する。
    pub fn check_size(&self, n_cells: usize) -> Result<(), FieldError> {
        if self.internal.len() == n_cells {
            Ok(())
        } else {
            Err(FieldError::SizeMismatch {
                name: self.name.clone(),
                expected: n_cells,
                got: self.internal.len(),
            })
        }
    }

    /// セルごとの自己内積 `x · x`。
    pub fn mag_sqr(&self) -> Vec<f64> {
        self.internal.iter().map(FieldValue::mag_sqr).collect()
    }

    /// 別ドメインのフィールドを末尾に連結する（分割ケースの再構成用）。
    pub fn append(&mut self, other: VolField<T>) {
        self.internal.extend(other.internal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VELOCITY: DimensionSet = DimensionSet::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0, 0.0);

    #[test]
    fn class_names_follow_foam_convention() {
        assert_eq!(VolScalarField::class_name(), "volScalarField");
        assert_eq!(VolVectorField::class_name(), "volVectorField");
    }

    #[test]
    fn uniform_field_mag_sqr() {
        let u = VolVectorField::uniform("U", VELOCITY, Vector::new(2.0, 0.0, 0.0), 3);
        assert_eq!(u.len(), 3);
        assert_eq!(u.mag_sqr(), vec![4.0; 3]);
        assert_eq!(u.dimensions(), VELOCITY);
    }

    #[test]
    fn check_size_reports_mismatch() {
        let rho = VolScalarField::uniform("rho", DimensionSet::DIMLESS, 1.0, 4);
        assert!(rho.check_size(4).is_ok());
        let err = rho.check_size(5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "field rho: size mismatch, expected 5 cells, got 4"
        );
    }

    #[test]
    fn append_concatenates_in_order() {
        let mut a = VolScalarField::new("rho", DimensionSet::DIMLESS, vec![1.0, 2.0]);
        let b = VolScalarField::new("rho", DimensionSet::DIMLESS, vec![3.0]);
        a.append(b);
        assert_eq!(a.values(), &[1.0, 2.0, 3.0]);
    }
}
