//! Fundamental type system for foamke
//!
//! Provides dimension-aware quantities, the vector type, and field value traits.

pub mod dimension;
pub mod tensor;
pub mod traits;

pub use dimension::{Dimension, DimensionSet, DimensionedScalar};
pub use traits::FieldValue;
