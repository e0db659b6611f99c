//! 物理次元（SI 基本単位の指数）の表現。
//!
//! - [`DimensionSet`][]: 実行時に扱う 7 成分の指数ベクトル（ファイルから読む次元）
//! - [`DimensionedScalar`][]: 名前・次元・値を持つスカラー
//! - [`Dim`][] / [`Dimension`][]: `typenum` による型レベルの次元。コード中で固定される次元に使う
mod dimensioned;
mod markers;
mod set;

pub use dimensioned::DimensionedScalar;
pub use markers::{Density, Dim, DimMul, Dimension, Dimless, Energy, Prod, Velocity, Volume};
pub use set::{DimensionSet, N_DIMENSIONS};
