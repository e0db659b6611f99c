//! セル値として用いる 3 成分ベクトル型。

mod ops;
mod vector;

pub use vector::Vector;
