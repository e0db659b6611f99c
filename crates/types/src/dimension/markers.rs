use std::marker::PhantomData;
use std::ops::Add;

use typenum::{Integer, N1, N2, N3, P1, P2, P3, Sum, Z0};

use super::set::DimensionSet;

/// 型レベルの次元 `[M L T Θ N I J]`。各指数は `typenum` の符号付き整数型。
///
/// 値を持たないマーカー型で、[`Dimension::SET`] を通して実行時の
/// [`DimensionSet`] に変換する。
pub struct Dim<M, L, T, Th = Z0, N = Z0, I = Z0, J = Z0>(PhantomData<(M, L, T, Th, N, I, J)>);

impl<M, L, T, Th, N, I, J> Default for Dim<M, L, T, Th, N, I, J> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

/// コンパイル時に決まる次元。
///
/// 指数が整数型でない `Dim` は実装を持たない:
///
/// ```compile_fail
/// use foamke_types::dimension::{Dim, Dimension};
/// let _ = <Dim<f64, f64, f64> as Dimension>::SET;
/// ```
pub trait Dimension {
    const SET: DimensionSet;
}

impl<M, L, T, Th, N, I, J> Dimension for Dim<M, L, T, Th, N, I, J>
where
    M: Integer,
    L: Integer,
    T: Integer,
    Th: Integer,
    N: Integer,
    I: Integer,
    J: Integer,
{
    const SET: DimensionSet = DimensionSet::new(
        M::I32 as f64,
        L::I32 as f64,
        T::I32 as f64,
        Th::I32 as f64,
        N::I32 as f64,
        I::I32 as f64,
        J::I32 as f64,
    );
}

/// 次元の積（指数の和）を型レベルで求める。
pub trait DimMul<Rhs> {
    type Output;
}

impl<A0, A1, A2, A3, A4, A5, A6, B0, B1, B2, B3, B4, B5, B6> DimMul<Dim<B0, B1, B2, B3, B4, B5, B6>>
    for Dim<A0, A1, A2, A3, A4, A5, A6>
where
    A0: Add<B0>,
    A1: Add<B1>,
    A2: Add<B2>,
    A3: Add<B3>,
    A4: Add<B4>,
    A5: Add<B5>,
    A6: Add<B6>,
{
    type Output = Dim<
        Sum<A0, B0>,
        Sum<A1, B1>,
        Sum<A2, B2>,
        Sum<A3, B3>,
        Sum<A4, B4>,
        Sum<A5, B5>,
        Sum<A6, B6>,
    >;
}

/// `A · B` の次元。
pub type Prod<A, B> = <A as DimMul<B>>::Output;

pub type Dimless = Dim<Z0, Z0, Z0>;
/// `[0 1 -1 0 0 0 0]` m/s
pub type Velocity = Dim<Z0, P1, N1>;
/// `[0 3 0 0 0 0 0]` m³
pub type Volume = Dim<Z0, P3, Z0>;
/// `[1 -3 0 0 0 0 0]` kg/m³
pub type Density = Dim<P1, N3, Z0>;
/// `[1 2 -2 0 0 0 0]` J
pub type Energy = Dim<P1, P2, N2>;
