use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

///
/// Trait for the primitive floating point types that can be used as scalars
/// of [`crate::vector::Vector`] and [`crate::basis::Basis`].
///
/// All computations in this crate are done with fixed precision, i.e. there is
/// no attempt at tracking or bounding the rounding error. In particular, the
/// result of Gram-Schmidt and of LLL is only as good as the precision of the
/// chosen type allows.
///
pub trait RealScalar: Copy + Send + Sync + PartialOrd + Debug + Display + Default
    + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> + Neg<Output = Self>
    + AddAssign + SubAssign + MulAssign + DivAssign
{
    fn zero() -> Self;

    fn one() -> Self;

    ///
    /// Returns the closest representable value to the given `f64`.
    ///
    fn from_f64(x: f64) -> Self;

    fn to_f64(self) -> f64;

    fn abs(self) -> Self;

    fn sqrt(self) -> Self;

    ///
    /// Rounds to the closest integer, with ties rounded away from zero.
    ///
    fn round(self) -> Self;
}

macro_rules! impl_real_scalar {
    ($($t:ty),*) => {
        $(
            impl RealScalar for $t {

                fn zero() -> Self { 0. }

                fn one() -> Self { 1. }

                fn from_f64(x: f64) -> Self { x as $t }

                fn to_f64(self) -> f64 { self as f64 }

                fn abs(self) -> Self { <$t>::abs(self) }

                fn sqrt(self) -> Self { <$t>::sqrt(self) }

                fn round(self) -> Self { <$t>::round(self) }
            }
        )*
    };
}

impl_real_scalar!{ f32, f64 }

#[test]
fn test_round_ties_away_from_zero() {
    assert_eq!(1., RealScalar::round(0.5f64));
    assert_eq!(-1., RealScalar::round(-0.5f64));
    assert_eq!(2., RealScalar::round(2.4f32));
    assert_eq!(-3., RealScalar::round(-2.5f32));
}

#[test]
fn test_conversion() {
    assert_eq!(0.25f32, <f32 as RealScalar>::from_f64(0.25));
    assert_eq!(0.25, RealScalar::to_f64(0.25f32));
    assert_eq!(3., RealScalar::sqrt(9f64));
    assert_eq!(2., RealScalar::abs(-2f64));
}
