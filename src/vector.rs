use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::scalar::RealScalar;
use crate::serialization::{deserialize_array_helper, serialize_seq_helper};

///
/// A vector of `N` real numbers, stored inline.
///
/// Vectors have value semantics, i.e. they are [`Copy`] and all arithmetic
/// operations either produce a new vector or modify the left-hand side in place.
///
/// # Example
/// ```
/// # use lattice_lll::vector::*;
/// let a = Vector::new([1., 1., 0.]);
/// let b = Vector::new([1., 0., 0.]);
/// assert_eq!(Vector::new([0., 1., 0.]), a - b);
/// assert_eq!(1., dot(&a, &b));
/// ```
///
#[derive(Clone, Copy, PartialEq)]
pub struct Vector<T: RealScalar, const N: usize> {
    data: [T; N]
}

impl<T: RealScalar, const N: usize> Vector<T, N> {

    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    pub fn zero() -> Self {
        Self { data: [T::zero(); N] }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        N
    }

    ///
    /// Returns the squared euclidean norm, i.e. `dot(self, self)`.
    ///
    pub fn norm_sqr(&self) -> T {
        dot(self, self)
    }

    pub fn norm(&self) -> T {
        self.norm_sqr().sqrt()
    }
}

///
/// Computes the standard inner product `sum_i a[i] * b[i]`.
///
pub fn dot<T: RealScalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T {
    let mut result = T::zero();
    for i in 0..N {
        result += a.data[i] * b.data[i];
    }
    return result;
}

impl<T: RealScalar, const N: usize> From<[T; N]> for Vector<T, N> {

    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T: RealScalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: RealScalar, const N: usize> IndexMut<usize> for Vector<T, N> {

    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: RealScalar, const N: usize> AddAssign<&Vector<T, N>> for Vector<T, N> {

    fn add_assign(&mut self, rhs: &Vector<T, N>) {
        for i in 0..N {
            self.data[i] += rhs.data[i];
        }
    }
}

impl<T: RealScalar, const N: usize> AddAssign for Vector<T, N> {

    fn add_assign(&mut self, rhs: Vector<T, N>) {
        *self += &rhs;
    }
}

impl<T: RealScalar, const N: usize> SubAssign<&Vector<T, N>> for Vector<T, N> {

    fn sub_assign(&mut self, rhs: &Vector<T, N>) {
        for i in 0..N {
            self.data[i] -= rhs.data[i];
        }
    }
}

impl<T: RealScalar, const N: usize> SubAssign for Vector<T, N> {

    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        *self -= &rhs;
    }
}

impl<T: RealScalar, const N: usize> MulAssign<T> for Vector<T, N> {

    fn mul_assign(&mut self, rhs: T) {
        for x in &mut self.data {
            *x *= rhs;
        }
    }
}

impl<T: RealScalar, const N: usize> Add for Vector<T, N> {
    type Output = Vector<T, N>;

    fn add(mut self, rhs: Vector<T, N>) -> Vector<T, N> {
        self += &rhs;
        return self;
    }
}

impl<T: RealScalar, const N: usize> Sub for Vector<T, N> {
    type Output = Vector<T, N>;

    fn sub(mut self, rhs: Vector<T, N>) -> Vector<T, N> {
        self -= &rhs;
        return self;
    }
}

impl<T: RealScalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T, N>;

    fn mul(mut self, rhs: T) -> Vector<T, N> {
        self *= rhs;
        return self;
    }
}

impl<T: RealScalar, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;

    fn neg(mut self) -> Vector<T, N> {
        for x in &mut self.data {
            *x = -*x;
        }
        return self;
    }
}

impl<T: RealScalar, const N: usize> Debug for Vector<T, N> {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: RealScalar, const N: usize> Display for Vector<T, N> {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

impl<T: RealScalar + Serialize, const N: usize> Serialize for Vector<T, N> {

    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serialize_seq_helper(serializer, self.data.iter())
    }
}

impl<'de, T: RealScalar + Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {

    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        deserialize_array_helper(deserializer).map(Self::new)
    }
}

#[test]
fn test_arithmetic() {
    let a = Vector::new([1., 2., 3.]);
    let b = Vector::new([-1., 0., 2.]);
    assert_eq!(Vector::new([0., 2., 5.]), a + b);
    assert_eq!(Vector::new([2., 2., 1.]), a - b);
    assert_eq!(Vector::new([2., 4., 6.]), a * 2.);
    assert_eq!(Vector::new([-1., -2., -3.]), -a);

    let mut c = a;
    c -= &b;
    c *= 0.5;
    c += b;
    assert_eq!(Vector::new([0., 1., 2.5]), c);
    // `a` is unaffected by operations on its copy
    assert_eq!(Vector::new([1., 2., 3.]), a);
}

#[test]
fn test_dot_and_norm() {
    let a = Vector::new([3., 4.]);
    let b = Vector::new([-4., 3.]);
    assert_eq!(0., dot(&a, &b));
    assert_eq!(25., a.norm_sqr());
    assert_eq!(5., a.norm());
    assert_eq!(0., Vector::<f32, 5>::zero().norm());
}

#[test]
fn test_display() {
    let a = Vector::new([1.5, -2.]);
    assert_eq!("[1.5, -2]", format!("{}", a));
    assert_eq!("[1.5, -2.0]", format!("{:?}", a));
}

#[test]
fn test_serialization() {
    let a = Vector::new([1.5, -2., 0.]);
    let serialized = serde_json::to_string(&a).unwrap();
    assert_eq!("[1.5,-2.0,0.0]", serialized);
    assert_eq!(a, serde_json::from_str::<Vector<f64, 3>>(&serialized).unwrap());
    assert!(serde_json::from_str::<Vector<f64, 3>>("[1.5,-2.0]").is_err());
    assert!(serde_json::from_str::<Vector<f64, 3>>("[1.5,-2.0,0.0,1.0]").is_err());
}

#[test]
fn test_serialization_non_human_readable() {
    let a = Vector::new([1f64, -0.25]);
    let serializer = serde_assert::Serializer::builder().is_human_readable(false).build();
    let tokens = a.serialize(&serializer).unwrap();
    let mut deserializer = serde_assert::Deserializer::builder(tokens).is_human_readable(false).build();
    assert_eq!(a, Vector::<f64, 2>::deserialize(&mut deserializer).unwrap());
}
