use std::fmt::{Debug, Display};
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::scalar::RealScalar;
use crate::serialization::{deserialize_array_helper, serialize_seq_helper};
use crate::vector::Vector;

///
/// Describes whether the Gram-Schmidt data stored in a [`Basis`] matches
/// its current vectors.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GSOState {
    /// The Gram-Schmidt data has never been computed.
    Missing,
    /// The Gram-Schmidt data belongs to the current vectors, in their current order.
    Current,
    /// The vectors have been modified after the Gram-Schmidt data was computed,
    /// or an incremental update of the data was skipped since it was numerically
    /// degenerate.
    Stale
}

///
/// Error returned when building a [`Basis`] from data whose shape does not
/// match the dimensions of the basis.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BasisShapeError {
    /// The number of given vectors is not the dimension of the lattice.
    WrongVectorCount { expected: usize, found: usize },
    /// The vector with the given index does not have the length of the ambient space.
    WrongVectorLength { index: usize, expected: usize, found: usize },
    /// There are more basis vectors than the dimension of the ambient space,
    /// so they cannot be linearly independent.
    RankExceedsEmbedding { dim: usize, emb: usize }
}

impl Display for BasisShapeError {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BasisShapeError::WrongVectorCount { expected, found } => write!(f, "expected {} basis vectors, found {}", expected, found),
            BasisShapeError::WrongVectorLength { index, expected, found } => write!(f, "basis vector {} should have length {}, but has length {}", index, expected, found),
            BasisShapeError::RankExceedsEmbedding { dim, emb } => write!(f, "cannot have {} basis vectors in a space of dimension {}", dim, emb)
        }
    }
}

impl std::error::Error for BasisShapeError {}

///
/// An ordered family of `DIM` vectors in `T^EMB` (usually `DIM <= EMB`),
/// generating a lattice, together with their Gram-Schmidt data.
///
/// The Gram-Schmidt data consists of
///  - the coefficients `mu[i][j] = <b_i, b_j*> / <b_j*, b_j*>` for `j < i`,
///    where the `b_j*` are the Gram-Schmidt orthogonalized vectors; by convention,
///    `mu[i][i] = 1`
///  - the squared norms `|b_i*|^2`
///
/// This data is computed by [`crate::algorithms::gram_schmidt::gram_schmidt()`] resp.
/// [`crate::algorithms::gram_schmidt::compute_gso()`], and is updated incrementally
/// during LLL. Modifying the vectors through [`IndexMut`] or [`Basis::swap()`] does not
/// update it, but records in [`Basis::gso_state()`] that it is now out of date.
///
/// # Example
/// ```
/// # use lattice_lll::vector::*;
/// # use lattice_lll::basis::*;
/// # use lattice_lll::algorithms::gram_schmidt::*;
/// let mut basis = Basis::new([
///     Vector::new([1., 1., 0.]),
///     Vector::new([1., 0., 0.])
/// ]);
/// assert_eq!(GSOState::Missing, basis.gso_state());
/// compute_gso(&mut basis);
/// assert_eq!(GSOState::Current, basis.gso_state());
/// assert_eq!(0.5, basis.gso_coefficient(1, 0));
/// assert_eq!(2., basis.gso_sqr_norm(0));
/// assert_eq!(0.5, basis.gso_sqr_norm(1));
/// ```
///
#[derive(Clone)]
pub struct Basis<T: RealScalar, const DIM: usize, const EMB: usize> {
    pub(crate) vectors: [Vector<T, EMB>; DIM],
    /// lower triangle holds the Gram-Schmidt coefficients, the diagonal is 1
    pub(crate) mu: [[T; DIM]; DIM],
    pub(crate) sqr_norms: [T; DIM],
    pub(crate) gso_state: GSOState,
    /// set if the data was computed with orthonormalization, then `sqr_norms` are all `1`
    pub(crate) gso_normalized: bool
}

impl<T: RealScalar, const DIM: usize, const EMB: usize> Basis<T, DIM, EMB> {

    ///
    /// Creates a new basis from the given vectors. The Gram-Schmidt data is
    /// not computed yet.
    ///
    /// # Panics
    ///
    /// Panics if `DIM > EMB`, since then the vectors cannot be linearly independent.
    /// No further check for linear independence is performed.
    ///
    pub fn new(vectors: [Vector<T, EMB>; DIM]) -> Self {
        assert!(DIM <= EMB, "{}", BasisShapeError::RankExceedsEmbedding { dim: DIM, emb: EMB });
        Self {
            vectors: vectors,
            mu: [[T::zero(); DIM]; DIM],
            sqr_norms: [T::zero(); DIM],
            gso_state: GSOState::Missing,
            gso_normalized: false
        }
    }

    ///
    /// Creates a new basis from vectors given as rows, checking that the shape
    /// of the data matches the dimensions of the basis.
    ///
    pub fn try_from_rows<V>(rows: &[V]) -> Result<Self, BasisShapeError>
        where V: AsRef<[T]>
    {
        if DIM > EMB {
            return Err(BasisShapeError::RankExceedsEmbedding { dim: DIM, emb: EMB });
        }
        if rows.len() != DIM {
            return Err(BasisShapeError::WrongVectorCount { expected: DIM, found: rows.len() });
        }
        let mut vectors = [Vector::zero(); DIM];
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != EMB {
                return Err(BasisShapeError::WrongVectorLength { index: i, expected: EMB, found: row.len() });
            }
            for j in 0..EMB {
                vectors[i][j] = row[j];
            }
        }
        return Ok(Self::new(vectors));
    }

    pub fn vectors(&self) -> &[Vector<T, EMB>; DIM] {
        &self.vectors
    }

    pub fn gso_state(&self) -> GSOState {
        self.gso_state
    }

    ///
    /// Returns whether the Gram-Schmidt data was computed by [`crate::algorithms::gram_schmidt::gram_schmidt()`]
    /// with [`crate::algorithms::gram_schmidt::GSMode::Normalized`]. In this case, the coefficients
    /// refer to the orthonormalized vectors and all squared norms are `1`, so the data cannot be
    /// used to check or perform LLL reduction.
    ///
    pub fn is_gso_normalized(&self) -> bool {
        self.gso_normalized
    }

    ///
    /// Returns the Gram-Schmidt coefficient `mu[i][j]`, i.e. the coefficient
    /// of the `j`-th orthogonalized vector in the `i`-th basis vector.
    ///
    /// This is only meaningful for `j <= i`, and is always `1` for `i == j`.
    ///
    pub fn gso_coefficient(&self, i: usize, j: usize) -> T {
        assert!(j <= i);
        self.mu[i][j]
    }

    ///
    /// Returns the squared norm of the `i`-th Gram-Schmidt orthogonalized vector.
    ///
    pub fn gso_sqr_norm(&self, i: usize) -> T {
        self.sqr_norms[i]
    }

    pub fn gso_sqr_norms(&self) -> &[T; DIM] {
        &self.sqr_norms
    }

    ///
    /// Computes the covolume of the lattice, as the product of the norms of the
    /// Gram-Schmidt orthogonalized vectors.
    ///
    /// This is an invariant of the lattice, hence it does not change during LLL
    /// (up to rounding errors).
    ///
    /// # Panics
    ///
    /// Panics if the Gram-Schmidt data has never been computed, or if it is normalized.
    ///
    pub fn covolume(&self) -> T {
        self.assert_unnormalized_gso();
        let mut result = T::one();
        for i in 0..DIM {
            result *= self.sqr_norms[i];
        }
        return result.sqrt();
    }

    ///
    /// Swaps the `i`-th and `j`-th basis vectors.
    ///
    /// This does not update the Gram-Schmidt data. If the data is required afterwards,
    /// it must be recomputed; during LLL, use [`Basis::swap_and_update_gso()`] instead.
    ///
    pub fn swap(&mut self, i: usize, j: usize) {
        self.vectors.swap(i, j);
        self.mark_modified();
    }

    pub(crate) fn mark_modified(&mut self) {
        if self.gso_state == GSOState::Current {
            self.gso_state = GSOState::Stale;
        }
    }

    pub(crate) fn assert_gso_computed(&self) {
        assert!(self.gso_state != GSOState::Missing, "Gram-Schmidt data of the basis has not been computed");
    }

    pub(crate) fn assert_unnormalized_gso(&self) {
        self.assert_gso_computed();
        assert!(!self.gso_normalized, "Gram-Schmidt data of the basis is normalized");
    }
}

impl<T: RealScalar, const DIM: usize, const EMB: usize> Index<usize> for Basis<T, DIM, EMB> {
    type Output = Vector<T, EMB>;

    fn index(&self, index: usize) -> &Vector<T, EMB> {
        &self.vectors[index]
    }
}

impl<T: RealScalar, const DIM: usize, const EMB: usize> IndexMut<usize> for Basis<T, DIM, EMB> {

    fn index_mut(&mut self, index: usize) -> &mut Vector<T, EMB> {
        self.mark_modified();
        &mut self.vectors[index]
    }
}

impl<T: RealScalar, const DIM: usize, const EMB: usize> Debug for Basis<T, DIM, EMB> {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Basis")
            .field("vectors", &self.vectors)
            .field("gso_state", &self.gso_state)
            .field("gso_normalized", &self.gso_normalized)
            .finish()
    }
}

impl<T: RealScalar, const DIM: usize, const EMB: usize> Display for Basis<T, DIM, EMB> {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, v) in self.vectors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", v)?;
        }
        return Ok(());
    }
}

impl<T: RealScalar + Serialize, const DIM: usize, const EMB: usize> Serialize for Basis<T, DIM, EMB> {

    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serialize_seq_helper(serializer, self.vectors.iter())
    }
}

impl<'de, T: RealScalar + Deserialize<'de>, const DIM: usize, const EMB: usize> Deserialize<'de> for Basis<T, DIM, EMB> {

    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        if DIM > EMB {
            return Err(<D::Error as serde::de::Error>::custom(BasisShapeError::RankExceedsEmbedding { dim: DIM, emb: EMB }));
        }
        deserialize_array_helper(deserializer).map(Self::new)
    }
}

#[cfg(feature = "ndarray")]
impl<T: RealScalar, const DIM: usize, const EMB: usize> Basis<T, DIM, EMB> {

    ///
    /// Creates a basis from the rows of the given matrix.
    ///
    pub fn from_ndarray<S>(matrix: &ndarray::ArrayBase<S, ndarray::Ix2>) -> Result<Self, BasisShapeError>
        where S: ndarray::Data<Elem = T>
    {
        let rows = matrix.rows().into_iter().map(|row| row.iter().copied().collect::<Vec<_>>()).collect::<Vec<_>>();
        return Self::try_from_rows(&rows);
    }

    ///
    /// Returns the `DIM x EMB` matrix whose rows are the basis vectors.
    ///
    pub fn to_ndarray(&self) -> ndarray::Array2<T> {
        ndarray::Array2::from_shape_fn((DIM, EMB), |(i, j)| self.vectors[i][j])
    }
}

#[test]
fn test_try_from_rows() {
    let basis = Basis::<f64, 2, 3>::try_from_rows(&[vec![1., 1., 0.], vec![1., 0., 0.]]).unwrap();
    assert_eq!(Vector::new([1., 1., 0.]), basis[0]);
    assert_eq!(Vector::new([1., 0., 0.]), basis[1]);
    assert_eq!(GSOState::Missing, basis.gso_state());

    assert_eq!(
        BasisShapeError::WrongVectorCount { expected: 2, found: 1 },
        Basis::<f64, 2, 3>::try_from_rows(&[[1., 1., 0.]]).unwrap_err()
    );
    assert_eq!(
        BasisShapeError::WrongVectorLength { index: 1, expected: 3, found: 2 },
        Basis::<f64, 2, 3>::try_from_rows(&[vec![1., 1., 0.], vec![1., 0.]]).unwrap_err()
    );
    assert_eq!(
        BasisShapeError::RankExceedsEmbedding { dim: 3, emb: 2 },
        Basis::<f64, 3, 2>::try_from_rows(&[[1., 0.], [0., 1.], [1., 1.]]).unwrap_err()
    );
}

#[test]
#[should_panic(expected = "cannot have 3 basis vectors in a space of dimension 2")]
fn test_new_rank_exceeds_embedding() {
    Basis::<f64, 3, 2>::new([Vector::new([1., 0.]), Vector::new([0., 1.]), Vector::new([1., 1.])]);
}

#[test]
fn test_modification_marks_stale() {
    let mut basis = Basis::new([Vector::new([2., 0.]), Vector::new([1., 3.])]);
    basis.swap(0, 1);
    assert_eq!(GSOState::Missing, basis.gso_state());
    assert_eq!(Vector::new([1., 3.]), basis[0]);

    basis.gso_state = GSOState::Current;
    basis.swap(0, 1);
    assert_eq!(GSOState::Stale, basis.gso_state());

    basis.gso_state = GSOState::Current;
    let _ = basis[1][0];
    assert_eq!(GSOState::Current, basis.gso_state());
    basis[1][0] = 5.;
    assert_eq!(GSOState::Stale, basis.gso_state());
}

#[test]
#[should_panic(expected = "Gram-Schmidt data of the basis has not been computed")]
fn test_covolume_requires_gso() {
    let basis = Basis::new([Vector::new([2., 0.]), Vector::new([1., 3.])]);
    basis.covolume();
}

#[test]
fn test_serialization() {
    let basis = Basis::new([Vector::new([1., -1., 2.]), Vector::new([0., 3., 0.5])]);
    let serialized = serde_json::to_string(&basis).unwrap();
    assert_eq!("[[1.0,-1.0,2.0],[0.0,3.0,0.5]]", serialized);
    let deserialized: Basis<f64, 2, 3> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(basis.vectors(), deserialized.vectors());
    assert_eq!(GSOState::Missing, deserialized.gso_state());

    assert!(serde_json::from_str::<Basis<f64, 3, 3>>(&serialized).is_err());
    assert!(serde_json::from_str::<Basis<f64, 3, 2>>("[[1.0,0.0],[0.0,1.0],[1.0,1.0]]").is_err());
}

#[cfg(feature = "ndarray")]
#[test]
fn test_ndarray_conversion() {
    let matrix = ndarray::array![[1., 1., 1.], [-1., 0., 2.]];
    let basis = Basis::<f64, 2, 3>::from_ndarray(&matrix).unwrap();
    assert_eq!(Vector::new([-1., 0., 2.]), basis[1]);
    assert_eq!(matrix, basis.to_ndarray());
    assert!(Basis::<f64, 3, 3>::from_ndarray(&matrix).is_err());
}
