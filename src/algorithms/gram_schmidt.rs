use crate::basis::{Basis, GSOState};
use crate::scalar::RealScalar;
use crate::vector::{dot, Vector};

///
/// Whether [`gram_schmidt()`] should produce an orthonormal or only an
/// orthogonal family of vectors.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GSMode {
    /// Scale each orthogonalized vector to length `1`; all squared norms are then `1`.
    Normalized,
    /// Keep the orthogonalized vectors `b_i*` as they are.
    Unnormalized
}

///
/// Gram-Schmidt on the given vectors, in index order: as soon as the `i`-th
/// vector is orthogonalized, its projection is removed from all later vectors.
/// Overwrites the vectors with their orthogonalization, and stores the coefficients
/// in `mu` and the squared norms in `sqr_norms`.
///
/// There is no reorthogonalization, so the error grows with the dimension and
/// is large if the vectors are almost linearly dependent. Linearly dependent
/// vectors lead to division by zero and thus to infinite resp. NaN entries.
///
fn gram_schmidt_impl<T, const DIM: usize, const EMB: usize>(
    vectors: &mut [Vector<T, EMB>; DIM],
    mu: &mut [[T; DIM]; DIM],
    sqr_norms: &mut [T; DIM],
    mode: GSMode
)
    where T: RealScalar
{
    for k in 0..DIM {
        mu[k][k] = T::one();
    }
    for i in 0..DIM {
        let norm_sqr = vectors[i].norm_sqr();
        match mode {
            GSMode::Normalized => {
                vectors[i] *= T::one() / norm_sqr.sqrt();
                sqr_norms[i] = T::one();
            },
            GSMode::Unnormalized => {
                sqr_norms[i] = norm_sqr;
            }
        }
        let (done, remaining) = vectors.split_at_mut(i + 1);
        let current = &done[i];
        for (j, other) in ((i + 1)..DIM).zip(remaining.iter_mut()) {
            let mut coeff = dot(other, current);
            if mode == GSMode::Unnormalized {
                coeff = coeff / sqr_norms[i];
            }
            mu[j][i] = coeff;
            *other -= *current * coeff;
        }
    }
}

///
/// Orthogonalizes the vectors of the given basis in place, using the classical
/// Gram-Schmidt process, and stores the Gram-Schmidt data in the basis.
///
/// Afterwards, the vectors of the basis are pairwise orthogonal (and have length `1`
/// if `mode` is [`GSMode::Normalized`]), so they do not generate the original lattice
/// anymore. If you only need the Gram-Schmidt data, use [`compute_gso()`] instead.
///
/// # Example
/// ```
/// # use lattice_lll::vector::*;
/// # use lattice_lll::basis::*;
/// # use lattice_lll::algorithms::gram_schmidt::*;
/// let mut basis = Basis::new([
///     Vector::new([1f64, 1., 0.]),
///     Vector::new([1f64, 0., 0.])
/// ]);
/// gram_schmidt(&mut basis, GSMode::Normalized);
/// assert!(dot(&basis[0], &basis[1]).abs() < 1e-12);
/// assert!((basis[0].norm() - 1.).abs() < 1e-12);
/// assert!((basis[1].norm() - 1.).abs() < 1e-12);
/// ```
///
pub fn gram_schmidt<T, const DIM: usize, const EMB: usize>(basis: &mut Basis<T, DIM, EMB>, mode: GSMode)
    where T: RealScalar
{
    gram_schmidt_impl(&mut basis.vectors, &mut basis.mu, &mut basis.sqr_norms, mode);
    basis.gso_state = GSOState::Current;
    basis.gso_normalized = mode == GSMode::Normalized;
}

///
/// Computes the unnormalized Gram-Schmidt data of the basis, without changing
/// its vectors.
///
/// The result is the same as the data computed by [`gram_schmidt()`] with
/// [`GSMode::Unnormalized`], since it uses the same process on a copy of the
/// vectors.
///
pub fn compute_gso<T, const DIM: usize, const EMB: usize>(basis: &mut Basis<T, DIM, EMB>)
    where T: RealScalar
{
    let mut orthogonalized = basis.vectors;
    gram_schmidt_impl(&mut orthogonalized, &mut basis.mu, &mut basis.sqr_norms, GSMode::Unnormalized);
    basis.gso_state = GSOState::Current;
    basis.gso_normalized = false;
}

#[cfg(test)]
fn assert_pairwise_orthogonal<const DIM: usize, const EMB: usize>(basis: &Basis<f64, DIM, EMB>, tolerance: f64) {
    for i in 0..DIM {
        for j in 0..DIM {
            if i != j {
                assert!(dot(&basis[i], &basis[j]).abs() < tolerance, "<b_{}, b_{}> = {}", i, j, dot(&basis[i], &basis[j]));
            }
        }
    }
}

#[test]
fn test_gram_schmidt_normalized_2d() {
    let mut basis = Basis::new([
        Vector::new([1., 1., 0.]),
        Vector::new([1., 0., 0.])
    ]);
    gram_schmidt(&mut basis, GSMode::Normalized);

    assert_pairwise_orthogonal(&basis, 1e-12);
    assert!((basis[0].norm() - 1.).abs() < 1e-12);
    assert!((basis[1].norm() - 1.).abs() < 1e-12);
    assert_eq!(1., basis.gso_sqr_norm(0));
    assert_eq!(1., basis.gso_sqr_norm(1));
    assert!((basis.gso_coefficient(1, 0) - 0.5f64.sqrt()).abs() < 1e-12);
    assert_eq!(1., basis.gso_coefficient(1, 1));
    assert_eq!(GSOState::Current, basis.gso_state());
    assert!(basis.is_gso_normalized());

    compute_gso(&mut basis);
    assert!(!basis.is_gso_normalized());
}

#[test]
fn test_gram_schmidt_unnormalized() {
    let mut basis = Basis::new([
        Vector::new([1., 1., 1.]),
        Vector::new([-1., 0., 2.]),
        Vector::new([3., 5., 6.])
    ]);
    gram_schmidt(&mut basis, GSMode::Unnormalized);

    assert_pairwise_orthogonal(&basis, 1e-12);
    for i in 0..3 {
        assert!((basis[i].norm_sqr() - basis.gso_sqr_norm(i)).abs() < 1e-12);
    }
    assert!((basis.gso_sqr_norm(0) - 3.).abs() < 1e-12);
    assert!((basis.gso_coefficient(1, 0) - 1. / 3.).abs() < 1e-12);
    assert!((basis.gso_coefficient(2, 0) - 14. / 3.).abs() < 1e-12);
    // the determinant of the input matrix is 3
    assert!((basis.covolume() - 3.).abs() < 1e-9);
}

#[test]
fn test_compute_gso_keeps_vectors() {
    let original = [
        Vector::new([1., 1., 1.]),
        Vector::new([-1., 0., 2.]),
        Vector::new([3., 5., 6.])
    ];
    let mut basis = Basis::new(original);
    compute_gso(&mut basis);
    assert_eq!(&original, basis.vectors());

    let mut orthogonalized = Basis::new(original);
    gram_schmidt(&mut orthogonalized, GSMode::Unnormalized);
    for i in 0..3 {
        assert_eq!(orthogonalized.gso_sqr_norm(i), basis.gso_sqr_norm(i));
        for j in 0..=i {
            assert_eq!(orthogonalized.gso_coefficient(i, j), basis.gso_coefficient(i, j));
        }
    }
}

#[test]
fn test_gram_schmidt_f32() {
    let mut basis = Basis::new([
        Vector::new([4f32, 0., 3.]),
        Vector::new([1f32, 2., 0.]),
        Vector::new([0f32, 1., 1.])
    ]);
    gram_schmidt(&mut basis, GSMode::Normalized);
    for i in 0..3 {
        assert!((basis[i].norm() - 1.).abs() < 1e-5);
        for j in 0..i {
            assert!(dot(&basis[i], &basis[j]).abs() < 1e-5);
        }
    }
}

#[test]
#[should_panic(expected = "Gram-Schmidt data of the basis is normalized")]
fn test_covolume_requires_unnormalized() {
    let mut basis = Basis::new([
        Vector::new([2., 0.]),
        Vector::new([1., 3.])
    ]);
    gram_schmidt(&mut basis, GSMode::Normalized);
    basis.covolume();
}
