use std::cmp::max;

use crate::algorithms::gram_schmidt::compute_gso;
use crate::basis::{Basis, GSOState};
use crate::computation::{ComputationController, DontObserve};
use crate::scalar::RealScalar;

///
/// Contains [`delta::estimate_delta()`], a heuristic for finding the largest
/// `delta` for which LLL produces a reduced basis.
///
pub mod delta;

///
/// Absolute tolerance used by [`is_size_reduced()`], i.e. a basis is considered
/// size-reduced if all `|mu[i][j]| <= 1/2 + SIZE_REDUCTION_TOLERANCE`.
///
pub const SIZE_REDUCTION_TOLERANCE: f64 = 1e-9;

///
/// Absolute tolerance used by [`lovasz_condition()`].
///
pub const LOVASZ_TOLERANCE: f64 = 1e-9;

///
/// If the squared norm of the new orthogonalized vector after a swap is below
/// this value, the incremental update of the Gram-Schmidt data is skipped, see
/// [`Basis::swap_and_update_gso()`].
///
pub const DEGENERATE_NORM_THRESHOLD: f64 = 1e-9;

///
/// Maximal number of swaps performed by [`lll()`]. This bound is only reached
/// if the Gram-Schmidt data became stale, which can happen for linearly dependent
/// vectors.
///
pub const MAX_SWAPS: usize = 100000;

///
/// Returned by [`Basis::swap_and_update_gso()`] if the basis vectors have been
/// swapped, but the Gram-Schmidt data could not be updated, since the new
/// orthogonalized vector would be (numerically) zero.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegenerateGSOUpdate;

///
/// Statistics about a run of [`lll_with_controller()`].
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LLLStats {
    /// How often a multiple of a basis vector was subtracted from a later one
    pub size_reductions: usize,
    /// How often two adjacent basis vectors were swapped
    pub swaps: usize,
    /// How many of these swaps could not update the Gram-Schmidt data, see [`DegenerateGSOUpdate`]
    pub degenerate_swaps: usize,
    /// Whether the algorithm stopped early since [`MAX_SWAPS`] swaps were performed
    pub swap_budget_exhausted: bool
}

///
/// Checks whether all Gram-Schmidt coefficients `mu[i][j]`, `j < i`, of the basis
/// are at most `1/2` in absolute value (up to [`SIZE_REDUCTION_TOLERANCE`]).
///
/// This uses the Gram-Schmidt data stored in the basis, which must be unnormalized.
///
/// # Panics
///
/// Panics if the Gram-Schmidt data has never been computed, or if it was computed
/// with [`crate::algorithms::gram_schmidt::GSMode::Normalized`]. If it is
/// [`GSOState::Stale`], it is used nevertheless.
///
pub fn is_size_reduced<T, const DIM: usize, const EMB: usize>(basis: &Basis<T, DIM, EMB>) -> bool
    where T: RealScalar
{
    basis.assert_unnormalized_gso();
    let bound = T::from_f64(0.5 + SIZE_REDUCTION_TOLERANCE);
    for i in 1..DIM {
        for j in 0..i {
            // also fails for NaN
            if !(basis.mu[i][j].abs() <= bound) {
                return false;
            }
        }
    }
    return true;
}

///
/// Checks whether the Lovasz condition `delta |b_(k - 1)*|^2 <= |b_k*|^2 + mu[k][k - 1]^2 |b_(k - 1)*|^2`
/// holds for all `k` (up to [`LOVASZ_TOLERANCE`]).
///
/// This uses the Gram-Schmidt data stored in the basis, which must be unnormalized.
///
/// # Panics
///
/// Panics if the Gram-Schmidt data has never been computed, or if it is normalized.
///
pub fn lovasz_condition<T, const DIM: usize, const EMB: usize>(basis: &Basis<T, DIM, EMB>, delta: T) -> bool
    where T: RealScalar
{
    basis.assert_unnormalized_gso();
    let tolerance = T::from_f64(LOVASZ_TOLERANCE);
    for k in 1..DIM {
        let norm_prev_sqr = basis.sqr_norms[k - 1];
        let mu = basis.mu[k][k - 1];
        let lhs = delta * norm_prev_sqr;
        let rhs = basis.sqr_norms[k] + mu * mu * norm_prev_sqr;
        if !(lhs <= rhs + tolerance) {
            return false;
        }
    }
    return true;
}

///
/// Checks whether the basis is `delta`-LLL-reduced, i.e. both [`is_size_reduced()`]
/// and [`lovasz_condition()`] hold.
///
pub fn is_lll_reduced<T, const DIM: usize, const EMB: usize>(basis: &Basis<T, DIM, EMB>, delta: T) -> bool
    where T: RealScalar
{
    lovasz_condition(basis, delta) && is_size_reduced(basis)
}

impl<T: RealScalar, const DIM: usize, const EMB: usize> Basis<T, DIM, EMB> {

    ///
    /// Swaps the basis vectors `k - 1` and `k`, and updates the Gram-Schmidt data
    /// accordingly, without recomputing it.
    ///
    /// More concretely, if `B_i = |b_i*|^2` and `mu = mu[k][k - 1]`, then after swapping
    /// ```text
    ///   B'_(k - 1) = B_k + mu^2 B_(k - 1)
    ///   B'_k = B_k B_(k - 1) / B'_(k - 1)
    ///   mu' = mu B_(k - 1) / B'_(k - 1)
    /// ```
    /// the coefficients w.r.t. earlier vectors are exchanged, and the coefficients
    /// `mu[i][k - 1]`, `mu[i][k]` of later vectors are transformed linearly. This takes
    /// time `O(DIM)` instead of `O(DIM^2 EMB)`.
    ///
    /// If `B'_(k - 1)` is smaller than [`DEGENERATE_NORM_THRESHOLD`] or NaN (e.g. since one of
    /// the vectors was zero when the data was computed), the vectors are still
    /// swapped, but the Gram-Schmidt data is left as it is and marked as stale, and
    /// `Err(DegenerateGSOUpdate)` is returned.
    ///
    /// # Panics
    ///
    /// Panics if `k == 0` or `k >= DIM`, or if the Gram-Schmidt data has never been computed
    /// or is normalized.
    ///
    pub fn swap_and_update_gso(&mut self, k: usize) -> Result<(), DegenerateGSOUpdate> {
        assert!(k >= 1 && k < DIM);
        self.assert_unnormalized_gso();
        self.vectors.swap(k - 1, k);

        let km1 = k - 1;
        let mu = self.mu[k][km1];
        let norm_k_sqr = self.sqr_norms[k];
        let norm_km1_sqr = self.sqr_norms[km1];

        let new_norm_km1_sqr = norm_k_sqr + mu * mu * norm_km1_sqr;
        // also catches NaN
        if !(new_norm_km1_sqr.abs() >= T::from_f64(DEGENERATE_NORM_THRESHOLD)) {
            self.gso_state = GSOState::Stale;
            return Err(DegenerateGSOUpdate);
        }
        let new_mu = mu * norm_km1_sqr / new_norm_km1_sqr;

        self.sqr_norms[km1] = new_norm_km1_sqr;
        self.sqr_norms[k] = (norm_k_sqr * norm_km1_sqr) / new_norm_km1_sqr;
        self.mu[k][km1] = new_mu;

        for j in 0..km1 {
            let tmp = self.mu[km1][j];
            self.mu[km1][j] = self.mu[k][j];
            self.mu[k][j] = tmp;
        }

        for i in (k + 1)..DIM {
            let t = self.mu[i][k];
            self.mu[i][k] = self.mu[i][km1] - mu * t;
            self.mu[i][km1] = t + new_mu * self.mu[i][k];
        }
        return Ok(());
    }
}

///
/// Size-reduces the `k`-th basis vector w.r.t. all previous ones, by subtracting
/// the closest integer multiple, and updates the `k`-th row of the Gram-Schmidt
/// coefficients. Returns the number of subtracted vectors.
///
fn size_reduce<T, const DIM: usize, const EMB: usize>(basis: &mut Basis<T, DIM, EMB>, k: usize) -> usize
    where T: RealScalar
{
    let half = T::from_f64(0.5);
    let mut reductions = 0;
    for j in (0..k).rev() {
        let mu_kj = basis.mu[k][j];
        if mu_kj.abs() > half {
            let factor = mu_kj.round();
            let subtract = basis.vectors[j] * factor;
            basis.vectors[k] -= subtract;
            basis.mu[k][j] -= factor;
            for l in 0..j {
                let correction = factor * basis.mu[j][l];
                basis.mu[k][l] -= correction;
            }
            reductions += 1;
        }
    }
    return reductions;
}

///
/// LLL-reduces the given basis, and returns the reduced basis together with its
/// Gram-Schmidt data. The input basis is not modified.
///
/// The result generates the same lattice as the input, and is `delta`-LLL-reduced,
/// i.e. satisfies [`is_lll_reduced()`], unless the input vectors are (almost) linearly
/// dependent. In that case, see [`lll_with_controller()`] for how this is detected.
///
/// `delta` should be in `(1/4, 1)`. Larger values give a stronger reduction, but
/// require more swaps. For values outside of this range, the result is not guaranteed
/// to be reduced, and the algorithm might not terminate for `delta > 1`.
///
/// # Example
/// ```
/// # use lattice_lll::vector::*;
/// # use lattice_lll::basis::*;
/// # use lattice_lll::algorithms::lll::*;
/// let basis = Basis::new([
///     Vector::new([1., 1., 1.]),
///     Vector::new([-1., 0., 2.]),
///     Vector::new([3., 5., 6.])
/// ]);
/// let reduced = lll(&basis, 0.99);
/// assert!(is_lll_reduced(&reduced, 0.99));
/// assert_eq!(Vector::new([0., 1., 0.]), reduced[0]);
/// ```
///
pub fn lll<T, const DIM: usize, const EMB: usize>(basis: &Basis<T, DIM, EMB>, delta: T) -> Basis<T, DIM, EMB>
    where T: RealScalar
{
    lll_with_controller(basis, delta, DontObserve).0
}

///
/// LLL-reduces the given basis, as [`lll()`], and additionally returns some statistics.
///
/// The Gram-Schmidt data is computed once at the start, and then only updated
/// incrementally (see [`Basis::swap_and_update_gso()`]), so numerical errors can
/// accumulate.
///
/// # Degenerate input
///
/// If the input vectors are linearly dependent, a swap may produce an orthogonalized
/// vector of (almost) zero length. In this case, the Gram-Schmidt data is not updated,
/// the swap is counted in [`LLLStats::degenerate_swaps`] and the algorithm continues
/// with the stale data. The resulting basis then has [`GSOState::Stale`]. To ensure
/// termination in this case, the algorithm stops after [`MAX_SWAPS`] swaps.
///
/// # Explanation of logging output
///
/// If the passed computation controller accepts the logging, it will receive the following symbols:
///  - `s` means that two adjacent basis vectors were swapped
///  - `!` means that a swap could not update the Gram-Schmidt data
///  - `(budget)` means that the algorithm stopped since [`MAX_SWAPS`] was reached
///  - `(delta=x)` means that the given `delta` is outside of `(1/4, 1)`
///
pub fn lll_with_controller<T, const DIM: usize, const EMB: usize, Controller>(basis: &Basis<T, DIM, EMB>, delta: T, controller: Controller) -> (Basis<T, DIM, EMB>, LLLStats)
    where T: RealScalar,
        Controller: ComputationController
{
    controller.run_computation(format_args!("lll(dim={}, emb={}) ", DIM, EMB), |controller| {
        if !(delta > T::from_f64(0.25) && delta < T::one()) {
            log_progress!(controller, "(delta={})", delta);
        }

        let mut result = basis.clone();
        compute_gso(&mut result);
        let mut stats = LLLStats::default();

        let mut k = 1;
        while k < DIM {
            stats.size_reductions += size_reduce(&mut result, k);

            let mu = result.mu[k][k - 1];
            if result.sqr_norms[k] >= (delta - mu * mu) * result.sqr_norms[k - 1] {
                k += 1;
            } else if stats.swaps == MAX_SWAPS {
                log_progress!(controller, "(budget)");
                stats.swap_budget_exhausted = true;
                break;
            } else {
                stats.swaps += 1;
                match result.swap_and_update_gso(k) {
                    Ok(()) => {
                        log_progress!(controller, "s");
                    },
                    Err(DegenerateGSOUpdate) => {
                        log_progress!(controller, "!");
                        stats.degenerate_swaps += 1;
                    }
                }
                k = max(k - 1, 1);
            }
        }
        return (result, stats);
    })
}

#[cfg(test)]
use crate::vector::{dot, Vector};
#[cfg(test)]
use crate::algorithms::gram_schmidt::{gram_schmidt, GSMode};
#[cfg(test)]
use crate::computation::RecordProgress;

///
/// Asserts that both bases generate the same lattice, by checking that each vector
/// of one basis is an integral linear combination of the other basis.
///
#[cfg(test)]
fn assert_same_lattice<const N: usize>(lhs: &Basis<f64, N, N>, rhs: &Basis<f64, N, N>) {
    fn assert_contained<const N: usize>(lattice: &Basis<f64, N, N>, vectors: &Basis<f64, N, N>) {
        for v in vectors.vectors() {
            // solve `sum_j x_j lattice[j] = v` by Gaussian elimination with partial pivoting
            let mut system = [[0.; N]; N];
            let mut rhs = [0.; N];
            for i in 0..N {
                for j in 0..N {
                    system[i][j] = lattice[j][i];
                }
                rhs[i] = v[i];
            }
            for col in 0..N {
                let pivot = (col..N).max_by(|a, b| system[*a][col].abs().total_cmp(&system[*b][col].abs())).unwrap();
                system.swap(col, pivot);
                rhs.swap(col, pivot);
                assert!(system[col][col].abs() > 1e-9, "lattice basis is singular");
                for row in (col + 1)..N {
                    let factor = system[row][col] / system[col][col];
                    for j in col..N {
                        system[row][j] -= factor * system[col][j];
                    }
                    rhs[row] -= factor * rhs[col];
                }
            }
            let mut solution = [0.; N];
            for row in (0..N).rev() {
                let mut value = rhs[row];
                for j in (row + 1)..N {
                    value -= system[row][j] * solution[j];
                }
                solution[row] = value / system[row][row];
            }
            for x in solution {
                assert!((x - x.round()).abs() < 1e-6, "{:?} is not in the lattice generated by {:?}", v, lattice);
            }
        }
    }
    assert_contained(lhs, rhs);
    assert_contained(rhs, lhs);
}

///
/// Asserts that the Gram-Schmidt data maintained in the basis matches the data
/// recomputed from its current vectors.
///
#[cfg(test)]
fn assert_gso_consistent<const DIM: usize, const EMB: usize>(basis: &Basis<f64, DIM, EMB>) {
    assert_eq!(GSOState::Current, basis.gso_state());
    let mut recomputed = basis.clone();
    compute_gso(&mut recomputed);
    for i in 0..DIM {
        let expected = recomputed.gso_sqr_norm(i);
        assert!((expected - basis.gso_sqr_norm(i)).abs() <= 1e-8 * f64::max(1., expected.abs()), "|b_{}*|^2 is {} but should be {}", i, basis.gso_sqr_norm(i), expected);
        for j in 0..i {
            let expected = recomputed.gso_coefficient(i, j);
            assert!((expected - basis.gso_coefficient(i, j)).abs() <= 1e-8 * f64::max(1., expected.abs()), "mu[{}][{}] is {} but should be {}", i, j, basis.gso_coefficient(i, j), expected);
        }
    }
}

#[cfg(test)]
fn example_basis() -> Basis<f64, 3, 3> {
    Basis::new([
        Vector::new([1., 1., 1.]),
        Vector::new([-1., 0., 2.]),
        Vector::new([3., 5., 6.])
    ])
}

#[test]
fn test_lll_3d() {
    let original = example_basis();
    let mut initial = original.clone();
    compute_gso(&mut initial);

    let reduced = lll(&original, 0.99);
    assert!(is_size_reduced(&reduced));
    assert!(lovasz_condition(&reduced, 0.99));
    assert!(is_lll_reduced(&reduced, 0.99));
    assert!((initial.covolume() - reduced.covolume()).abs() < 1e-6);
    assert_gso_consistent(&reduced);
    assert_same_lattice(&original, &reduced);

    assert_eq!(Vector::new([0., 1., 0.]), reduced[0]);
    assert_eq!(Vector::new([1., 0., 1.]), reduced[1]);
    assert_eq!(Vector::new([-2., 0., 1.]), reduced[2]);

    // the input is not modified
    assert_eq!(example_basis().vectors(), original.vectors());
    assert_eq!(GSOState::Missing, original.gso_state());
}

#[test]
fn test_lll_2d() {
    let original = Basis::new([
        Vector::new([5., 9.]),
        Vector::new([11., 20.])
    ]);
    let reduced = lll(&original, 0.9);
    assert_same_lattice(&original, &reduced);
    assert_eq!(1., reduced[0].norm_sqr());
    assert_eq!(1., reduced[1].norm_sqr());

    let original = Basis::new([
        Vector::new([10., 8.]),
        Vector::new([27., 22.])
    ]);
    let reduced = lll(&original, 0.9);
    assert_same_lattice(&original, &reduced);
    assert_eq!(4., reduced[0].norm_sqr());
    assert_eq!(5., reduced[1].norm_sqr());
}

#[test]
fn test_lll_3d_short_vector() {
    // the shortest vector is shorter than half the second successive minimum,
    // so LLL will find it (for delta = 0.999 > 0.75)
    let original = Basis::new([
        Vector::new([72., 0., 8432.]),
        Vector::new([0., 9., 7344.]),
        Vector::new([0., 0., 16864.])
    ]);
    let reduced = lll(&original, 0.999);
    assert!(is_lll_reduced(&reduced, 0.999));
    assert_gso_consistent(&reduced);
    assert_same_lattice(&original, &reduced);
    assert_eq!(144. * 144., reduced[0].norm_sqr());
    assert_eq!(72. * 72. + 279. * 279., reduced[1].norm_sqr());
    assert_eq!(72. * 72. * 2. + 272. * 272., reduced[2].norm_sqr());
}

#[test]
fn test_lll_embedded() {
    let original = Basis::new([
        Vector::new([1., 0., 0., 31.]),
        Vector::new([0., 1., 0., 59.]),
        Vector::new([0., 0., 1., 26.])
    ]);
    let mut initial = original.clone();
    compute_gso(&mut initial);
    let reduced = lll(&original, 0.75);
    assert!(is_lll_reduced(&reduced, 0.75));
    assert!((initial.covolume() - reduced.covolume()).abs() < 1e-6 * initial.covolume());
    for v in reduced.vectors() {
        assert!(v.norm_sqr() < original[1].norm_sqr());
    }
}

#[test]
fn test_lll_random() {
    let mut rng = oorandom::Rand64::new(1);
    let deltas = [0.3, 0.5, 0.75, 0.9, 0.99];
    for _ in 0..200 {
        let mut original = Basis::<f64, 5, 5>::new([Vector::zero(); 5]);
        for i in 0..5 {
            for j in 0..5 {
                original[i][j] = rng.rand_range(0..101) as f64 - 50.;
            }
        }
        let mut initial = original.clone();
        compute_gso(&mut initial);
        if initial.gso_sqr_norms().iter().any(|x| !(*x > 1e-6)) {
            continue;
        }
        let delta = deltas[rng.rand_range(0..deltas.len() as u64) as usize];

        let (reduced, stats) = lll_with_controller(&original, delta, DontObserve);
        assert_eq!(0, stats.degenerate_swaps);
        assert!(!stats.swap_budget_exhausted);
        assert!(is_lll_reduced(&reduced, delta));
        assert_gso_consistent(&reduced);
        let mut recomputed = reduced.clone();
        compute_gso(&mut recomputed);
        assert!(is_lll_reduced(&recomputed, delta));
        assert!((initial.covolume() - reduced.covolume()).abs() < 1e-6 * initial.covolume());
        assert_same_lattice(&original, &reduced);

        let reduced_again = lll(&reduced, delta);
        assert!(is_lll_reduced(&reduced_again, delta));
        assert!((initial.covolume() - reduced_again.covolume()).abs() < 1e-6 * initial.covolume());
        assert_same_lattice(&original, &reduced_again);
    }
}

#[test]
fn test_lll_f32() {
    let original = Basis::new([
        Vector::new([1f32, 1., 1.]),
        Vector::new([-1f32, 0., 2.]),
        Vector::new([3f32, 5., 6.])
    ]);
    let reduced = lll(&original, 0.75);
    assert!(is_lll_reduced(&reduced, 0.75));
    assert!((reduced.covolume() - 3.).abs() < 1e-4);
}

#[test]
fn test_lll_stats_and_logging() {
    let controller = RecordProgress::default();
    let (reduced, stats) = lll_with_controller(&example_basis(), 0.99, controller.clone());
    assert!(is_lll_reduced(&reduced, 0.99));
    assert_eq!(2, stats.swaps);
    assert_eq!(0, stats.degenerate_swaps);
    assert!(stats.size_reductions > 0);
    assert_eq!("lll(dim=3, emb=3) ssdone\n", controller.recorded());

    let controller = RecordProgress::default();
    let _ = lll_with_controller(&example_basis(), 0.2, controller.clone());
    assert!(controller.recorded().starts_with("lll(dim=3, emb=3) (delta=0.2)"));
}

#[test]
fn test_lll_degenerate() {
    let original = Basis::new([
        Vector::new([1., 0.]),
        Vector::new([2., 0.])
    ]);
    let controller = RecordProgress::default();
    let (reduced, stats) = lll_with_controller(&original, 0.75, controller.clone());
    assert_eq!(GSOState::Stale, reduced.gso_state());
    assert!(stats.degenerate_swaps > 0);
    assert!(stats.swap_budget_exhausted);
    assert_eq!(MAX_SWAPS, stats.swaps);
    assert!(controller.recorded().contains("!(budget)"));
    // the lattice generated by the vectors is still the same
    assert_eq!(0., reduced[0][1]);
    assert_eq!(0., reduced[1][1]);
    assert_eq!(1., reduced[0][0].abs() + reduced[1][0].abs());
}

#[test]
fn test_lll_zero_vector() {
    let original = Basis::new([
        Vector::new([0., 0.]),
        Vector::new([1., 2.])
    ]);
    let controller = RecordProgress::default();
    let (reduced, stats) = lll_with_controller(&original, 0.75, controller.clone());
    assert_eq!(GSOState::Stale, reduced.gso_state());
    assert!(stats.degenerate_swaps > 0);
    assert_eq!(stats.swaps, stats.degenerate_swaps);
    assert!(controller.recorded().starts_with("lll(dim=2, emb=2) !"));
}

#[test]
fn test_size_reduce_updates_gso() {
    let mut basis = Basis::new([
        Vector::new([3., 1., 4., 1.]),
        Vector::new([5., 9., 2., 6.]),
        Vector::new([5., 3., 5., 8.]),
        Vector::new([9., 7., 9., 3.])
    ]);
    compute_gso(&mut basis);
    for k in 1..4 {
        size_reduce(&mut basis, k);
        for j in 0..k {
            assert!(basis.gso_coefficient(k, j).abs() <= 0.5 + 1e-9);
        }
        assert_gso_consistent(&basis);
    }
    assert!(is_size_reduced(&basis));
}

#[test]
fn test_swap_and_update_gso() {
    let original = Basis::new([
        Vector::new([3., 1., 4., 1.]),
        Vector::new([5., 9., 2., 6.]),
        Vector::new([5., 3., 5., 8.]),
        Vector::new([9., 7., 9., 3.])
    ]);
    for k in 1..4 {
        let mut updated = original.clone();
        compute_gso(&mut updated);
        assert_eq!(Ok(()), updated.swap_and_update_gso(k));
        assert_eq!(GSOState::Current, updated.gso_state());

        let mut expected = original.clone();
        expected.swap(k - 1, k);
        compute_gso(&mut expected);

        assert_eq!(expected.vectors(), updated.vectors());
        for i in 0..4 {
            assert!((expected.gso_sqr_norm(i) - updated.gso_sqr_norm(i)).abs() < 1e-9 * expected.gso_sqr_norm(i));
            for j in 0..i {
                assert!((expected.gso_coefficient(i, j) - updated.gso_coefficient(i, j)).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn test_swap_and_update_gso_degenerate() {
    let mut basis = Basis::new([
        Vector::new([1., 0.]),
        Vector::new([0., 0.])
    ]);
    compute_gso(&mut basis);
    let sqr_norms = *basis.gso_sqr_norms();
    assert_eq!(Err(DegenerateGSOUpdate), basis.swap_and_update_gso(1));
    assert_eq!(Vector::new([0., 0.]), basis[0]);
    assert_eq!(GSOState::Stale, basis.gso_state());
    assert_eq!(&sqr_norms, basis.gso_sqr_norms());
}

#[test]
fn test_condition_checks() {
    let mut basis = example_basis();
    compute_gso(&mut basis);
    // `mu[2][0] = 14/3`
    assert!(!is_size_reduced(&basis));
    assert!(!is_lll_reduced(&basis, 0.5));

    let mut basis = Basis::new([
        Vector::new([4., 0.]),
        Vector::new([1., 1.])
    ]);
    compute_gso(&mut basis);
    assert!(is_size_reduced(&basis));
    // `|b_1*|^2 = 1`, `mu = 1/4`, `|b_0*|^2 = 16`, so the condition holds iff `delta <= 1/8`
    assert!(!lovasz_condition(&basis, 0.75));
    assert!(lovasz_condition(&basis, 0.125));

    let mut orthogonal = Basis::new([
        Vector::new([1., 0., 0.]),
        Vector::new([0., 2., 0.])
    ]);
    gram_schmidt(&mut orthogonal, GSMode::Unnormalized);
    assert!(is_lll_reduced(&orthogonal, 0.99));
    assert_eq!(0., dot(&orthogonal[0], &orthogonal[1]));
}

#[test]
#[should_panic(expected = "Gram-Schmidt data of the basis has not been computed")]
fn test_condition_checks_require_gso() {
    is_lll_reduced(&example_basis(), 0.75);
}

#[test]
#[should_panic(expected = "Gram-Schmidt data of the basis is normalized")]
fn test_condition_checks_require_unnormalized_gso() {
    let mut basis = example_basis();
    gram_schmidt(&mut basis, GSMode::Normalized);
    is_size_reduced(&basis);
}

#[test]
#[should_panic(expected = "Gram-Schmidt data of the basis is normalized")]
fn test_swap_and_update_gso_requires_unnormalized_gso() {
    let mut basis = example_basis();
    gram_schmidt(&mut basis, GSMode::Normalized);
    let _ = basis.swap_and_update_gso(1);
}
