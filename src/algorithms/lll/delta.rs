use crate::algorithms::lll::{is_lll_reduced, lll};
use crate::basis::Basis;
use crate::computation::{ComputationController, DontObserve};
use crate::parallel::{potential_parallel_map, potential_parallel_prefix_len};
use crate::scalar::RealScalar;

///
/// The smallest value of `delta` tried by [`estimate_delta()`].
///
pub const COARSE_DELTA_START: f64 = 0.25;

///
/// The step size of the first pass of [`estimate_delta()`].
///
pub const COARSE_DELTA_STEP: f64 = 0.01;

///
/// Returned by [`estimate_delta()`] if LLL does not produce a reduced basis
/// even for `delta = 1/4`.
///
pub const NO_DELTA_FOUND: f64 = -1.;

///
/// Heuristically finds the largest `delta < 1` for which [`lll()`] reduces the given
/// basis to a `delta`-LLL-reduced basis, up to the given precision.
///
/// Mathematically, LLL always succeeds for `delta` in `(1/4, 1)`, but because of
/// rounding errors, this might not be true in practice. The search is done as
/// follows:
///  - First, try `delta = 0.25, 0.26, 0.27, ...` until LLL fails for the first
///    time, or `delta` reaches `1`.
///  - Then, try the values between the last successful `delta` and `delta + 0.01`,
///    with step size `precision`, and take the largest one for which LLL succeeds.
///
/// The steps are accumulated, i.e. the tried values are affected by rounding as well.
/// If no value is successful, [`NO_DELTA_FOUND`] is returned.
///
/// Note that the first pass assumes that whether LLL succeeds is monotonic in `delta`.
/// This is not verified, so larger successful values might be missed.
///
/// Each tried value requires a full run of LLL, so this takes time proportional to
/// `1 / precision`. The Gram-Schmidt data of the given basis is not used.
///
/// # Panics
///
/// Panics if `precision` is not positive.
///
/// # Example
/// ```
/// # use lattice_lll::vector::*;
/// # use lattice_lll::basis::*;
/// # use lattice_lll::algorithms::lll::*;
/// # use lattice_lll::algorithms::lll::delta::*;
/// let basis = Basis::new([
///     Vector::new([1., 1., 1.]),
///     Vector::new([-1., 0., 2.]),
///     Vector::new([3., 5., 6.])
/// ]);
/// let delta = estimate_delta(&basis, 0.001);
/// assert!(delta >= 0.25);
/// assert!(is_lll_reduced(&lll(&basis, delta), delta));
/// ```
///
pub fn estimate_delta<T, const DIM: usize, const EMB: usize>(basis: &Basis<T, DIM, EMB>, precision: T) -> T
    where T: RealScalar
{
    estimate_delta_with_controller(basis, precision, DontObserve)
}

///
/// Same as [`estimate_delta()`], but reports progress to the given controller.
///
/// If the feature `parallel` is enabled, the values of each pass are tried in
/// parallel. The result is the same as for the sequential search.
///
/// # Explanation of logging output
///
/// If the passed computation controller accepts the logging, it will receive the following symbols:
///  - `(coarse)` resp. `(fine)` means that the first resp. second pass starts
///  - `.` means that LLL succeeded for the current value of `delta`
///  - `x` means that LLL failed for the current value of `delta`
///
pub fn estimate_delta_with_controller<T, const DIM: usize, const EMB: usize, Controller>(basis: &Basis<T, DIM, EMB>, precision: T, controller: Controller) -> T
    where T: RealScalar,
        Controller: ComputationController
{
    assert!(precision > T::zero(), "precision must be positive");
    let succeeds = |delta: T| is_lll_reduced(&lll(basis, delta), delta);

    controller.run_computation(format_args!("estimate_delta(precision={}) ", precision), |controller| {
        let mut best_delta = T::from_f64(NO_DELTA_FOUND);

        log_progress!(controller, "(coarse)");
        let mut candidates = Vec::new();
        let mut delta = T::from_f64(COARSE_DELTA_START);
        while delta < T::one() {
            candidates.push(delta);
            delta += T::from_f64(COARSE_DELTA_STEP);
        }
        let candidate_count = candidates.len();
        let successful = potential_parallel_prefix_len(candidates.clone(), succeeds);
        for _ in 0..successful {
            log_progress!(controller, ".");
        }
        if successful < candidate_count {
            log_progress!(controller, "x");
        }
        if successful > 0 {
            best_delta = candidates[successful - 1];
        }

        if best_delta > T::zero() {
            log_progress!(controller, "(fine)");
            let start = best_delta;
            let window_end = start + T::from_f64(COARSE_DELTA_STEP);
            let end = if window_end < T::one() { window_end } else { T::one() };
            let mut candidates = Vec::new();
            let mut delta = start;
            while delta < end {
                candidates.push(delta);
                delta += precision;
            }
            let results = potential_parallel_map(candidates.clone(), succeeds);
            for (delta, success) in candidates.into_iter().zip(results) {
                if success {
                    log_progress!(controller, ".");
                    best_delta = delta;
                } else {
                    log_progress!(controller, "x");
                }
            }
        }
        return best_delta;
    })
}

#[cfg(test)]
use crate::vector::Vector;
#[cfg(test)]
use crate::computation::RecordProgress;

#[cfg(test)]
fn example_basis() -> Basis<f64, 3, 3> {
    Basis::new([
        Vector::new([1., 1., 1.]),
        Vector::new([-1., 0., 2.]),
        Vector::new([3., 5., 6.])
    ])
}

#[test]
fn test_estimate_delta() {
    let basis = example_basis();
    let delta = estimate_delta(&basis, 1e-5);
    assert!(delta >= 0.25);
    assert!(delta > 0.99 && delta < 1.);
    assert!(is_lll_reduced(&lll(&basis, delta), delta));
}

#[test]
fn test_estimate_delta_matches_scan() {
    let basis = Basis::new([
        Vector::new([1., 0., 0., 31.]),
        Vector::new([0., 1., 0., 59.]),
        Vector::new([0., 0., 1., 26.])
    ]);
    let precision = 1e-3;

    let mut expected = -1.;
    let mut delta = 0.25;
    while delta < 1. {
        if is_lll_reduced(&lll(&basis, delta), delta) {
            expected = delta;
        } else {
            break;
        }
        delta += 0.01;
    }
    assert!(expected > 0.);
    let end = f64::min(1., expected + 0.01);
    let mut delta = expected;
    while delta < end {
        if is_lll_reduced(&lll(&basis, delta), delta) {
            expected = delta;
        }
        delta += precision;
    }

    assert_eq!(expected, estimate_delta(&basis, precision));
}

#[test]
fn test_estimate_delta_none_found() {
    // linearly dependent, so the Gram-Schmidt data becomes stale during LLL
    let basis = Basis::new([
        Vector::new([1., 0.]),
        Vector::new([2., 0.])
    ]);
    let controller = RecordProgress::default();
    assert_eq!(NO_DELTA_FOUND, estimate_delta_with_controller(&basis, 1e-3, controller.clone()));
    assert_eq!("estimate_delta(precision=0.001) (coarse)xdone\n", controller.recorded());
}

#[test]
fn test_estimate_delta_logging() {
    let controller = RecordProgress::default();
    estimate_delta_with_controller(&example_basis(), 1e-3, controller.clone());
    let log = controller.recorded();
    assert!(log.starts_with("estimate_delta(precision=0.001) (coarse)."));
    assert!(log.contains("(fine)"));
    assert!(log.ends_with("done\n"));
}

#[test]
#[should_panic(expected = "precision must be positive")]
fn test_estimate_delta_invalid_precision() {
    estimate_delta(&example_basis(), 0.);
}
