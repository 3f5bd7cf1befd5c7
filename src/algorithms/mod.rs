///
/// Contains [`gram_schmidt::gram_schmidt()`] and [`gram_schmidt::compute_gso()`] for
/// computing the Gram-Schmidt orthogonalization of a basis.
///
pub mod gram_schmidt;
///
/// Contains an implementation of the Lenstra-Lenstra-Lovasz algorithm for lattice basis
/// reduction, together with checks whether a basis is reduced.
///
pub mod lll;
