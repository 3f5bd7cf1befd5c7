#![doc = include_str!("../Readme.md")]

mod unstable_sealed {

    ///
    /// Prevents implementations of traits whose interface is not yet stable
    /// outside of this crate.
    ///
    pub trait UnstableSealed {}
}

#[macro_use]
pub mod computation;
pub mod scalar;
pub mod serialization;
pub mod parallel;
pub mod vector;
pub mod basis;
pub mod algorithms;
