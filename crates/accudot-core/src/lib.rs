//! Accurate inner products over IEEE-754 vectors.
//!
//! The crate exposes a family of dot-product accumulators of increasing
//! accuracy (naive, Kahan-compensated, FMA-chained, and Kobbelt's
//! genus-bucketed exact accumulation) together with the error-free
//! transform primitives they are built from and a high-precision oracle
//! used to score them. All kernels are pure, single-threaded functions over
//! in-memory slices; benchmarking lives in the `accudot` binary crate.

pub mod domain;
pub mod numerics;

pub use domain::{DotError, DotVariant};
pub use numerics::{
    WorkingFloat, dot_product, reference_dot_product, score_variants, two_prod, two_prod_split,
    two_sum,
};
