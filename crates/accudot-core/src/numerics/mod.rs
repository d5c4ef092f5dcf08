pub mod analysis;
pub mod compensated;
pub mod eft;
pub mod float;
pub mod kobbelt;
pub mod layout;
pub mod oracle;

pub use analysis::{TrialScores, VariantScore, score_variants};
pub use compensated::{
    CompensatedAccumulator, fma_dot_product, kahan_dot_product, naive_dot_product,
};
pub use eft::{two_prod, two_prod_split, two_sum};
pub use float::WorkingFloat;
pub use kobbelt::{GenusTable, genus, kobbelt_dot_product};
pub use layout::{FloatParts, compose, decompose};
pub use oracle::{DoubleDouble, OracleAccumulator, WideSum};

use crate::domain::{DotError, DotVariant};

/// Dot product of `v1` and `v2` under the selected accumulation strategy.
///
/// Fails fast on mismatched lengths; otherwise total over finite inputs and
/// deterministic in index order.
pub fn dot_product<F: WorkingFloat>(
    variant: DotVariant,
    v1: &[F],
    v2: &[F],
) -> Result<F, DotError> {
    validate_lengths(v1, v2)?;
    Ok(match variant {
        DotVariant::Naive => naive_dot_product(v1, v2),
        DotVariant::Kahan => kahan_dot_product(v1, v2),
        DotVariant::Fma => fma_dot_product(v1, v2),
        DotVariant::Kobbelt => kobbelt_dot_product(v1, v2),
    })
}

/// Near-exact reference value in the `f64` comparison precision, used only
/// to score the working-precision strategies.
pub fn reference_dot_product<F: WorkingFloat>(v1: &[F], v2: &[F]) -> Result<f64, DotError> {
    validate_lengths(v1, v2)?;
    let mut oracle = <F::Oracle as Default>::default();
    for (&left, &right) in v1.iter().zip(v2) {
        oracle.add_product(left, right);
    }
    Ok(oracle.finish())
}

fn validate_lengths<F: WorkingFloat>(v1: &[F], v2: &[F]) -> Result<(), DotError> {
    if v1.len() != v2.len() {
        return Err(DotError::LengthMismatch {
            left: v1.len(),
            right: v2.len(),
        });
    }
    Ok(())
}
