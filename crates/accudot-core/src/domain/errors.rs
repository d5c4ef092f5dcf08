/// Caller-contract violations. The arithmetic itself is total over finite
/// inputs of matching length and has no recoverable failure mode; non-finite
/// and exponent-range-extreme inputs are outside the guaranteed-exactness
/// contract rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DotError {
    #[error("dot product requires equal-length vectors, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },
}
