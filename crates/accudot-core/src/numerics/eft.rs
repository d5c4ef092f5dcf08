use super::float::WorkingFloat;

/// Error-free addition: returns `(head, tail)` where `head` is the
/// correctly-rounded sum and `tail` the exact rounding error, so that
/// `head + tail` equals `a + b` in infinite precision.
///
/// Classic branch-based form: order the operands by magnitude, then subtract
/// the rounded sum back out of the larger operand.
pub fn two_sum<F: WorkingFloat>(a: F, b: F) -> (F, F) {
    let (larger, smaller) = if b.abs() > a.abs() { (b, a) } else { (a, b) };
    let head = larger + smaller;
    let tail = (larger - head) + smaller;
    (head, tail)
}

/// Error-free multiplication via a fused multiply-add: `head = a * b`
/// rounded once, `tail = fma(a, b, -head)` recovers the exact error.
///
/// Exactness holds while the product and its error stay in the normal
/// range; exponent-range extremes are outside the guaranteed contract.
pub fn two_prod<F: WorkingFloat>(a: F, b: F) -> (F, F) {
    let head = a * b;
    let tail = a.mul_add(b, -head);
    (head, tail)
}

/// Dekker/Veltkamp splitting fallback for [`two_prod`] on targets without a
/// fused multiply-add. Produces bit-identical error terms for products in
/// the normal range.
pub fn two_prod_split<F: WorkingFloat>(a: F, b: F) -> (F, F) {
    let head = a * b;
    let (a_high, a_low) = split(a);
    let (b_high, b_low) = split(b);
    let tail =
        ((a_high * b_high - head) + a_high * b_low + a_low * b_high) + a_low * b_low;
    (head, tail)
}

/// Veltkamp split of `x` into a high part holding the upper half of the
/// mantissa and a low part holding the rest; `high + low == x` exactly.
fn split<F: WorkingFloat>(x: F) -> (F, F) {
    let scaled = x * F::SPLIT_FACTOR;
    let high = scaled - (scaled - x);
    (high, x - high)
}
