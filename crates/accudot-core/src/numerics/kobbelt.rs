use std::collections::BTreeMap;

use super::compensated::CompensatedAccumulator;
use super::eft::two_prod;
use super::float::WorkingFloat;
use super::layout::decompose;

/// Halving-step budget for one cancellation pass. The pass is expected to be
/// near-linear on realistic data but has no worst-case bound; every
/// opposing-pair fix consumes at least one step, so exhausting the budget
/// ends the pass and the remaining entries fall back to a compensated sum.
const CANCELLATION_STEP_LIMIT: usize = 16_384;

/// Magnitude/parity class of a value: twice the biased exponent plus the
/// low mantissa bit. `genus ^ 1` names the adjacent class at the same
/// exponent; halving a normal value shifts its genus down by two.
pub fn genus<F: WorkingFloat>(value: F) -> i64 {
    let parts = decompose(value);
    2 * i64::from(parts.exponent) + (parts.mantissa & 1) as i64
}

/// Ordered bucket table keyed by genus.
///
/// Invariants after every insertion: no two entries share a genus, no two
/// entries of adjacent genus hold opposite-signed values, and exact zeros
/// are never stored. Both merge cases are representable without rounding
/// (same exponent and mantissa parity, or same exponent and opposite sign),
/// which is what lets the table defer additions until they are lossless.
#[derive(Debug, Clone)]
pub struct GenusTable<F: WorkingFloat> {
    entries: BTreeMap<i64, F>,
}

impl<F: WorkingFloat> GenusTable<F> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending genus order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, F)> + '_ {
        self.entries.iter().map(|(&key, &value)| (key, value))
    }

    /// Insert a value, merging exactly until the table invariants hold
    /// again. Each merge removes one stored entry, so the loop is bounded
    /// by the table size.
    pub fn insert(&mut self, mut value: F) {
        loop {
            if value == F::zero() {
                return;
            }
            let key = genus(value);
            if let Some(existing) = self.entries.remove(&key) {
                value = value + existing;
                continue;
            }
            let adjacent = key ^ 1;
            match self.entries.get(&adjacent).copied() {
                Some(other) if other.is_sign_negative() != value.is_sign_negative() => {
                    self.entries.remove(&adjacent);
                    value = value + other;
                }
                _ => {
                    self.entries.insert(key, value);
                    return;
                }
            }
        }
    }

    /// Eliminate opposite-signed neighbors so the final bottom-up sum never
    /// subtracts near-equal magnitudes. Returns `false` when the halving
    /// budget ran out and mixed-sign entries may remain.
    pub fn resolve_cancellations(&mut self) -> bool {
        self.resolve_with_budget(CANCELLATION_STEP_LIMIT)
    }

    fn resolve_with_budget(&mut self, mut budget: usize) -> bool {
        let half = F::from_widened(0.5);
        let two = F::from_widened(2.0);
        while let Some(((upper_key, upper_value), (lower_key, lower_value))) =
            self.highest_opposing_pair()
        {
            self.entries.remove(&upper_key);
            self.entries.remove(&lower_key);

            // Spread the dominant value downward by exact halving until its
            // class passes the lower entry's; the removed mass always equals
            // the reinserted copies plus twice the remainder.
            let floor = genus(lower_value) & !1;
            let mut remainder = upper_value * half;
            while (genus(remainder) & !1) >= floor && remainder != F::zero() {
                if budget == 0 {
                    self.insert(remainder * two);
                    self.insert(lower_value);
                    return false;
                }
                budget -= 1;
                self.insert(remainder);
                remainder = remainder * half;
            }
            self.insert(lower_value + remainder * two);
        }
        true
    }

    /// Topmost pair of order-adjacent entries with opposite signs.
    fn highest_opposing_pair(&self) -> Option<((i64, F), (i64, F))> {
        let mut iter = self.entries.iter().rev();
        let (&first_key, &first_value) = iter.next()?;
        let mut upper = (first_key, first_value);
        for (&key, &value) in iter {
            if value.is_sign_negative() != upper.1.is_sign_negative() {
                return Some((upper, (key, value)));
            }
            upper = (key, value);
        }
        None
    }

    /// Plain sum in ascending magnitude order: small values first, so each
    /// addition contributes at most its own rounding unit.
    fn sum_ascending(&self) -> F {
        let mut total = F::zero();
        for (_, value) in self.iter() {
            total = total + value;
        }
        total
    }

    /// Degraded final sum used after budget exhaustion.
    fn sum_compensated_ascending(&self) -> F {
        let mut accumulator = CompensatedAccumulator::new();
        for (_, value) in self.iter() {
            accumulator.add(value);
        }
        accumulator.total()
    }
}

impl<F: WorkingFloat> Default for GenusTable<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Genus-bucketed exact dot product (Kobbelt's method): decompose every
/// product into an error-free pair, merge exactly by genus, resolve sign
/// cancellation top-down, then sum bottom-up.
pub fn kobbelt_dot_product<F: WorkingFloat>(v1: &[F], v2: &[F]) -> F {
    let mut table = GenusTable::new();
    for (&left, &right) in v1.iter().zip(v2) {
        let (head, tail) = two_prod(left, right);
        table.insert(head);
        table.insert(tail);
    }
    if table.resolve_cancellations() {
        table.sum_ascending()
    } else {
        table.sum_compensated_ascending()
    }
}
