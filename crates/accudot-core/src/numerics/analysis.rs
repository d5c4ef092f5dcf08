use serde::{Deserialize, Serialize};

use super::float::WorkingFloat;
use super::{dot_product, reference_dot_product};
use crate::domain::{DotError, DotVariant};

/// One strategy's result and its distance from the oracle, both in the
/// `f64` comparison precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariantScore {
    pub variant: DotVariant,
    pub result: f64,
    #[serde(rename = "absoluteError")]
    pub absolute_error: f64,
}

/// Every strategy scored against the oracle on a single vector pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialScores {
    pub reference: f64,
    pub scores: Vec<VariantScore>,
}

impl TrialScores {
    pub fn score(&self, variant: DotVariant) -> Option<&VariantScore> {
        self.scores.iter().find(|score| score.variant == variant)
    }
}

/// Run every accumulation strategy plus the oracle over one vector pair and
/// report each absolute error versus the oracle.
pub fn score_variants<F: WorkingFloat>(v1: &[F], v2: &[F]) -> Result<TrialScores, DotError> {
    let reference = reference_dot_product(v1, v2)?;
    let mut scores = Vec::with_capacity(DotVariant::ALL.len());
    for variant in DotVariant::ALL {
        let result = dot_product(variant, v1, v2)?.widen();
        scores.push(VariantScore {
            variant,
            result,
            absolute_error: (result - reference).abs(),
        });
    }
    Ok(TrialScores { reference, scores })
}

#[cfg(test)]
mod tests {
    use super::score_variants;
    use crate::domain::{DotError, DotVariant};

    #[test]
    fn scores_every_variant_against_the_oracle() {
        let v1 = [1.0f32, 1.0e8, -1.0e8];
        let v2 = [1.0f32, 1.0, 1.0];
        let trial = score_variants(&v1, &v2).expect("equal lengths");

        assert_eq!(trial.reference, 1.0);
        assert_eq!(trial.scores.len(), DotVariant::ALL.len());

        let kobbelt = trial.score(DotVariant::Kobbelt).expect("kobbelt score");
        assert_eq!(kobbelt.result, 1.0);
        assert_eq!(kobbelt.absolute_error, 0.0);

        let naive = trial.score(DotVariant::Naive).expect("naive score");
        assert_eq!(naive.result, 0.0);
        assert_eq!(naive.absolute_error, 1.0);
    }

    #[test]
    fn mismatched_lengths_fail_fast() {
        let trial = score_variants(&[1.0f64, 2.0], &[1.0f64]);
        assert_eq!(trial, Err(DotError::LengthMismatch { left: 2, right: 1 }));
    }

    #[test]
    fn reports_serialize_with_stable_field_names() {
        let v1 = [2.0f64, -4.0];
        let v2 = [8.0f64, 16.0];
        let trial = score_variants(&v1, &v2).expect("equal lengths");
        let json = serde_json::to_value(&trial).expect("serialize trial");

        assert_eq!(json["reference"], -48.0);
        assert_eq!(json["scores"][0]["variant"], "naive");
        assert_eq!(json["scores"][0]["absoluteError"], 0.0);
        assert_eq!(json["scores"][3]["variant"], "kobbelt");
    }
}
