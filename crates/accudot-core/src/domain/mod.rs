pub mod errors;

pub use errors::DotError;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Closed set of working-precision accumulation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DotVariant {
    /// Uncompensated left-to-right accumulation, kept as the control.
    Naive,
    /// Kahan-style compensated accumulation with an FMA-folded correction.
    Kahan,
    /// Fused multiply-add chain with one rounding per element.
    Fma,
    /// Genus-bucketed exact accumulation (Kobbelt's method).
    Kobbelt,
}

impl DotVariant {
    pub const ALL: [DotVariant; 4] = [Self::Naive, Self::Kahan, Self::Fma, Self::Kobbelt];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Kahan => "kahan",
            Self::Fma => "fma",
            Self::Kobbelt => "kobbelt",
        }
    }
}

impl Display for DotVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}
