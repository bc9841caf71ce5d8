// ─────────────────────────────────────────────────────────────────────
// Shakti Singularity Engine — Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;

/// Logarithmic thresholds of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalPoints {
    /// Critical singularity time.
    #[serde(with = "crate::float_repr")]
    pub t_c: f64,
    /// Critical resource threshold.
    #[serde(with = "crate::float_repr")]
    pub n_c: f64,
}

/// A curve sampled on a 1D grid.
/// `argument[i]` is time or resource count, `value[i]` the curve there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    #[serde(with = "crate::float_repr::vec")]
    pub argument: Vec<f64>,
    #[serde(with = "crate::float_repr::vec")]
    pub value: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.argument.len()
    }

    pub fn is_empty(&self) -> bool {
        self.argument.is_empty()
    }

    /// True if any sample is infinite or NaN (evaluation hit or crossed a pole).
    pub fn has_non_finite(&self) -> bool {
        self.value.iter().any(|v| !v.is_finite())
    }
}

/// Full engine summary, as emitted by `shakti --json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingularityReport {
    pub config: EngineConfig,
    pub critical: CriticalPoints,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utility: Option<Trajectory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling: Option<Trajectory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<Trajectory>,
}
