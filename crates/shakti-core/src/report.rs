// ─────────────────────────────────────────────────────────────────────
// Shakti Singularity Engine — Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Console and JSON summaries of an engine.

use shakti_types::error::SingularityResult;
use shakti_types::report::SingularityReport;

use crate::engine::SingularityEngine;
use crate::trajectory::{sample_energy, sample_scaling, sample_utility};

/// Two-line threshold summary, 4 decimal places:
///
/// ```text
/// Critical Time (t_c): 32.9584
/// Critical Resource (N_c): 21.9722
/// ```
pub fn critical_summary(engine: &SingularityEngine) -> String {
    let critical = engine.critical_points();
    format!(
        "Critical Time (t_c): {:.4}\nCritical Resource (N_c): {:.4}\n",
        critical.t_c, critical.n_c
    )
}

/// Assemble a [`SingularityReport`].
///
/// `samples = Some((n, horizon))` adds utility, scaling and energy
/// trajectories with `n` points on `[0, horizon]`. A zero horizon falls
/// back to t_c (utility, energy) and N_c (scaling).
pub fn build_report(
    engine: &SingularityEngine,
    samples: Option<(usize, f64)>,
) -> SingularityResult<SingularityReport> {
    let critical = engine.critical_points();
    let mut report = SingularityReport {
        config: *engine.config(),
        critical,
        utility: None,
        scaling: None,
        energy: None,
    };

    if let Some((n, horizon)) = samples {
        let (t_max, n_max) = if horizon == 0.0 {
            (critical.t_c, critical.n_c)
        } else {
            (horizon, horizon)
        };
        report.utility = Some(sample_utility(engine, t_max, n)?);
        report.scaling = Some(sample_scaling(engine, n_max, n)?);
        report.energy = Some(sample_energy(engine, t_max, n)?);
    }

    Ok(report)
}
