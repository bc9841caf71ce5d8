// ─────────────────────────────────────────────────────────────────────
// Shakti Singularity Engine — Formula Evaluator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form singularity dynamics.
//!
//! Utility evolution, finite-time blow-up threshold, resource scaling law,
//! resource threshold and the mass-energy relation. All five are pure reads
//! of an immutable [`EngineConfig`].
//!
//! Degenerate inputs (zero rate constants, arguments at a pole) are not
//! errors: they return IEEE-754 infinities or NaN as ordinary values.

use shakti_types::config::EngineConfig;
use shakti_types::constants::SPEED_OF_LIGHT_SQ;
use shakti_types::error::SingularityResult;
use shakti_types::report::CriticalPoints;

/// Formula evaluator over a validated [`EngineConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingularityEngine {
    config: EngineConfig,
}

impl SingularityEngine {
    /// Permissive constructor: fails only when `u0 <= 1`.
    pub fn new(u0: f64, kappa: f64, alpha: f64, mass: f64) -> SingularityResult<Self> {
        Self::from_config(EngineConfig::new(u0, kappa, alpha).with_mass(mass))
    }

    /// Permissive constructor from a config value.
    ///
    /// kappa, alpha and mass are accepted as given. Non-positive or
    /// non-finite values are logged, not rejected.
    pub fn from_config(config: EngineConfig) -> SingularityResult<Self> {
        config.validate()?;
        for (name, value) in [
            ("kappa", config.kappa),
            ("alpha", config.alpha),
            ("mass", config.mass),
        ] {
            if !value.is_finite() || value <= 0.0 {
                log::warn!("{name}={value} accepted unchecked; thresholds may be non-finite");
            }
        }
        log::debug!("engine configured: {config:?}");
        Ok(Self { config })
    }

    /// Strict factory: all scalars finite, U0 > 1, kappa/alpha/mass > 0.
    pub fn strict(config: EngineConfig) -> SingularityResult<Self> {
        config.validate_strict()?;
        log::debug!("engine configured (strict): {config:?}");
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// U(t) = 1 / (1 - (1 - 1/U0)·exp(-κ·t·(U0-1)/U0))
    pub fn exact_utility_evolution(&self, t: f64) -> f64 {
        let u0 = self.config.u0;
        let exponent = -self.config.kappa * t * ((u0 - 1.0) / u0);
        let denominator = 1.0 - (1.0 - 1.0 / u0) * exponent.exp();
        1.0 / denominator
    }

    /// t_c = U0 / (κ·(U0-1)) · ln(U0/(U0-1))
    ///
    /// κ = 0 gives a non-finite result, not an error.
    pub fn critical_singularity_time(&self) -> f64 {
        let u0 = self.config.u0;
        (u0 / (self.config.kappa * (u0 - 1.0))) * (u0 / (u0 - 1.0)).ln()
    }

    /// S(N) = 1 / (1 - (1 - 1/U0)·exp(-α·N))
    pub fn shakti_scaling_law(&self, n: f64) -> f64 {
        let u0 = self.config.u0;
        let exponent = -self.config.alpha * n;
        1.0 / (1.0 - (1.0 - 1.0 / u0) * exponent.exp())
    }

    /// N_c = (1/α) · ln(U0/(U0-1))
    ///
    /// α = 0 gives a non-finite result, not an error.
    pub fn critical_resource_threshold(&self) -> f64 {
        let u0 = self.config.u0;
        (1.0 / self.config.alpha) * (u0 / (u0 - 1.0)).ln()
    }

    /// E(t) = m·c²·U(t)
    pub fn energy_relation(&self, t: f64) -> f64 {
        let u_t = self.exact_utility_evolution(t);
        self.config.mass * SPEED_OF_LIGHT_SQ * u_t
    }

    pub fn critical_points(&self) -> CriticalPoints {
        CriticalPoints {
            t_c: self.critical_singularity_time(),
            n_c: self.critical_resource_threshold(),
        }
    }

    /// Time at which the utility denominator vanishes: -t_c.
    pub fn utility_pole(&self) -> f64 {
        -self.critical_singularity_time()
    }

    /// Resource count at which the scaling-law denominator vanishes: -N_c.
    pub fn resource_pole(&self) -> f64 {
        -self.critical_resource_threshold()
    }
}
