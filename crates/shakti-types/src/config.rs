// ─────────────────────────────────────────────────────────────────────
// Shakti Singularity Engine — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MASS, EXAMPLE_ALPHA, EXAMPLE_KAPPA, EXAMPLE_U0};
use crate::error::{SingularityError, SingularityResult};

/// Engine parameters.
///
/// JSON schema: `{"U0": 1.5, "kappa": 0.1, "alpha": 0.05, "mass": 1.0}`,
/// `mass` optional. The speed of light is a constant, not part of the config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Initial utility. Must be > 1.
    #[serde(rename = "U0", with = "crate::float_repr")]
    pub u0: f64,
    /// Acceleration constant.
    #[serde(with = "crate::float_repr")]
    pub kappa: f64,
    /// Resource scaling constant.
    #[serde(with = "crate::float_repr")]
    pub alpha: f64,
    /// Finite mass for the energy relation.
    #[serde(default = "default_mass", with = "crate::float_repr")]
    pub mass: f64,
}

fn default_mass() -> f64 {
    DEFAULT_MASS
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            u0: EXAMPLE_U0,
            kappa: EXAMPLE_KAPPA,
            alpha: EXAMPLE_ALPHA,
            mass: DEFAULT_MASS,
        }
    }
}

impl EngineConfig {
    pub fn new(u0: f64, kappa: f64, alpha: f64) -> Self {
        EngineConfig {
            u0,
            kappa,
            alpha,
            mass: DEFAULT_MASS,
        }
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Permissive check: only U0 > 1 is required.
    ///
    /// kappa, alpha and mass pass through untouched, including zero,
    /// negative and non-finite values. A NaN U0 is not `<= 1` and passes.
    pub fn validate(&self) -> SingularityResult<()> {
        if self.u0 <= 1.0 {
            return Err(SingularityError::InvalidConfiguration(format!(
                "U0 must be greater than 1 for singularity dynamics, got {}",
                self.u0
            )));
        }
        Ok(())
    }

    /// Strict check: every scalar finite, U0 > 1, and kappa, alpha, mass > 0.
    pub fn validate_strict(&self) -> SingularityResult<()> {
        let fields = [
            ("U0", self.u0),
            ("kappa", self.kappa),
            ("alpha", self.alpha),
            ("mass", self.mass),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SingularityError::InvalidConfiguration(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        self.validate()?;
        for (name, value) in &fields[1..] {
            if *value <= 0.0 {
                return Err(SingularityError::InvalidConfiguration(format!(
                    "{name} must be > 0 in strict mode, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Load from JSON string. Does not validate.
    pub fn from_json(json: &str) -> SingularityResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from JSON file. Does not validate.
    pub fn from_file(path: &str) -> SingularityResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_config(name: &str, contents: &str) -> String {
        let path: PathBuf = std::env::temp_dir().join(format!(
            "shakti-config-{}-{name}.json",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_default_is_reference_example() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.u0, 1.5);
        assert_eq!(cfg.kappa, 0.1);
        assert_eq!(cfg.alpha, 0.05);
        assert_eq!(cfg.mass, 1.0);
        assert!(cfg.validate().is_ok());
        assert!(cfg.validate_strict().is_ok());
    }

    #[test]
    fn test_validate_rejects_u0_at_or_below_one() {
        for u0 in [1.0, 0.999, 0.0, -3.0, f64::NEG_INFINITY] {
            let err = EngineConfig::new(u0, 0.1, 0.05).validate().unwrap_err();
            assert!(
                matches!(err, SingularityError::InvalidConfiguration(_)),
                "U0={u0}: {err}"
            );
        }
    }

    #[test]
    fn test_validate_accepts_nan_u0() {
        let cfg = EngineConfig::new(f64::NAN, 0.1, 0.05);
        assert!(cfg.validate().is_ok());
        assert!(cfg.validate_strict().is_err());
    }

    #[test]
    fn test_validate_is_permissive_on_rates_and_mass() {
        let cfg = EngineConfig::new(2.0, 0.0, -1.0).with_mass(-5.0);
        assert!(cfg.validate().is_ok());
        let cfg = EngineConfig::new(2.0, f64::NAN, f64::INFINITY).with_mass(0.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_strict_rejects_degenerate_fields() {
        let bad = [
            EngineConfig::new(2.0, 0.0, 0.05),
            EngineConfig::new(2.0, -0.1, 0.05),
            EngineConfig::new(2.0, 0.1, 0.0),
            EngineConfig::new(2.0, 0.1, 0.05).with_mass(0.0),
            EngineConfig::new(2.0, f64::NAN, 0.05),
            EngineConfig::new(f64::INFINITY, 0.1, 0.05),
            EngineConfig::new(1.0, 0.1, 0.05),
        ];
        for cfg in &bad {
            assert!(cfg.validate_strict().is_err(), "accepted {cfg:?}");
        }
    }

    #[test]
    fn test_from_json_mass_defaults() {
        let cfg = EngineConfig::from_json(r#"{"U0": 3.0, "kappa": 0.2, "alpha": 0.01}"#).unwrap();
        assert_eq!(cfg, EngineConfig::new(3.0, 0.2, 0.01));
    }

    #[test]
    fn test_from_json_does_not_validate() {
        let cfg = EngineConfig::from_json(r#"{"U0": 0.5, "kappa": 0.2, "alpha": 0.01}"#).unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_from_json_rejects_missing_field() {
        let err = EngineConfig::from_json(r#"{"U0": 3.0, "kappa": 0.2}"#).unwrap_err();
        assert!(matches!(err, SingularityError::Json(_)));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let cfg = EngineConfig::new(4.0, 0.3, 0.07).with_mass(2.5);
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        assert!(json.contains("\"U0\""));
        let path = temp_config("roundtrip", &json);
        let loaded = EngineConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn test_json_roundtrip_is_bit_exact() {
        let cfg = EngineConfig::new(1.0001, 0.0, 0.0).with_mass(907.7073485005831);
        let json = serde_json::to_string(&cfg).unwrap();
        let back = EngineConfig::from_json(&json).unwrap();
        assert_eq!(back.mass.to_bits(), cfg.mass.to_bits());
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_json_roundtrip_non_finite_rates() {
        let cfg = EngineConfig::new(2.0, f64::INFINITY, f64::NEG_INFINITY).with_mass(f64::NAN);
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains(r#""kappa":"inf""#), "{json}");
        let back = EngineConfig::from_json(&json).unwrap();
        assert_eq!(back.kappa, f64::INFINITY);
        assert_eq!(back.alpha, f64::NEG_INFINITY);
        assert!(back.mass.is_nan());
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = EngineConfig::from_file("/nonexistent/shakti/config.json").unwrap_err();
        assert!(matches!(err, SingularityError::Io(_)));
    }
}
