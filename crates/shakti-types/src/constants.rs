// ─────────────────────────────────────────────────────────────────────
// Shakti Singularity Engine — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Speed of light in vacuum (m/s) - exact SI value.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// c² (m²/s²), used by the mass-energy relation.
pub const SPEED_OF_LIGHT_SQ: f64 = SPEED_OF_LIGHT * SPEED_OF_LIGHT;

/// Default finite mass for E = m·c²·U(t).
pub const DEFAULT_MASS: f64 = 1.0;

/// Reference example: initial utility.
pub const EXAMPLE_U0: f64 = 1.5;

/// Reference example: acceleration constant.
pub const EXAMPLE_KAPPA: f64 = 0.1;

/// Reference example: resource scaling constant.
pub const EXAMPLE_ALPHA: f64 = 0.05;
