// ─────────────────────────────────────────────────────────────────────
// Shakti Singularity Engine — Trajectory Sampling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Evaluate the engine curves over 1D grids.

use ndarray::{Array1, ArrayView1};
use shakti_types::error::{SingularityError, SingularityResult};
use shakti_types::report::Trajectory;

use crate::engine::SingularityEngine;

/// Uniform grid of `n` points on `[start, stop]`.
pub fn linspace_grid(start: f64, stop: f64, n: usize) -> Array1<f64> {
    Array1::linspace(start, stop, n)
}

pub fn utility_curve(engine: &SingularityEngine, times: ArrayView1<f64>) -> Array1<f64> {
    times.mapv(|t| engine.exact_utility_evolution(t))
}

pub fn scaling_curve(engine: &SingularityEngine, resources: ArrayView1<f64>) -> Array1<f64> {
    resources.mapv(|n| engine.shakti_scaling_law(n))
}

pub fn energy_curve(engine: &SingularityEngine, times: ArrayView1<f64>) -> Array1<f64> {
    times.mapv(|t| engine.energy_relation(t))
}

fn sample_grid(max: f64, n: usize) -> SingularityResult<Array1<f64>> {
    if n < 2 {
        return Err(SingularityError::InvalidSampling(format!(
            "sampling requires n >= 2, got {n}"
        )));
    }
    if !max.is_finite() {
        return Err(SingularityError::InvalidSampling(format!(
            "sampling horizon must be finite, got {max}"
        )));
    }
    Ok(linspace_grid(0.0, max, n))
}

fn to_trajectory(argument: Array1<f64>, value: Array1<f64>, label: &str) -> Trajectory {
    let trajectory = Trajectory {
        argument: argument.to_vec(),
        value: value.to_vec(),
    };
    if trajectory.has_non_finite() {
        log::debug!("{label} trajectory contains non-finite samples");
    }
    trajectory
}

/// Utility U(t) on `n` points over `[0, t_max]`.
pub fn sample_utility(
    engine: &SingularityEngine,
    t_max: f64,
    n: usize,
) -> SingularityResult<Trajectory> {
    let grid = sample_grid(t_max, n)?;
    let values = utility_curve(engine, grid.view());
    Ok(to_trajectory(grid, values, "utility"))
}

/// Scaling law S(N) on `n` points over `[0, n_max]`.
pub fn sample_scaling(
    engine: &SingularityEngine,
    n_max: f64,
    n: usize,
) -> SingularityResult<Trajectory> {
    let grid = sample_grid(n_max, n)?;
    let values = scaling_curve(engine, grid.view());
    Ok(to_trajectory(grid, values, "scaling"))
}

/// Energy E(t) on `n` points over `[0, t_max]`.
pub fn sample_energy(
    engine: &SingularityEngine,
    t_max: f64,
    n: usize,
) -> SingularityResult<Trajectory> {
    let grid = sample_grid(t_max, n)?;
    let values = energy_curve(engine, grid.view());
    Ok(to_trajectory(grid, values, "energy"))
}
