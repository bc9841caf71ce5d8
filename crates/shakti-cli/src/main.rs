// ─────────────────────────────────────────────────────────────────────
// Shakti Singularity Engine — CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `shakti` entrypoint.
//!
//! With no arguments prints the reference critical time and resource
//! threshold (U0=1.5, kappa=0.1, alpha=0.05, mass=1.0).

use std::process::ExitCode;

use clap::Parser;
use shakti_core::report::{build_report, critical_summary};
use shakti_core::SingularityEngine;
use shakti_types::config::EngineConfig;
use shakti_types::error::SingularityResult;
use tracing_subscriber::EnvFilter;

/// Closed-form singularity engine.
#[derive(Debug, Parser)]
#[command(name = "shakti")]
#[command(about = "Evaluate Shakti singularity thresholds")]
struct Cli {
    /// Engine config JSON file ({"U0", "kappa", "alpha", "mass"}).
    #[arg(long)]
    config: Option<String>,
    /// Initial utility (must be > 1).
    #[arg(long, allow_negative_numbers = true)]
    u0: Option<f64>,
    /// Acceleration constant.
    #[arg(long, allow_negative_numbers = true)]
    kappa: Option<f64>,
    /// Resource scaling constant.
    #[arg(long, allow_negative_numbers = true)]
    alpha: Option<f64>,
    /// Finite mass for the energy relation.
    #[arg(long, allow_negative_numbers = true)]
    mass: Option<f64>,
    /// Require finite, positive kappa/alpha/mass.
    #[arg(long)]
    strict: bool,
    /// Print a JSON report instead of the two-line summary.
    #[arg(long)]
    json: bool,
    /// Add sampled trajectories with this many points to the JSON report.
    #[arg(long, requires = "json")]
    samples: Option<usize>,
    /// Sampling horizon; 0 uses t_c / N_c.
    #[arg(long, default_value_t = 0.0, requires = "samples")]
    horizon: f64,
}

impl Cli {
    fn engine_config(&self) -> SingularityResult<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                log::info!("loading engine config from {path}");
                EngineConfig::from_file(path)?
            }
            None => EngineConfig::default(),
        };
        if let Some(u0) = self.u0 {
            config.u0 = u0;
        }
        if let Some(kappa) = self.kappa {
            config.kappa = kappa;
        }
        if let Some(alpha) = self.alpha {
            config.alpha = alpha;
        }
        if let Some(mass) = self.mass {
            config.mass = mass;
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> SingularityResult<String> {
    let config = cli.engine_config()?;
    let engine = if cli.strict {
        SingularityEngine::strict(config)?
    } else {
        SingularityEngine::from_config(config)?
    };

    if cli.json {
        let report = build_report(&engine, cli.samples.map(|n| (n, cli.horizon)))?;
        let mut out = serde_json::to_string_pretty(&report)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(critical_summary(&engine))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
