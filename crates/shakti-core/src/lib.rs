//! Shakti singularity engine: closed-form formula evaluator.
//!
//! engine: the five formulas and constructor guards
//! trajectory, report: grid sampling and console/JSON summaries

pub mod engine;
pub mod report;
pub mod trajectory;

pub use engine::SingularityEngine;
