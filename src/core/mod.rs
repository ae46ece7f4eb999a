//! Classification and coverage engine.

pub mod analysis;
pub mod classifier;
pub mod coverage;
pub mod normalizer;
pub mod reconcile;

pub use analysis::{Analysis, YearReport, analyze};
