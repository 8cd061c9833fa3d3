//! Runs every selected interpolation method against one target function.
//!
//! The flow is nodes -> samples -> approximants -> metrics on a dense grid.
//! Nothing here draws or writes; [`ComparisonReport`] carries everything
//! a plotting layer needs.

pub mod config;
pub mod errors;
pub mod report;
pub mod run;

pub use config::ComparisonCfg;
pub use errors::ComparisonError;
pub use report::{ComparisonReport, MethodOutcome};
pub use run::compare;
