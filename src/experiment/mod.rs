//! Experiment Description Module
//!
//! Loading and querying the declarative description of an experiment:
//! its project root, sample groups, comparisons and tool locations.
//!
//! # Structure
//!
//! - [`model`]: Data structures and the load lifecycle
//! - [`parser`]: JSON/YAML document reading

pub mod model;
pub mod parser;

pub use model::{Comparison, Experiment, ExperimentDescription, Group, LoadState};
