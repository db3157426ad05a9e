//! seqbatch - PBS Batch Script Generator
//!
//! Turns a declarative experiment description (sample groups and the
//! comparisons between them) into one PBS job script per comparison,
//! each running `cuffdiff` over the aligned reads of both groups.
//!
//! # Architecture
//!
//! - [`experiment`]: Description data model, loading and group lookup
//! - [`generation`]: Job script rendering and writing
//! - [`paths`]: Lexical path joining and cleaning
//! - [`error`]: Error taxonomy shared by both
//!
//! # Example
//!
//! ```rust,no_run
//! use seqbatch::{ConsoleSink, ExperimentDescription, JobGenerator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut description = ExperimentDescription::open("diff_config.json")?;
//!
//!     let mut generator = JobGenerator::new(ConsoleSink::new());
//!     generator.generate_all(&mut description, "sam")?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod experiment;
pub mod generation;
pub mod paths;

// Re-export commonly used types
pub use error::{BatchError, Result};
pub use experiment::{Comparison, Experiment, ExperimentDescription, Group};
pub use generation::{ConsoleSink, JobGenerator, ProgressSink};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "seqbatch";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_module_exports_description() {
        let description = ExperimentDescription::new("diff.json");
        assert!(!description.is_loaded());
    }

    #[test]
    fn test_module_exports_group() {
        let group = Group::new("Oh-U", ["CHG016348"]);
        assert_eq!(group.samples.len(), 1);
    }
}
