//! Job Generation Module
//!
//! Renders and writes one PBS job script per comparison.
//!
//! # Structure
//!
//! - [`script`]: Script text and the fixed scheduler settings
//! - [`sink`]: Where "script written" announcements go
//! - [`generator`]: The per-comparison generation loop

pub mod generator;
pub mod script;
pub mod sink;

pub use generator::JobGenerator;
pub use script::render_job_script;
pub use sink::{ConsoleSink, ProgressSink};
