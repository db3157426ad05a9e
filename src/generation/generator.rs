//! Job Generator
//!
//! Turns every comparison of a description into one PBS script under
//! `{projectRoot}/log/`. Comparisons are handled in document order and
//! the first failure stops the run; scripts written before the failure
//! stay on disk.

use std::fs::{self, DirBuilder};
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::script::{
    output_dir_name, render_job_script, script_file_name, LOG_DIR, LOG_DIR_MODE,
};
use super::sink::ProgressSink;
use crate::error::{BatchError, Result};
use crate::experiment::{Comparison, Experiment, ExperimentDescription};
use crate::paths::{absolute_clean, join_clean};

/// Generates `cuffdiff` job scripts and reports each one to a sink.
///
/// # Example
///
/// ```rust,no_run
/// use seqbatch::experiment::ExperimentDescription;
/// use seqbatch::generation::{ConsoleSink, JobGenerator};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut description = ExperimentDescription::new("diff_config.json");
///     let mut generator = JobGenerator::new(ConsoleSink::new());
///
///     let scripts = generator.generate_all(&mut description, "sam")?;
///     println!("{} scripts ready", scripts.len());
///     Ok(())
/// }
/// ```
pub struct JobGenerator<S: ProgressSink> {
    sink: S,
}

impl<S: ProgressSink> JobGenerator<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Writes one job script per comparison and returns their absolute paths.
    ///
    /// Loads `description` first if that has not happened yet.
    pub fn generate_all(
        &mut self,
        description: &mut ExperimentDescription,
        user: &str,
    ) -> Result<Vec<PathBuf>> {
        let experiment = description.load()?;

        info!(
            "Generating {} job scripts for user '{}'",
            experiment.comparisons.len(),
            user
        );

        let mut written = Vec::with_capacity(experiment.comparisons.len());
        for comparison in &experiment.comparisons {
            let script_path = self.generate_one(experiment, comparison, user)?;
            written.push(script_path);
        }

        info!("Generated {} job scripts", written.len());
        Ok(written)
    }

    /// Resolves, renders and writes the script for a single comparison.
    fn generate_one(
        &mut self,
        experiment: &Experiment,
        comparison: &Comparison,
        user: &str,
    ) -> Result<PathBuf> {
        let (case, control) = experiment.resolve_comparison(comparison)?;
        debug!(
            "Comparison {} ({} samples) vs {} ({} samples)",
            case.name,
            case.samples.len(),
            control.name,
            control.samples.len()
        );

        let root = &experiment.project_root;
        let output_dir =
            absolute_clean(&join_clean(root, [output_dir_name(&case.name, &control.name)]))?;

        let log_dir = join_clean(root, [LOG_DIR]);
        ensure_log_dir(&log_dir)?;

        let script_path =
            absolute_clean(&log_dir.join(script_file_name(&case.name, &control.name)))?;

        let content = render_job_script(experiment, case, control, &output_dir, user);
        fs::write(&script_path, content).map_err(|e| BatchError::io(&script_path, e))?;

        info!("Wrote job script: {}", script_path.display());
        self.sink.script_written(&script_path);

        Ok(script_path)
    }
}

/// Creates the log directory and any missing parents; an existing one is fine.
fn ensure_log_dir(dir: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(LOG_DIR_MODE);
    }

    builder.create(dir).map_err(|e| BatchError::io(dir, e))?;
    debug!("Log directory ready: {}", dir.display());
    Ok(())
}
