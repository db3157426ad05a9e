//! Experiment Data Model
//!
//! Sample groups, the comparisons between them, and the tool locations
//! needed to run a differential-expression analysis.
//!
//! # Example JSON Format
//!
//! ```json
//! {
//!   "projectPath": "/home/sam/GoTest",
//!   "groups": [
//!     { "name": "Oh-U", "samples": ["CHG016348", "CHG016351"] },
//!     { "name": "Oh-M", "samples": ["CHG016349", "CHG016352"] }
//!   ],
//!   "comparisons": [
//!     { "case": "Oh-U", "control": "Oh-M" }
//!   ],
//!   "cuffdiffExec": "/online/software/cuffdiff",
//!   "genomeBtwIdx": "/online/genome/hg19",
//!   "gtfPath": "/online/genome/hg19.gtf",
//!   "tranxBtwIdx": "/online/genome/hg19_tranx"
//! }
//! ```

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use super::parser;
use crate::error::{BatchError, Result};
use crate::paths::absolute_clean;

/// A named set of samples forming one biological condition.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    #[serde(default)]
    pub name: String,

    /// Sample identifiers, each naming a per-sample directory under the project root
    #[serde(default)]
    pub samples: Vec<String>,
}

impl Group {
    pub fn new<I, S>(name: impl Into<String>, samples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            samples: samples.into_iter().map(Into::into).collect(),
        }
    }
}

/// A case group contrasted against a control group, both referenced by name.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    #[serde(default, rename = "case")]
    pub case_group: String,

    #[serde(default, rename = "control")]
    pub control_group: String,
}

impl Comparison {
    pub fn new(case_group: impl Into<String>, control_group: impl Into<String>) -> Self {
        Self {
            case_group: case_group.into(),
            control_group: control_group.into(),
        }
    }
}

/// Content of a description document.
///
/// Missing fields fall back to empty values and unknown fields are
/// ignored; the only check applied is the group lookup at generation time.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    #[serde(default, rename = "projectPath")]
    pub project_root: String,

    #[serde(default)]
    pub groups: Vec<Group>,

    #[serde(default)]
    pub comparisons: Vec<Comparison>,

    /// Absolute path of the cuffdiff executable
    #[serde(default)]
    pub cuffdiff_exec: String,

    #[serde(default)]
    pub genome_btw_idx: String,

    #[serde(default)]
    pub gtf_path: String,

    #[serde(default)]
    pub tranx_btw_idx: String,
}

impl Experiment {
    /// Returns the first group whose name matches exactly.
    ///
    /// Duplicate names are allowed; later duplicates are never returned.
    pub fn resolve_group(&self, name: &str) -> Result<&Group> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| BatchError::GroupNotFound(name.to_string()))
    }

    /// Resolves one comparison into its (case, control) groups.
    pub fn resolve_comparison(&self, comparison: &Comparison) -> Result<(&Group, &Group)> {
        let case = self.resolve_group(&comparison.case_group)?;
        let control = self.resolve_group(&comparison.control_group)?;
        Ok((case, control))
    }
}

/// Whether the document behind a description has been read yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loaded(Experiment),
}

/// An experiment description bound to the document it comes from.
///
/// Starts out [`LoadState::Unloaded`] holding only the path the caller
/// gave; [`load`](Self::load) swaps in the absolute, cleaned path and
/// the parsed content in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentDescription {
    source_path: PathBuf,
    state: LoadState,
}

impl ExperimentDescription {
    /// Creates an unloaded description for `source_path`.
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            state: LoadState::Unloaded,
        }
    }

    /// Creates and loads a description in one call.
    pub fn open(source_path: impl Into<PathBuf>) -> Result<Self> {
        let mut description = Self::new(source_path);
        description.load()?;
        Ok(description)
    }

    /// Wraps content that is already in memory as a loaded description.
    pub fn from_experiment(source_path: impl Into<PathBuf>, experiment: Experiment) -> Self {
        Self {
            source_path: source_path.into(),
            state: LoadState::Loaded(experiment),
        }
    }

    /// Reads and parses the source document.
    ///
    /// Calling this on a description that is already loaded does nothing
    /// and succeeds without touching the file again. On failure the
    /// description stays unloaded with its original path.
    pub fn load(&mut self) -> Result<&Experiment> {
        if let LoadState::Unloaded = self.state {
            let (path, experiment) = read_source(&self.source_path)?;
            self.source_path = path;
            self.state = LoadState::Loaded(experiment);
        } else {
            debug!(
                "Description {} already loaded, skipping",
                self.source_path.display()
            );
        }

        match &self.state {
            LoadState::Loaded(experiment) => Ok(experiment),
            LoadState::Unloaded => Err(BatchError::NotFound {
                path: self.source_path.clone(),
            }),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Loaded(_))
    }

    /// Source path; absolute and cleaned once loaded.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Parsed content, if loaded.
    pub fn experiment(&self) -> Option<&Experiment> {
        match &self.state {
            LoadState::Loaded(experiment) => Some(experiment),
            LoadState::Unloaded => None,
        }
    }

    /// Looks up a group by name; an unloaded description has no groups.
    pub fn resolve_group(&self, name: &str) -> Result<&Group> {
        match &self.state {
            LoadState::Loaded(experiment) => experiment.resolve_group(name),
            LoadState::Unloaded => Err(BatchError::GroupNotFound(name.to_string())),
        }
    }
}

/// Canonicalizes `path` and parses the document it names.
fn read_source(path: &Path) -> Result<(PathBuf, Experiment)> {
    if !path.exists() {
        return Err(BatchError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let absolute = absolute_clean(path)?;
    info!("Loading description from: {}", absolute.display());

    let experiment = parser::read_document(&absolute)?;

    info!(
        "Parsed {} groups, {} comparisons",
        experiment.groups.len(),
        experiment.comparisons.len()
    );

    Ok((absolute, experiment))
}
