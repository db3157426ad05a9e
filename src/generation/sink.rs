//! Progress Sinks
//!
//! The generator reports every script it writes through a [`ProgressSink`]
//! instead of printing directly.

use std::path::{Path, PathBuf};

use colored::Colorize;

/// Receives the absolute path of each job script as soon as it is written.
pub trait ProgressSink {
    fn script_written(&mut self, path: &Path);
}

/// Prints a ready-to-run `qsub <path>` line to stdout for every script.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { color: false }
    }

    /// Highlights the `qsub` keyword.
    pub fn colored() -> Self {
        Self { color: true }
    }
}

impl ProgressSink for ConsoleSink {
    fn script_written(&mut self, path: &Path) {
        if self.color {
            println!("{} {}", "qsub".green().bold(), path.display());
        } else {
            println!("qsub {}", path.display());
        }
    }
}

impl ProgressSink for Vec<PathBuf> {
    fn script_written(&mut self, path: &Path) {
        self.push(path.to_path_buf());
    }
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    fn script_written(&mut self, path: &Path) {
        (**self).script_written(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<PathBuf> = Vec::new();
        sink.script_written(Path::new("/p/log/batch_DEG_A_B.pbs"));
        sink.script_written(Path::new("/p/log/batch_DEG_A_C.pbs"));

        assert_eq!(
            sink,
            vec![
                PathBuf::from("/p/log/batch_DEG_A_B.pbs"),
                PathBuf::from("/p/log/batch_DEG_A_C.pbs"),
            ]
        );
    }

    #[test]
    fn test_borrowed_sink_forwards() {
        fn announce<S: ProgressSink>(mut sink: S) {
            sink.script_written(Path::new("/x.pbs"));
        }

        let mut sink: Vec<PathBuf> = Vec::new();
        announce(&mut sink);
        announce(&mut sink);
        assert_eq!(sink.len(), 2);
    }
}
