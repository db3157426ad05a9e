//! Description Parser
//!
//! Reads description documents. JSON is the default format;
//! files ending in `.yaml` or `.yml` go through the YAML reader instead.

use std::fs;
use std::path::Path;

use log::debug;

use super::model::Experiment;
use crate::error::{BatchError, Result};

/// On-disk format of a description document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Reads the whole file at `path` and deserializes it.
pub fn read_document(path: &Path) -> Result<Experiment> {
    let content = fs::read_to_string(path).map_err(|e| BatchError::io(path, e))?;
    debug!("Description content loaded ({} bytes)", content.len());

    parse_document(&content, DocumentFormat::from_path(path)).map_err(|reason| {
        BatchError::MalformedInput {
            path: path.to_path_buf(),
            reason,
        }
    })
}

/// Deserializes document text in the given format.
pub fn parse_document(content: &str, format: DocumentFormat) -> std::result::Result<Experiment, String> {
    match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(&PathBuf::from("a.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(&PathBuf::from("a.yml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(&PathBuf::from("a.YAML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(&PathBuf::from("config")), DocumentFormat::Json);
    }

    #[test]
    fn test_parse_yaml_document() {
        let yaml = r#"
projectPath: /data/rna
groups:
  - name: A
    samples: [s1, s2]
  - name: B
    samples:
      - s3
comparisons:
  - case: A
    control: B
cuffdiffExec: /opt/cufflinks/cuffdiff
"#;

        let experiment = parse_document(yaml, DocumentFormat::Yaml).unwrap();

        assert_eq!(experiment.project_root, "/data/rna");
        assert_eq!(experiment.groups.len(), 2);
        assert_eq!(experiment.groups[1].samples, vec!["s3"]);
        assert_eq!(experiment.comparisons[0].control_group, "B");
        assert_eq!(experiment.cuffdiff_exec, "/opt/cufflinks/cuffdiff");
        assert_eq!(experiment.gtf_path, "");
    }

    #[test]
    fn test_parse_unknown_fields_ignored() {
        let json = r#"{ "projectPath": "/p", "owner": { "lab": "zhou" }, "groups": [ { "name": "A", "samples": [], "color": "red" } ] }"#;

        let experiment = parse_document(json, DocumentFormat::Json).unwrap();
        assert_eq!(experiment.project_root, "/p");
        assert_eq!(experiment.groups[0].name, "A");
    }

    #[test]
    fn test_parse_truncated_json() {
        let result = parse_document(r#"{ "projectPath": "/p""#, DocumentFormat::Json);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_null_field_rejected() {
        let result = parse_document(r#"{ "projectPath": null }"#, DocumentFormat::Json);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_document_not_a_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = read_document(temp_dir.path());
        assert!(matches!(result, Err(BatchError::Io { .. })));
    }
}
