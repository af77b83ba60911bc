//! Reading type descriptors from JSON or YAML files.
//!
//! A file holds either a single descriptor or an array of descriptors.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::model::TypeDescriptor;

/// Errors raised while loading descriptors.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read descriptor file {path}: {source}")]
    Read {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid JSON descriptor document.
    #[error("Failed to parse JSON descriptor {path}: {source}")]
    Json {
        /// Offending path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The file is not a valid YAML descriptor document.
    #[error("Failed to parse YAML descriptor {path}: {source}")]
    Yaml {
        /// Offending path.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
    /// The file extension is neither JSON nor YAML.
    #[error("Unsupported descriptor format for {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat {
        /// Offending path.
        path: PathBuf,
    },
}

/// Document format of a descriptor file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl Format {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Parse descriptors from text in the given format.
///
/// A top-level array yields every element, anything else a single
/// descriptor. The shape is decided before deserializing so field errors
/// reach the caller unchanged. `path` is only used for error messages.
pub fn parse_descriptors(
    contents: &str,
    format: Format,
    path: &Path,
) -> Result<Vec<TypeDescriptor>, LoadError> {
    match format {
        Format::Json => parse_json(contents).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Format::Yaml => parse_yaml(contents).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse_json(contents: &str) -> Result<Vec<TypeDescriptor>, serde_json::Error> {
    if contents.trim_start().starts_with('[') {
        serde_json::from_str(contents)
    } else {
        serde_json::from_str(contents).map(|one| vec![one])
    }
}

fn parse_yaml(contents: &str) -> Result<Vec<TypeDescriptor>, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(contents)?;
    if value.is_sequence() {
        serde_yaml::from_value(value)
    } else {
        serde_yaml::from_value(value).map(|one| vec![one])
    }
}

/// Read every descriptor in `path`.
pub fn read_descriptors(path: &Path) -> Result<Vec<TypeDescriptor>, LoadError> {
    let format = Format::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let descriptors = parse_descriptors(&contents, format, path)?;
    debug!(
        path = %path.display(),
        count = descriptors.len(),
        "Loaded type descriptors."
    );
    Ok(descriptors)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("a.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("a.YML")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("a.yaml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("a.toml")), None);
        assert_eq!(Format::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_parse_single_and_many() {
        let path = Path::new("inline.json");
        let one = parse_descriptors(r#"{"name": "Widget"}"#, Format::Json, path).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].name, "Widget");

        let many = parse_descriptors(
            r#"[{"name": "Widget"}, {"name": "Gadget"}]"#,
            Format::Json,
            path,
        )
        .unwrap();
        assert_eq!(many.len(), 2);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "\
namespace: Acme
name: Widget
declarations:
  - kind: class
members:
  - kind: property
    name: Name
    type:
      name: string
    hasPublicGetter: true
";
        let parsed = parse_descriptors(yaml, Format::Yaml, Path::new("w.yaml")).unwrap();
        assert_eq!(parsed[0].namespace, "Acme");
        assert_eq!(parsed[0].members.len(), 1);
    }

    #[test]
    fn test_read_unsupported_extension() {
        let err = read_descriptors(Path::new("widget.xml")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_descriptors(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_field_errors_name_the_field() {
        let json = r#"{
  "name": "Widget",
  "declarations": [{"kind": "class"}],
  "members": [{"kind": "method", "name": "Run"}]
}"#;
        let err = parse_descriptors(json, Format::Json, Path::new("w.json")).unwrap_err();
        assert!(err.to_string().contains("returnType"), "{err}");

        let array = format!("[{json}]");
        let err = parse_descriptors(&array, Format::Json, Path::new("w.json")).unwrap_err();
        assert!(err.to_string().contains("returnType"), "{err}");

        let yaml = "\
name: Widget
members:
  - kind: method
    name: Run
";
        let err = parse_descriptors(yaml, Format::Yaml, Path::new("w.yaml")).unwrap_err();
        assert!(err.to_string().contains("returnType"), "{err}");
    }

    #[test]
    fn test_yaml_sequence_yields_many() {
        let yaml = "- name: Widget\n- name: Gadget\n";
        let parsed = parse_descriptors(yaml, Format::Yaml, Path::new("w.yaml")).unwrap();
        let names: Vec<&str> = parsed.iter().map(|ty| ty.name.as_str()).collect();
        assert_eq!(names, vec!["Widget", "Gadget"]);
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let err = parse_descriptors("{", Format::Json, Path::new("bad.json")).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }
}
