// file: src/exporter/json.rs
// description: indented json serialization of records next to their source files

use crate::error::{PipelineError, Result};
use crate::models::Record;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    indent: Vec<u8>,
    extension: String,
}

impl JsonExporter {
    pub fn new(indent: usize, extension: impl Into<String>) -> Self {
        Self {
            indent: vec![b' '; indent],
            extension: extension.into(),
        }
    }

    pub fn to_bytes(&self, record: &Record) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        record.serialize(&mut serializer)?;
        Ok(buffer)
    }

    /// `<source>.<extension>`, appended to the full file name.
    pub fn output_path(&self, source: &Path) -> PathBuf {
        let mut name: OsString = source.as_os_str().to_owned();
        name.push(".");
        name.push(&self.extension);
        PathBuf::from(name)
    }

    /// Serializes `record` and writes it beside `source`, replacing any
    /// earlier output.
    pub fn write(&self, record: &Record, source: &Path) -> Result<PathBuf> {
        let bytes = self.to_bytes(record)?;
        let output = self.output_path(source);

        fs::write(&output, &bytes).map_err(|source| PipelineError::FileOperation {
            path: output.clone(),
            source,
        })?;

        debug!("Wrote {} bytes to {}", bytes.len(), output.display());
        Ok(output)
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new(4, "json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QueryRecord;
    use tempfile::tempdir;

    #[test]
    fn test_output_path_appends_extension() {
        let exporter = JsonExporter::default();
        assert_eq!(
            exporter.output_path(Path::new("runs/scan1.nmap.txt")),
            PathBuf::from("runs/scan1.nmap.txt.json")
        );
    }

    #[test]
    fn test_four_space_indent() {
        let exporter = JsonExporter::default();
        let record = Record::from(QueryRecord::new(""));

        let text = String::from_utf8(exporter.to_bytes(&record).unwrap()).unwrap();

        assert!(text.starts_with("{\n    \"parser\": {\n        \"name\""));
        assert!(text.contains("\n    \"recordList\": []"));
    }

    #[test]
    fn test_write_overwrites_previous_output() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.dig");
        let exporter = JsonExporter::default();
        fs::write(exporter.output_path(&source), "stale").unwrap();

        let record = Record::from(QueryRecord::new("fresh"));
        let output = exporter.write(&record, &source).unwrap();

        let written = fs::read_to_string(output).unwrap();
        assert!(written.contains("\"rawInput\": \"fresh\""));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("gone").join("a.dig");
        let record = Record::from(QueryRecord::new(""));

        let result = JsonExporter::default().write(&record, &source);
        assert!(matches!(result, Err(PipelineError::FileOperation { .. })));
    }
}
