// file: src/pipeline/processor.rs
// description: converts one scanned file into a structured record
// reference: classifies by path, reads content and runs the matching extractor

use crate::config::TagRule;
use crate::error::{PipelineError, Result};
use crate::extractor;
use crate::models::Record;
use crate::repository::{FileClassifier, ScannedFile};
use std::fs;
use std::path::Path;
use tracing::debug;

pub struct FileProcessor {
    classifier: FileClassifier,
}

impl FileProcessor {
    pub fn new(rules: Vec<TagRule>) -> Self {
        Self {
            classifier: FileClassifier::new(rules),
        }
    }

    /// Returns None for files no rule claims; those are never read.
    pub fn process(&self, scanned_file: &ScannedFile) -> Result<Option<Record>> {
        let Some(format) = self
            .classifier
            .classify(Path::new(&scanned_file.relative_path))
        else {
            debug!("No tag matched, skipping: {}", scanned_file.relative_path);
            return Ok(None);
        };

        let content = self.read_file_content(&scanned_file.path)?;
        let record = extractor::extract(format, &content);

        debug!(
            "Extracted {} record from {}",
            record.format(),
            scanned_file.relative_path
        );

        Ok(Some(record))
    }

    /// Invalid UTF-8 is replaced with U+FFFD; only I/O failures are errors.
    fn read_file_content(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| PipelineError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
