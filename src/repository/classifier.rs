// file: src/repository/classifier.rs
// description: file classification by path tag
// reference: configurable path-based classification

use crate::config::TagRule;
use crate::models::ToolFormat;
use std::path::Path;

pub struct FileClassifier {
    rules: Vec<TagRule>,
}

impl FileClassifier {
    pub fn new(rules: Vec<TagRule>) -> Self {
        Self { rules }
    }

    /// Returns the format of the first rule whose tag occurs in `path`,
    /// or None when the file should be left alone.
    pub fn classify(&self, path: &Path) -> Option<ToolFormat> {
        let path_str = path.to_string_lossy();

        self.rules
            .iter()
            .find(|rule| path_str.contains(rule.tag.as_str()))
            .map(|rule| rule.format)
    }
}

impl Default for FileClassifier {
    fn default() -> Self {
        Self::new(crate::config::Config::default_config().classification.rules)
    }
}
