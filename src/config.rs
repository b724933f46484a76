// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use crate::models::ToolFormat;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "parse2json.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub scan: ScanConfig,
    pub classification: ClassificationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub follow_links: bool,
    pub output_extension: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassificationConfig {
    pub rules: Vec<TagRule>,
}

/// A file whose path contains `tag` is handed to the `format` extractor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TagRule {
    pub tag: String,
    pub format: ToolFormat,
}

impl TagRule {
    pub fn new(tag: impl Into<String>, format: ToolFormat) -> Self {
        Self {
            tag: tag.into(),
            format,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub indent: usize,
}

impl Config {
    /// Layers defaults, an optional TOML file and `PARSE2JSON__*` environment
    /// variables, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default_config())?);

        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        builder = builder.add_source(config::File::from(path).required(false));

        builder = builder.add_source(
            config::Environment::with_prefix("PARSE2JSON")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            scan: ScanConfig {
                root: PathBuf::from("."),
                follow_links: false,
                output_extension: "json".to_string(),
            },
            classification: ClassificationConfig {
                rules: vec![
                    TagRule::new("nmap", ToolFormat::Scan),
                    TagRule::new("dig", ToolFormat::Query),
                    TagRule::new("traceroute", ToolFormat::Trace),
                ],
            },
            output: OutputConfig { indent: 4 },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.classification.rules.is_empty() {
            return Err(PipelineError::Config(
                "classification.rules must not be empty".to_string(),
            ));
        }

        if let Some(rule) = self.classification.rules.iter().find(|r| r.tag.is_empty()) {
            return Err(PipelineError::Config(format!(
                "empty tag for {} rule would match every file",
                rule.format
            )));
        }

        if self.scan.output_extension.is_empty() {
            return Err(PipelineError::Config(
                "scan.output_extension must not be empty".to_string(),
            ));
        }

        if self.output.indent == 0 {
            return Err(PipelineError::Config(
                "output.indent must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_rules_order() {
        let config = Config::default_config();
        let tags: Vec<&str> = config
            .classification
            .rules
            .iter()
            .map(|r| r.tag.as_str())
            .collect();

        assert_eq!(tags, vec!["nmap", "dig", "traceroute"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(Some(&temp.path().join("absent.toml"))).unwrap();

        assert_eq!(config.scan.root, PathBuf::from("."));
        assert_eq!(config.output.indent, 4);
        assert_eq!(config.classification.rules.len(), 3);
    }

    #[test]
    fn test_load_file_overrides_rules() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(
            &path,
            r#"
[scan]
root = "captures"

[[classification.rules]]
tag = "tr-"
format = "trace"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.scan.root, PathBuf::from("captures"));
        assert_eq!(config.scan.output_extension, "json");
        assert_eq!(
            config.classification.rules,
            vec![TagRule::new("tr-", ToolFormat::Trace)]
        );
    }

    #[test]
    fn test_validate_rejects_empty_tag() {
        let mut config = Config::default_config();
        config.classification.rules.push(TagRule::new("", ToolFormat::Scan));

        assert!(matches!(config.validate(), Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_indent() {
        let mut config = Config::default_config();
        config.output.indent = 0;

        assert!(config.validate().is_err());
    }
}
