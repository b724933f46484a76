// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod repository;
pub mod utils;

pub use config::{ClassificationConfig, Config, OutputConfig, ScanConfig, TagRule};
pub use error::{PipelineError, Result};
pub use exporter::JsonExporter;
pub use extractor::{QueryExtractor, ScanExtractor, TraceExtractor};
pub use models::{QueryRecord, Record, ScanRecord, ToolFormat, TraceRecord};
pub use pipeline::{FileProcessor, PipelineOrchestrator, PipelineStats, ProgressTracker};
pub use repository::{FileClassifier, FileScanner, ScannedFile};
