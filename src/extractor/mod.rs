// file: src/extractor/mod.rs
// description: tool output extraction module exports
// reference: internal module structure

pub mod patterns;
pub mod query;
pub mod scan;
pub mod trace;

pub use query::QueryExtractor;
pub use scan::ScanExtractor;
pub use trace::TraceExtractor;

use crate::models::{Record, ToolFormat};

/// Runs the extractor that belongs to `format` over `text`.
pub fn extract(format: ToolFormat, text: &str) -> Record {
    match format {
        ToolFormat::Scan => ScanExtractor::new().extract(text).into(),
        ToolFormat::Query => QueryExtractor::new().extract(text).into(),
        ToolFormat::Trace => TraceExtractor::new().extract(text).into(),
    }
}
