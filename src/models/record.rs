// file: src/models/record.rs
// description: tool format tags, provenance block and the per-file record variant
// reference: internal data structures

use crate::models::{QueryRecord, ScanRecord, TraceRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PRODUCER_NAME: &str = env!("CARGO_PKG_NAME");
pub const PRODUCER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolFormat {
    Scan,
    Query,
    Trace,
}

impl ToolFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolFormat::Scan => "scan",
            ToolFormat::Query => "query",
            ToolFormat::Trace => "trace",
        }
    }
}

impl fmt::Display for ToolFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies the producer of a record and echoes the input it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    pub name: String,
    pub version: String,
    pub format: ToolFormat,
    pub raw_input: String,
}

impl Provenance {
    pub fn new(format: ToolFormat, raw_input: &str) -> Self {
        Self {
            name: PRODUCER_NAME.to_string(),
            version: PRODUCER_VERSION.to_string(),
            format,
            raw_input: raw_input.to_string(),
        }
    }
}

/// One structured record per input file. Serializes as the inner record only,
/// the applied format is carried by `parser.format`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Scan(ScanRecord),
    Query(QueryRecord),
    Trace(TraceRecord),
}

impl Record {
    pub fn format(&self) -> ToolFormat {
        self.provenance().format
    }

    pub fn provenance(&self) -> &Provenance {
        match self {
            Record::Scan(record) => &record.parser,
            Record::Query(record) => &record.parser,
            Record::Trace(record) => &record.parser,
        }
    }
}

impl From<ScanRecord> for Record {
    fn from(record: ScanRecord) -> Self {
        Record::Scan(record)
    }
}

impl From<QueryRecord> for Record {
    fn from(record: QueryRecord) -> Self {
        Record::Query(record)
    }
}

impl From<TraceRecord> for Record {
    fn from(record: TraceRecord) -> Self {
        Record::Trace(record)
    }
}
