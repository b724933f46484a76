// file: src/models/query.rs
// description: dns query record
// reference: dig answer output format

use crate::models::{Provenance, ToolFormat};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryCommand {
    pub version: String,
    pub string: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsRecord {
    pub host: String,
    pub ttl: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub record: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRecord {
    pub parser: Provenance,
    pub command: QueryCommand,
    pub record_list: Vec<DnsRecord>,
}

impl QueryRecord {
    pub fn new(raw_input: &str) -> Self {
        Self {
            parser: Provenance::new(ToolFormat::Query, raw_input),
            command: QueryCommand::default(),
            record_list: Vec::new(),
        }
    }
}
