// file: src/models/trace.rs
// description: route trace record

use crate::models::{Provenance, ToolFormat};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceCommand {
    pub string: String,
    pub host: String,
    pub ip_address: String,
    pub max_hops: String,
    pub packet_size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceHop {
    pub hop: String,
    pub host: String,
    pub ip_address: String,
    pub latency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceRecord {
    pub parser: Provenance,
    pub command: TraceCommand,
    pub hop_list: Vec<TraceHop>,
}

impl TraceRecord {
    pub fn new(raw_input: &str) -> Self {
        Self {
            parser: Provenance::new(ToolFormat::Trace, raw_input),
            command: TraceCommand::default(),
            hop_list: Vec::new(),
        }
    }
}
