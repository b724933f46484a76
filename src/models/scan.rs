// file: src/models/scan.rs
// description: host and port scan record
// reference: nmap normal output format

use crate::models::{Provenance, ToolFormat};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanCommand {
    pub version: String,
    pub string: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedHost {
    pub ip_address: String,
    pub latency: String,
    pub mac_address: String,
    pub maker: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedPort {
    pub port: String,
    pub state: String,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub parser: Provenance,
    pub command: ScanCommand,
    pub os: String,
    pub host_list: Vec<ScannedHost>,
    pub port_list: Vec<ScannedPort>,
}

impl ScanRecord {
    pub fn new(raw_input: &str) -> Self {
        Self {
            parser: Provenance::new(ToolFormat::Scan, raw_input),
            command: ScanCommand::default(),
            os: String::new(),
            host_list: Vec::new(),
            port_list: Vec::new(),
        }
    }
}
