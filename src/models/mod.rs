// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod query;
pub mod record;
pub mod scan;
pub mod trace;

pub use query::{DnsRecord, QueryCommand, QueryRecord};
pub use record::{Provenance, Record, ToolFormat};
pub use scan::{ScanCommand, ScanRecord, ScannedHost, ScannedPort};
pub use trace::{TraceCommand, TraceHop, TraceRecord};
